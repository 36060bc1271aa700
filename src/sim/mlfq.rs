//! Multi-Level Feedback Queue simulator.
//!
//! Unlike MLQ, the queues here are logical priority levels shared by all
//! processes: every process is admitted into level 0 when it arrives, and a
//! process that uses a dispatch without finishing is demoted one level
//! (clamped at the lowest level, which typically runs FCFS and absorbs
//! long-running work). SRTF is the exception — its survivors are reinserted
//! into the same level so they keep competing preemptively each time unit.
//!
//! # Algorithm (per iteration)
//!
//! 1. Admit every not-yet-admitted process whose arrival has passed into
//!    level 0, in arrival order.
//! 2. Service the first non-empty level with its configured algorithm.
//!    Members are already admitted, so no arrival filtering is needed.
//! 3. Remove the dispatched process from its level, then: finished → record
//!    completion; SRTF survivor → same level; any other survivor → demote.
//! 4. If every level is empty, jump to the next unadmitted arrival under an
//!    Idle span; if none remains, the run ends.

use crate::models::{GanttEntry, Process, QueueConfig};
use crate::policy::Algorithm;

use super::{iteration_limit, push_span, SimulationResult};

/// Runs the MLFQ simulation.
///
/// Input queue assignments are ignored: every process starts at level 0 and
/// `queue` tracks its current level thereafter. Assumes validated input; the
/// iteration bound turns malformed input into a partial result.
pub fn simulate_mlfq(mut processes: Vec<Process>, queues: &[QueueConfig]) -> SimulationResult {
    for p in &mut processes {
        p.reset();
        p.queue = 0;
    }

    let total = processes.len();
    if total == 0 || queues.is_empty() {
        return SimulationResult {
            processes,
            gantt: Vec::new(),
        };
    }

    // Admission order: (arrival, id). `cursor` separates admitted processes
    // from those still to arrive.
    let mut order: Vec<usize> = (0..total).collect();
    order.sort_by_key(|&i| (processes[i].arrival, processes[i].id));
    let mut cursor = 0;

    let mut levels: Vec<Vec<usize>> = vec![Vec::new(); queues.len()];
    let last_level = queues.len() - 1;

    let mut gantt: Vec<GanttEntry> = Vec::new();
    let mut now: u64 = 0;
    let mut completed = 0;
    let limit = iteration_limit(&processes);
    let mut iterations: u64 = 0;

    while completed < total {
        iterations += 1;
        if iterations > limit {
            break;
        }

        while cursor < order.len() && processes[order[cursor]].arrival <= now {
            levels[0].push(order[cursor]);
            cursor += 1;
        }

        let mut dispatched = false;
        for li in 0..queues.len() {
            if levels[li].is_empty() {
                continue;
            }
            let queue = &queues[li];
            let Some(pick) = queue.algorithm.select(&processes, &levels[li]) else {
                continue;
            };
            let len = queue.algorithm.slice(queue.quantum, processes[pick].remaining);
            if len == 0 {
                continue;
            }
            if let Some(pos) = levels[li].iter().position(|&i| i == pick) {
                levels[li].remove(pos);
            }

            let proc = &mut processes[pick];
            if proc.start.is_none() {
                proc.start = Some(now);
            }
            push_span(&mut gantt, GanttEntry::run(proc.id, now, now + len));
            proc.remaining -= len;
            now += len;

            if proc.remaining == 0 {
                proc.finish = Some(now);
                completed += 1;
            } else if queue.algorithm == Algorithm::Srtf {
                // Stays at its level and keeps competing each unit.
                levels[li].push(pick);
            } else {
                let next = (li + 1).min(last_level);
                proc.queue = next;
                levels[next].push(pick);
            }

            dispatched = true;
            break;
        }

        if !dispatched {
            if cursor < order.len() {
                let next = processes[order[cursor]].arrival;
                push_span(&mut gantt, GanttEntry::idle(now, next));
                now = next;
            } else {
                break;
            }
        }
    }

    SimulationResult { processes, gantt }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(result: &SimulationResult) {
        for pair in result.gantt.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "gantt must be contiguous");
        }
        for e in &result.gantt {
            assert!(e.start < e.end, "gantt spans must be non-empty");
        }
        let total_burst: u64 = result.processes.iter().map(|p| p.burst).sum();
        assert_eq!(result.busy_time(), total_burst);
        for p in &result.processes {
            let start = p.start.unwrap();
            let finish = p.finish.unwrap();
            assert!(start >= p.arrival);
            assert!(start <= finish);
            assert!(finish - p.arrival >= p.burst);
        }
    }

    #[test]
    fn test_quantum_expiry_demotes_one_level() {
        let processes = vec![Process::new(1, 0, 5), Process::new(2, 0, 5)];
        let queues = vec![
            QueueConfig::round_robin(2),
            QueueConfig::new(Algorithm::Fcfs),
        ];
        let result = simulate_mlfq(processes, &queues);

        // Both use their level-0 quantum, drop to level 1, and run to
        // completion there under FCFS.
        assert_eq!(
            result.gantt,
            vec![
                GanttEntry::run(1, 0, 2),
                GanttEntry::run(2, 2, 4),
                GanttEntry::run(1, 4, 7),
                GanttEntry::run(2, 7, 10),
            ]
        );
        assert_eq!(result.processes[0].queue, 1);
        assert_eq!(result.processes[1].queue, 1);
        assert_well_formed(&result);
    }

    #[test]
    fn test_srtf_survivor_stays_at_its_level() {
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 1, 1)];
        let queues = vec![
            QueueConfig::new(Algorithm::Srtf),
            QueueConfig::new(Algorithm::Fcfs),
        ];
        let result = simulate_mlfq(processes, &queues);

        // P2 arrives at t=1 with less remaining work and preempts; P1 never
        // leaves level 0 despite repeated partial dispatches.
        assert_eq!(
            result.gantt,
            vec![
                GanttEntry::run(1, 0, 1),
                GanttEntry::run(2, 1, 2),
                GanttEntry::run(1, 2, 4),
            ]
        );
        assert_eq!(result.processes[0].queue, 0);
        assert_eq!(result.processes[1].queue, 0);
        assert_well_formed(&result);
    }

    #[test]
    fn test_demotion_clamps_at_lowest_level() {
        // Single Round-Robin level: "demotion" reinserts at the same level's
        // tail, which degenerates to plain Round-Robin.
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 3)];
        let result = simulate_mlfq(processes, &[QueueConfig::round_robin(2)]);

        assert_eq!(
            result.gantt,
            vec![
                GanttEntry::run(1, 0, 2),
                GanttEntry::run(2, 2, 4),
                GanttEntry::run(1, 4, 5),
                GanttEntry::run(2, 5, 6),
            ]
        );
        assert_eq!(result.processes[0].queue, 0);
        assert_well_formed(&result);
    }

    #[test]
    fn test_three_level_textbook_config() {
        let processes = vec![Process::new(1, 0, 10), Process::new(2, 2, 3)];
        let queues = vec![
            QueueConfig::round_robin(2),
            QueueConfig::round_robin(4),
            QueueConfig::new(Algorithm::Fcfs),
        ];
        let result = simulate_mlfq(processes, &queues);

        // P1: 2 units at level 0, demoted. P2 arrives at t=2, takes its
        // level-0 quantum, is demoted behind P1 at level 1. Level 1 runs
        // P1 (4 units, demoted to 2), then P2 finishes (1 unit); level 2
        // absorbs P1's tail.
        assert_eq!(
            result.gantt,
            vec![
                GanttEntry::run(1, 0, 2),
                GanttEntry::run(2, 2, 4),
                GanttEntry::run(1, 4, 8),
                GanttEntry::run(2, 8, 9),
                GanttEntry::run(1, 9, 13),
            ]
        );
        assert_eq!(result.processes[0].finish, Some(13));
        assert_eq!(result.processes[0].queue, 2);
        assert_eq!(result.processes[1].finish, Some(9));
        assert_eq!(result.processes[1].queue, 1);
        assert_well_formed(&result);
    }

    #[test]
    fn test_input_queue_assignment_is_ignored() {
        let processes = vec![Process::new(1, 0, 2).with_queue(7)];
        let result = simulate_mlfq(processes, &[QueueConfig::new(Algorithm::Fcfs)]);
        assert_eq!(result.processes[0].finish, Some(2));
        assert_eq!(result.processes[0].queue, 0);
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let processes = vec![Process::new(1, 5, 3)];
        let result = simulate_mlfq(processes, &[QueueConfig::new(Algorithm::Fcfs)]);
        assert_eq!(
            result.gantt,
            vec![GanttEntry::idle(0, 5), GanttEntry::run(1, 5, 8)]
        );
        assert_well_formed(&result);
    }

    #[test]
    fn test_admission_preserves_arrival_order() {
        // Same arrival: lower id is admitted first and heads the RR queue.
        let processes = vec![Process::new(2, 0, 2), Process::new(1, 0, 2)];
        let result = simulate_mlfq(processes, &[QueueConfig::round_robin(2)]);
        assert_eq!(
            result.gantt,
            vec![GanttEntry::run(1, 0, 2), GanttEntry::run(2, 2, 4)]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let result = simulate_mlfq(Vec::new(), &[QueueConfig::new(Algorithm::Fcfs)]);
        assert!(result.gantt.is_empty());

        let result = simulate_mlfq(vec![Process::new(1, 0, 1)], &[]);
        assert!(!result.is_complete());
        assert!(result.gantt.is_empty());
    }
}
