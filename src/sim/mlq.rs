//! Fixed Multi-Level Queue simulator.
//!
//! Processes are partitioned into queues once, by their pre-assigned queue
//! index, and never migrate; a Round-Robin member rotates within its own
//! queue. Queue 0 has the highest priority and a lower queue is never
//! serviced while a higher queue has a ready member.
//!
//! # Algorithm (per iteration)
//!
//! 1. Scan queues in index order; the first queue with a ready member
//!    (arrived, unfinished) is serviced with its configured algorithm.
//! 2. The selected process runs for the algorithm's slice; a Gantt span is
//!    recorded and time advances.
//! 3. A finished process leaves its queue; a Round-Robin survivor moves to
//!    the tail of the same queue.
//! 4. If nothing is ready, time jumps to the next future arrival under an
//!    Idle span; if no arrival remains, the run ends (possibly partial).

use crate::models::{GanttEntry, Process, QueueConfig};
use crate::policy::Algorithm;

use super::{iteration_limit, next_arrival_after, push_span, SimulationResult};

/// Runs the MLQ simulation.
///
/// Assumes validated input (see [`crate::validation`]); on malformed input
/// the iteration bound terminates the run with a partial result (some
/// processes left with `finish == None`) instead of looping.
pub fn simulate_mlq(mut processes: Vec<Process>, queues: &[QueueConfig]) -> SimulationResult {
    for p in &mut processes {
        p.reset();
    }

    let total = processes.len();

    // Index arena: the backing process vector never changes shape; queues
    // hold indices into it, ordered by (arrival, id) so FCFS/RR head-of-queue
    // tie-breaking is deterministic.
    let mut order: Vec<usize> = (0..total).collect();
    order.sort_by_key(|&i| (processes[i].arrival, processes[i].id));
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); queues.len()];
    for i in order {
        if let Some(list) = members.get_mut(processes[i].queue) {
            list.push(i);
        }
    }

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

        let mut dispatched = false;
        for (qi, queue) in queues.iter().enumerate() {
            let ready: Vec<usize> = members[qi]
                .iter()
                .copied()
                .filter(|&i| processes[i].is_ready(now))
                .collect();
            let Some(pick) = queue.algorithm.select(&processes, &ready) else {
                continue;
            };
            let len = queue.algorithm.slice(queue.quantum, processes[pick].remaining);
            if len == 0 {
                // A zero slice cannot advance time (zero quantum); treat the
                // queue as unserviceable rather than spin.
                continue;
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
                members[qi].retain(|&i| i != pick);
            } else if queue.algorithm == Algorithm::RoundRobin {
                // Quantum expired: rotate to the tail of the same queue.
                members[qi].retain(|&i| i != pick);
                members[qi].push(pick);
            }

            dispatched = true;
            break;
        }

        if !dispatched {
            match next_arrival_after(&processes, now) {
                Some(next) => {
                    push_span(&mut gantt, GanttEntry::idle(now, next));
                    now = next;
                }
                // Nothing ready and nothing arriving: starvation deadlock.
                None => break,
            }
        }
    }

    SimulationResult { processes, gantt }
}
