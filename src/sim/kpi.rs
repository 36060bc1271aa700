//! Simulation performance metrics.
//!
//! Derives per-process and aggregate indicators from a completed run.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish − arrival |
//! | Waiting | turnaround − burst |
//! | Makespan | latest completion time |
//! | CPU utilization | busy time / makespan |
//!
//! Waiting time is signed: it is non-negative for any correct simulation,
//! and a negative value signals a simulator defect (an execution slice
//! exceeded the remaining burst, or finish was computed before arrival).

use serde::{Deserialize, Serialize};

use super::SimulationResult;

/// Metrics for one completed process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process id.
    pub id: u32,
    /// Completion time.
    pub finish: u64,
    /// finish − arrival.
    pub turnaround: u64,
    /// turnaround − burst. Negative only if the simulation is defective.
    pub waiting: i64,
}

/// Aggregate performance indicators for one run.
///
/// Only completed processes contribute; a partial result (starvation
/// deadlock) is averaged over the processes that did finish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Per-process metrics, in input order, completed processes only.
    pub per_process: Vec<ProcessMetrics>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Latest completion time.
    pub makespan: u64,
    /// Fraction of the makespan spent executing (0.0..1.0).
    pub cpu_utilization: f64,
}

impl SimulationKpi {
    /// Computes metrics from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let mut per_process = Vec::new();
        let mut total_turnaround: u64 = 0;
        let mut total_waiting: i64 = 0;

        for p in &result.processes {
            if let Some(finish) = p.finish {
                let turnaround = finish - p.arrival;
                let waiting = turnaround as i64 - p.burst as i64;
                total_turnaround += turnaround;
                total_waiting += waiting;
                per_process.push(ProcessMetrics {
                    id: p.id,
                    finish,
                    turnaround,
                    waiting,
                });
            }
        }

        let count = per_process.len();
        let (avg_turnaround, avg_waiting) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / count as f64,
                total_waiting as f64 / count as f64,
            )
        };

        let makespan = result.makespan();
        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            result.busy_time() as f64 / makespan as f64
        };

        Self {
            per_process,
            avg_turnaround,
            avg_waiting,
            makespan,
            cpu_utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GanttEntry, Process};

    fn finished(id: u32, arrival: u64, burst: u64, finish: u64) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.remaining = 0;
        p.start = Some(arrival);
        p.finish = Some(finish);
        p
    }

    #[test]
    fn test_turnaround_and_waiting() {
        // FCFS over P1(a0,b5), P2(a1,b3): finishes 5 and 8.
        let result = SimulationResult {
            processes: vec![finished(1, 0, 5, 5), finished(2, 1, 3, 8)],
            gantt: vec![GanttEntry::run(1, 0, 5), GanttEntry::run(2, 5, 8)],
        };
        let kpi = SimulationKpi::calculate(&result);

        assert_eq!(kpi.per_process[0].turnaround, 5);
        assert_eq!(kpi.per_process[0].waiting, 0);
        assert_eq!(kpi.per_process[1].turnaround, 7);
        assert_eq!(kpi.per_process[1].waiting, 4);
        assert!((kpi.avg_turnaround - 6.0).abs() < 1e-10);
        assert!((kpi.avg_waiting - 2.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 8);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_utilization_accounts_for_idle_time() {
        let result = SimulationResult {
            processes: vec![finished(1, 5, 3, 8)],
            gantt: vec![GanttEntry::idle(0, 5), GanttEntry::run(1, 5, 8)],
        };
        let kpi = SimulationKpi::calculate(&result);
        assert_eq!(kpi.makespan, 8);
        assert!((kpi.cpu_utilization - 3.0 / 8.0).abs() < 1e-10);
        assert_eq!(kpi.per_process[0].waiting, 0);
    }

    #[test]
    fn test_partial_result_skips_unfinished() {
        let result = SimulationResult {
            processes: vec![finished(1, 0, 2, 2), Process::new(2, 0, 4)],
            gantt: vec![GanttEntry::run(1, 0, 2)],
        };
        let kpi = SimulationKpi::calculate(&result);
        assert_eq!(kpi.per_process.len(), 1);
        assert_eq!(kpi.per_process[0].id, 1);
    }

    #[test]
    fn test_empty_result() {
        let result = SimulationResult {
            processes: Vec::new(),
            gantt: Vec::new(),
        };
        let kpi = SimulationKpi::calculate(&result);
        assert!(kpi.per_process.is_empty());
        assert_eq!(kpi.avg_turnaround, 0.0);
        assert_eq!(kpi.avg_waiting, 0.0);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.cpu_utilization, 0.0);
    }
}
