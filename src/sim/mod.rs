//! Discrete-event scheduling simulators.
//!
//! Two drivers share one post-processing step:
//!
//! - [`simulate_mlq`]: fixed Multi-Level Queue — processes are partitioned
//!   into queues once and never migrate.
//! - [`simulate_mlfq`]: Multi-Level Feedback Queue — every process enters
//!   level 0 and is demoted when it uses a dispatch without finishing.
//! - [`SimulationKpi`]: turnaround/waiting metrics and aggregates.
//!
//! [`simulate`] is the validated entry point; the driver functions assume
//! already-validated input but are bounded so malformed input terminates
//! with a partial result instead of looping forever.

mod kpi;
mod mlfq;
mod mlq;

pub use kpi::{ProcessMetrics, SimulationKpi};
pub use mlfq::simulate_mlfq;
pub use mlq::simulate_mlq;

use serde::{Deserialize, Serialize};

use crate::models::{GanttEntry, Process, QueueConfig};
use crate::validation::{validate_input, ValidationError};

/// Which dispatching discipline to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Fixed multi-level queue: per-process queue assignments are immutable.
    Mlq,
    /// Multi-level feedback queue: all processes enter level 0 and are
    /// demoted on quantum expiry.
    Mlfq,
}

/// Output of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The input processes with execution state populated. On a partial
    /// result (starvation deadlock) some `finish` values remain unset.
    pub processes: Vec<Process>,
    /// CPU allocation timeline, contiguous and non-overlapping.
    pub gantt: Vec<GanttEntry>,
}

impl SimulationResult {
    /// Whether every process completed. `false` indicates the driver hit a
    /// starvation deadlock and returned a partial result.
    pub fn is_complete(&self) -> bool {
        self.processes.iter().all(Process::is_finished)
    }

    /// Latest completion time across all finished processes.
    pub fn makespan(&self) -> u64 {
        self.processes
            .iter()
            .filter_map(|p| p.finish)
            .max()
            .unwrap_or(0)
    }

    /// Total CPU time spent executing processes (non-idle Gantt time).
    pub fn busy_time(&self) -> u64 {
        self.gantt
            .iter()
            .filter(|e| !e.is_idle())
            .map(GanttEntry::duration)
            .sum()
    }

    /// Computes turnaround/waiting metrics for this result.
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(self)
    }
}

/// Runs a simulation after validating the input.
///
/// Returns every configuration problem at once (Round-Robin quantum, queue
/// ranges, process ids and bursts) rather than failing on the first.
/// An empty process list yields an empty result.
///
/// # Example
/// ```
/// use mlfq_sim::models::{Process, QueueConfig};
/// use mlfq_sim::policy::Algorithm;
/// use mlfq_sim::sim::{simulate, Mode};
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
/// let queues = vec![QueueConfig::new(Algorithm::Fcfs)];
///
/// let result = simulate(Mode::Mlq, processes, &queues).unwrap();
/// assert!(result.is_complete());
/// assert_eq!(result.processes[0].finish, Some(5));
/// ```
pub fn simulate(
    mode: Mode,
    processes: Vec<Process>,
    queues: &[QueueConfig],
) -> Result<SimulationResult, Vec<ValidationError>> {
    validate_input(mode, &processes, queues)?;

    let result = match mode {
        Mode::Mlq => simulate_mlq(processes, queues),
        Mode::Mlfq => simulate_mlfq(processes, queues),
    };
    Ok(result)
}

/// Appends a Gantt span, extending the previous span when it continues the
/// same label without a gap. Keeps preemptive unit steps (SRTF) as one
/// readable span per contiguous run.
pub(crate) fn push_span(gantt: &mut Vec<GanttEntry>, entry: GanttEntry) {
    if let Some(last) = gantt.last_mut() {
        if last.label == entry.label && last.end == entry.start {
            last.end = entry.end;
            return;
        }
    }
    gantt.push(entry);
}

/// Upper bound on driver iterations: `sum(burst) + max(arrival) + 1`.
///
/// Every dispatch consumes at least one burst unit and every idle jump
/// advances time toward the latest arrival, so a correct run always stays
/// under this bound; exceeding it means the input was malformed (e.g. a
/// zero quantum handed directly to a driver).
pub(crate) fn iteration_limit(processes: &[Process]) -> u64 {
    let total_burst: u64 = processes.iter().map(|p| p.burst).sum();
    let max_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    total_burst + max_arrival + 1
}

/// Earliest arrival strictly after `now` among unfinished processes.
pub(crate) fn next_arrival_after(processes: &[Process], now: u64) -> Option<u64> {
    processes
        .iter()
        .filter(|p| p.remaining > 0 && p.arrival > now)
        .map(|p| p.arrival)
        .min()
}
