//! Process model.
//!
//! A process is a unit of CPU demand: it arrives at a known time, requires a
//! fixed burst of CPU, and carries a priority and (for MLQ) a fixed queue
//! assignment. All times are in abstract simulated-time units.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// The `remaining`, `start` and `finish` fields are execution state owned by
/// the active simulator for the duration of one run; they are reset by
/// [`Process::reset`] when a run begins.
///
/// # Invariants (for a correct simulation)
/// - `remaining` decreases monotonically from `burst` to 0, never underflows.
/// - `start <= finish` once both are set.
/// - `finish - arrival >= burst` (turnaround cannot be less than the burst).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (positive, assigned in input order).
    pub id: u32,
    /// Arrival time.
    pub arrival: u64,
    /// Total required CPU time (positive).
    pub burst: u64,
    /// Scheduling priority. Lower value = higher priority (0 is highest).
    pub priority: u32,
    /// Queue index. For MLQ this is the fixed assignment; for MLFQ it is the
    /// current level, initialized to 0 and mutated only by demotion.
    pub queue: usize,
    /// CPU time still required. Starts equal to `burst`.
    pub remaining: u64,
    /// Time of first dispatch. `None` until the process first runs.
    pub start: Option<u64>,
    /// Time of completion. `None` until `remaining` reaches 0.
    pub finish: Option<u64>,
}

impl Process {
    /// Creates a new process with the given identity and CPU demand.
    pub fn new(id: u32, arrival: u64, burst: u64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
            queue: 0,
            remaining: burst,
            start: None,
            finish: None,
        }
    }

    /// Sets the scheduling priority (lower = higher priority).
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the fixed queue assignment (MLQ only; ignored by MLFQ).
    pub fn with_queue(mut self, queue: usize) -> Self {
        self.queue = queue;
        self
    }

    /// Display label, e.g. `"P3"`.
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }

    /// Whether the process can run at `now`: it has arrived and still
    /// requires CPU.
    #[inline]
    pub fn is_ready(&self, now: u64) -> bool {
        self.arrival <= now && self.remaining > 0
    }

    /// Whether the process has completed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finish.is_some()
    }

    /// Clears execution state for a fresh run.
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.start = None;
        self.finish = None;
    }
}
