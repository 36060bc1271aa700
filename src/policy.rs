//! Per-queue selection algorithms.
//!
//! Each queue in a simulation is tagged with one [`Algorithm`]. Given the
//! queue's ready members at the current time, the algorithm selects exactly
//! one process to dispatch and decides how long it runs before the next
//! scheduling decision.
//!
//! # Score convention
//!
//! Lower key wins: FCFS minimizes arrival, SJF/SRTF minimize remaining time,
//! Priority minimizes the priority value. Ties are broken by earliest
//! arrival, then lowest id, so selection is fully deterministic.
//!
//! # Dispatch granularity
//!
//! The non-preemptive disciplines (FCFS, SJF, Priority) run the selected
//! process to completion in a single dispatch. This is equivalent to
//! unit-stepping only because every arrival is known before the run starts
//! and the ready set is recomputed at dispatch boundaries; no mid-burst
//! event can change the outcome. If dynamic arrivals or I/O bursts are ever
//! added, these disciplines must switch to unit-stepping.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// A queue's selection algorithm.
///
/// A closed set: both simulators match exhaustively on the variant, so a new
/// discipline is a compile-time-checked extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come First-Served: earliest arrival, runs to completion.
    Fcfs,
    /// Shortest Job First: smallest remaining time, non-preemptive.
    Sjf,
    /// Shortest Remaining Time First: smallest remaining time, re-evaluated
    /// every time unit (preemptive).
    Srtf,
    /// Priority: smallest priority value, non-preemptive.
    Priority,
    /// Round-Robin: head of queue order, runs for at most one quantum.
    RoundRobin,
}

impl Algorithm {
    /// Algorithm name as presented to users (e.g. `"SRTF"`).
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Whether a dispatched process can lose the CPU before completion.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::Srtf | Algorithm::RoundRobin)
    }

    /// Selects one process from `candidates` (indices into `processes`).
    ///
    /// `candidates` must hold only ready members, in queue order (arrival
    /// order for FCFS/RR tie-breaking). Returns `None` when empty.
    pub fn select(&self, processes: &[Process], candidates: &[usize]) -> Option<usize> {
        match self {
            Algorithm::Fcfs => candidates
                .iter()
                .copied()
                .min_by_key(|&i| (processes[i].arrival, processes[i].id)),
            Algorithm::Sjf | Algorithm::Srtf => candidates.iter().copied().min_by_key(|&i| {
                (
                    processes[i].remaining,
                    processes[i].arrival,
                    processes[i].id,
                )
            }),
            Algorithm::Priority => candidates.iter().copied().min_by_key(|&i| {
                (
                    processes[i].priority,
                    processes[i].arrival,
                    processes[i].id,
                )
            }),
            // Queue order is arrival order; the head goes next.
            Algorithm::RoundRobin => candidates.first().copied(),
        }
    }

    /// Execution length for one dispatch of a process with `remaining` time
    /// left, given the queue's `quantum`.
    pub fn slice(&self, quantum: Option<u64>, remaining: u64) -> u64 {
        match self {
            Algorithm::Fcfs | Algorithm::Sjf | Algorithm::Priority => remaining,
            Algorithm::Srtf => 1,
            Algorithm::RoundRobin => quantum.unwrap_or(0).min(remaining),
        }
    }
}
