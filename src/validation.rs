//! Input validation for simulation runs.
//!
//! Checks the structural integrity of processes and queue configurations
//! before a simulation begins. Detects:
//! - Round-Robin queues without a positive quantum
//! - MLQ queue assignments out of range
//! - Duplicate or zero process ids
//! - Zero bursts
//! - A non-empty process list with no queues
//!
//! All violations are collected and reported together; the simulators do not
//! attempt partial recovery from an invalid configuration.

use std::collections::HashSet;

use crate::models::{Process, QueueConfig};
use crate::policy::Algorithm;
use crate::sim::Mode;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same id.
    DuplicateId,
    /// A process id is zero (ids are positive).
    InvalidId,
    /// A process has a zero burst.
    InvalidBurst,
    /// A Round-Robin queue has no positive quantum.
    InvalidQuantum,
    /// An MLQ queue assignment points past the last queue.
    QueueOutOfRange,
    /// Processes were supplied but no queues were.
    NoQueues,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation input.
///
/// Checks:
/// 1. At least one queue exists when there are processes to run
/// 2. Every Round-Robin queue carries a positive quantum
/// 3. Process ids are positive and unique
/// 4. Every burst is positive
/// 5. For MLQ, every queue assignment is in range
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    mode: Mode,
    processes: &[Process],
    queues: &[QueueConfig],
) -> ValidationResult {
    let mut errors = Vec::new();

    if !processes.is_empty() && queues.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoQueues,
            "At least one queue is required",
        ));
    }

    for (qi, queue) in queues.iter().enumerate() {
        if queue.algorithm == Algorithm::RoundRobin && queue.quantum.unwrap_or(0) == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Queue {qi} is Round-Robin but has no positive quantum"),
            ));
        }
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ids must be positive",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", p.id),
            ));
        }

        if p.burst == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process P{} has a zero burst", p.id),
            ));
        }

        if mode == Mode::Mlq && p.queue >= queues.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::QueueOutOfRange,
                format!(
                    "Process P{} is assigned to queue {} but only {} queue(s) exist",
                    p.id,
                    p.queue,
                    queues.len()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
