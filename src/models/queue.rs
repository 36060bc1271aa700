//! Queue configuration model.

use serde::{Deserialize, Serialize};

use crate::policy::Algorithm;

/// Scheduling policy for one queue (MLQ) or one priority level (MLFQ).
///
/// `quantum` is meaningful only for [`Algorithm::RoundRobin`]; validation
/// rejects a Round-Robin queue without a positive quantum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Selection algorithm applied to this queue's ready members.
    pub algorithm: Algorithm,
    /// Maximum CPU time granted per dispatch (Round-Robin only).
    pub quantum: Option<u64>,
}

impl QueueConfig {
    /// Creates a queue with the given algorithm and no quantum.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            quantum: None,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: u64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Convenience constructor for a Round-Robin queue.
    pub fn round_robin(quantum: u64) -> Self {
        Self::new(Algorithm::RoundRobin).with_quantum(quantum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_builder() {
        let q = QueueConfig::new(Algorithm::Sjf);
        assert_eq!(q.algorithm, Algorithm::Sjf);
        assert_eq!(q.quantum, None);

        let rr = QueueConfig::round_robin(3);
        assert_eq!(rr.algorithm, Algorithm::RoundRobin);
        assert_eq!(rr.quantum, Some(3));
    }
}
