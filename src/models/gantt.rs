//! Gantt timeline model.
//!
//! A simulation produces a sequence of [`GanttEntry`] spans recording which
//! process held the CPU over each half-open interval `[start, end)`. For a
//! well-formed run the entries are contiguous (each entry's `end` equals the
//! next entry's `start`) and non-overlapping; gaps where no process is ready
//! appear as explicit [`GanttLabel::Idle`] spans.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who held the CPU during a Gantt span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GanttLabel {
    /// A process, identified by its id.
    Process(u32),
    /// No process was ready.
    Idle,
}

impl fmt::Display for GanttLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GanttLabel::Process(id) => write!(f, "P{id}"),
            GanttLabel::Idle => write!(f, "Idle"),
        }
    }
}

/// One immutable span of the execution timeline: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// CPU holder over this span.
    pub label: GanttLabel,
    /// Span start (inclusive).
    pub start: u64,
    /// Span end (exclusive). Always greater than `start`.
    pub end: u64,
}

impl GanttEntry {
    /// Creates a span in which process `id` ran.
    pub fn run(id: u32, start: u64, end: u64) -> Self {
        Self {
            label: GanttLabel::Process(id),
            start,
            end,
        }
    }

    /// Creates an idle span.
    pub fn idle(start: u64, end: u64) -> Self {
        Self {
            label: GanttLabel::Idle,
            start,
            end,
        }
    }

    /// Span length.
    #[inline]
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    /// Whether this span represents CPU idleness.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.label == GanttLabel::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(GanttLabel::Process(3).to_string(), "P3");
        assert_eq!(GanttLabel::Idle.to_string(), "Idle");
    }

    #[test]
    fn test_entry_accessors() {
        let e = GanttEntry::run(1, 2, 7);
        assert_eq!(e.duration(), 5);
        assert!(!e.is_idle());

        let idle = GanttEntry::idle(0, 2);
        assert_eq!(idle.duration(), 2);
        assert!(idle.is_idle());
    }
}
