//! Scheduling domain models.
//!
//! Leaf data types for describing a simulation input and its output.
//! The simulators in [`crate::sim`] own and mutate process state for the
//! duration of one run; these types carry no logic beyond construction
//! and simple derived accessors.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Identity and per-run execution state |
//! | `QueueConfig` | Selection algorithm + quantum for one queue |
//! | `GanttEntry` | One span of CPU allocation (or idleness) |

mod gantt;
mod process;
mod queue;

pub use gantt::{GanttEntry, GanttLabel};
pub use process::Process;
pub use queue::QueueConfig;
