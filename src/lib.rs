//! CPU scheduling simulator for multi-level queue disciplines.
//!
//! Simulates process dispatching under a fixed Multi-Level Queue (MLQ) or a
//! feedback-driven Multi-Level Feedback Queue (MLFQ), producing a Gantt
//! timeline of CPU allocation and per-process performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `QueueConfig`, `GanttEntry`
//! - **`policy`**: Per-queue selection algorithms (FCFS, SJF, SRTF,
//!   Priority, Round-Robin)
//! - **`sim`**: The MLQ and MLFQ discrete-event drivers, entry point,
//!   and KPI calculation
//! - **`validation`**: Input integrity checks (quantum, queue ranges, IDs)
//!
//! # Architecture
//!
//! The simulation is single-threaded and deterministic: all arrivals are
//! known up front, the drivers own and exclusively mutate process state for
//! the duration of one run, and the result is a pure function of the input.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 8

pub mod models;
pub mod policy;
pub mod sim;
pub mod validation;
