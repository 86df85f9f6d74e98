//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: backup, scan and per-pair reporting
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{PairReport, Problem, Stage, TallyReport, TallyRequest};
pub use orchestrator::TallyMarkers;
