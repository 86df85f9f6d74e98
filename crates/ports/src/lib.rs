//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`scanner`]: line-by-line marker counting over a file
//! - [`backup`]: snapshot copies of the scanned file
//!
//! These ports allow the use case layer to remain independent of the
//! filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod backup;
pub mod scanner;
