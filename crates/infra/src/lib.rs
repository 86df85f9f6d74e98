// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod backup;
pub mod measurement;
pub mod persistence;

pub use backup::FsBackupStore;
pub use measurement::MemmemLineScanner;
