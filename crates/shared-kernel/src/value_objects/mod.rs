// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod marker;

pub use counts::{Difference, LineCount};
pub use marker::{Marker, MarkerPair};
