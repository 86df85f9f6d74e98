// crates/shared-kernel/src/value_objects/marker.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A literal, case-sensitive substring searched for on each line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Marker(String);

impl Marker {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::InvalidMarker { reason: "marker must not be empty".into() });
        }
        if value.contains('\n') {
            return Err(DomainError::InvalidMarker {
                reason: format!("marker {value:?} spans a line break and can never match"),
            });
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl TryFrom<String> for Marker {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<Marker> for String {
    fn from(value: Marker) -> Self {
        value.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An opening marker and the marker expected to close it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerPair {
    pub start: Marker,
    pub end: Marker,
}

impl MarkerPair {
    /// The pairs checked when nothing else is configured.
    ///
    /// `fininini` is intentional: reports have always been produced against it.
    pub fn defaults() -> Vec<Self> {
        [("starting", "fininini"), ("asdasd_start", "asdasd_end")]
            .into_iter()
            .map(|(start, end)| Self {
                start: Marker(start.to_string()),
                end: Marker(end.to_string()),
            })
            .collect()
    }
}

impl FromStr for MarkerPair {
    type Err = DomainError;

    /// Parses `START:END`. The first `:` separates the two markers.
    fn from_str(s: &str) -> DomainResult<Self> {
        let invalid = |reason: &str| DomainError::InvalidPairSpec { spec: s.to_string(), reason: reason.into() };
        let (start, end) = s.split_once(':').ok_or_else(|| invalid("expected START:END"))?;
        let start = Marker::new(start).map_err(|_| invalid("start marker is empty"))?;
        let end = Marker::new(end).map_err(|e| invalid(&e.to_string()))?;
        Ok(Self { start, end })
    }
}

impl fmt::Display for MarkerPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}
