//! Region references

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque reference to a region configuration owned by the platform.
///
/// The dispatcher never creates or resolves regions itself; resolution
/// happens below the [`ProcessRunner`](crate::ProcessRunner) boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionRef(Uuid);

impl RegionRef {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<Uuid> for RegionRef {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for RegionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for RegionRef {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}
