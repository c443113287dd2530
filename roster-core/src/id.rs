use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a hero row.
///
/// Assigned by the store (`INTEGER PRIMARY KEY`); never generated in-process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroId(pub i64);

impl HeroId {
    /// Returns the inner row id.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for HeroId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for a power row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PowerId(pub i64);

impl PowerId {
    /// Returns the inner row id.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PowerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for a hero-power association row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroPowerId(pub i64);

impl HeroPowerId {
    /// Returns the inner row id.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for HeroPowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for HeroPowerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
