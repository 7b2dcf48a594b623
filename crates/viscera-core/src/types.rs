//! Shared types used across all viscera crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Elapsed simulation time in seconds.
pub type Seconds = f64;

/// Unique identifier for an entity that owns a set of organs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a deterministic entity ID (for testing).
    pub fn from_seed(seed: u64) -> Self {
        Self(Uuid::from_u128(seed as u128))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier for a reagent prototype, e.g. `"Water"` or `"Nutriment"`.
///
/// Reagent identities come from template data, so unlike entity IDs they
/// are human-readable strings rather than generated UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReagentId(pub String);

impl ReagentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReagentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ReagentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ReagentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quantity of a single reagent inside a solution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reagent {
    pub id: ReagentId,
    /// Units of this reagent. Never negative.
    pub quantity: f64,
}

impl Reagent {
    pub fn new(id: impl Into<ReagentId>, quantity: f64) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}
