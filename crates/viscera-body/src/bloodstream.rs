//! Bloodstream — the circulatory store digested reagents land in.
//!
//! The reference [`Circulation`] implementation: a single bounded
//! solution that pools incoming transfers additively by reagent. What the
//! body later does with circulating reagents (metabolism, effects) is
//! outside this crate; the bloodstream only carries them.

use serde::{Deserialize, Serialize};
use viscera_core::circulation::Circulation;
use viscera_core::error::{Result, VisceraError};
use viscera_core::solution::Solution;

/// Configuration for a bloodstream, read once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloodstreamConfig {
    /// Maximum total volume the bloodstream can carry (default: 250).
    pub max_volume: f64,
}

impl Default for BloodstreamConfig {
    fn default() -> Self {
        Self { max_volume: 250.0 }
    }
}

impl BloodstreamConfig {
    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_volume > 0.0) {
            return Err(VisceraError::not_positive("max_volume", self.max_volume));
        }
        Ok(())
    }
}

/// The circulatory store on an entity.
pub struct Bloodstream {
    solution: Solution,
}

impl Bloodstream {
    /// Create a bloodstream with the default configuration.
    pub fn new() -> Self {
        Self::build(BloodstreamConfig::default())
    }

    /// Create a bloodstream with the given configuration.
    pub fn from_config(config: BloodstreamConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Infallible construction for callers that validated `config`.
    pub(crate) fn build(config: BloodstreamConfig) -> Self {
        Self {
            solution: Solution::with_capacity(config.max_volume),
        }
    }

    /// The solution currently circulating.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }
}

impl Default for Bloodstream {
    fn default() -> Self {
        Self::new()
    }
}

impl Circulation for Bloodstream {
    fn try_transfer_solution(&mut self, solution: &Solution) -> bool {
        self.solution.try_add_solution(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viscera_core::types::ReagentId;

    #[test]
    fn transfers_pool_by_reagent() {
        let mut bloodstream = Bloodstream::new();
        let mut first = Solution::new();
        first.add_reagent("Water", 10.0);
        let mut second = Solution::new();
        second.add_reagent("Water", 5.0);

        assert!(bloodstream.try_transfer_solution(&first));
        assert!(bloodstream.try_transfer_solution(&second));
        assert_eq!(
            bloodstream.solution().quantity_of(&ReagentId::from("Water")),
            15.0
        );
        assert_eq!(bloodstream.solution().len(), 1);
    }

    #[test]
    fn empty_transfer_is_accepted() {
        let mut bloodstream = Bloodstream::new();
        assert!(bloodstream.try_transfer_solution(&Solution::new()));
        assert!(bloodstream.solution().is_empty());
    }

    #[test]
    fn transfer_refused_at_capacity() {
        let mut bloodstream =
            Bloodstream::from_config(BloodstreamConfig { max_volume: 10.0 }).unwrap();
        let mut big = Solution::new();
        big.add_reagent("Water", 11.0);

        assert!(!bloodstream.try_transfer_solution(&big));
        assert!(bloodstream.solution().is_empty());
    }

    #[test]
    fn config_rejects_non_positive_volume() {
        assert!(BloodstreamConfig { max_volume: 0.0 }.validate().is_err());
        assert!(Bloodstream::from_config(BloodstreamConfig { max_volume: -5.0 }).is_err());
    }
}
