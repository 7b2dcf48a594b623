//! Solution — a capacity-bounded mixture of reagents.
//!
//! A solution is the universal chemical carrier: the stomach holds one,
//! the bloodstream holds one, and ingested food arrives as one. It tracks
//! per-reagent quantities and a maximum total volume, and merges additions
//! by reagent identity without triggering any chemical reactions —
//! reaction processing belongs to whatever subsystem later consumes the
//! solution, never to the container itself.

use crate::types::{Reagent, ReagentId};
use serde::{Deserialize, Serialize};

/// A mixture of reagent quantities with a maximum total volume.
///
/// Quantities are merged by reagent identity on addition. The container
/// never reacts reagents with each other; it only pools them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    contents: Vec<Reagent>,
    max_volume: f64,
}

impl Solution {
    /// Create an empty solution with unlimited capacity.
    pub fn new() -> Self {
        Self {
            contents: Vec::new(),
            max_volume: f64::INFINITY,
        }
    }

    /// Create an empty solution bounded to `max_volume` total units.
    pub fn with_capacity(max_volume: f64) -> Self {
        Self {
            contents: Vec::new(),
            max_volume,
        }
    }

    /// Maximum total volume this solution can hold.
    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    /// Change the live capacity of this solution.
    ///
    /// Shrinking below the current volume does not evict anything; it
    /// only prevents further additions through the checked paths.
    pub fn set_max_volume(&mut self, max_volume: f64) {
        self.max_volume = max_volume;
    }

    /// Current total volume: the sum of all reagent quantities.
    pub fn current_volume(&self) -> f64 {
        self.contents.iter().map(|r| r.quantity).sum()
    }

    /// Remaining headroom before the capacity is reached.
    pub fn available_volume(&self) -> f64 {
        self.max_volume - self.current_volume()
    }

    /// Iterate over the reagents currently in the solution.
    pub fn contents(&self) -> impl Iterator<Item = &Reagent> {
        self.contents.iter()
    }

    /// Number of distinct reagents in the solution.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// True when the solution holds no reagents at all.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Pool `quantity` units of a reagent into the solution, merging with
    /// any existing entry for the same reagent.
    ///
    /// This is the unchecked path: capacity is not enforced. Callers that
    /// need admission control go through [`Solution::try_add_solution`].
    pub fn add_reagent(&mut self, id: impl Into<ReagentId>, quantity: f64) {
        let id = id.into();
        debug_assert!(quantity >= 0.0, "reagent quantities are non-negative");
        if let Some(existing) = self.contents.iter_mut().find(|r| r.id == id) {
            existing.quantity += quantity;
        } else {
            self.contents.push(Reagent { id, quantity });
        }
    }

    /// Pool every reagent of `other` into this solution, without
    /// reacting and without checking capacity.
    pub fn add_solution(&mut self, other: &Solution) {
        for reagent in other.contents() {
            self.add_reagent(reagent.id.clone(), reagent.quantity);
        }
    }

    /// All-or-nothing checked add: pools `other` only if the combined
    /// volume fits within this solution's capacity.
    ///
    /// Returns false and leaves the solution untouched when it does not.
    pub fn try_add_solution(&mut self, other: &Solution) -> bool {
        if other.current_volume() + self.current_volume() > self.max_volume {
            return false;
        }
        self.add_solution(other);
        true
    }

    /// Quantity of a single reagent currently present (0 if absent).
    pub fn quantity_of(&self, id: &ReagentId) -> f64 {
        self.contents
            .iter()
            .find(|r| &r.id == id)
            .map_or(0.0, |r| r.quantity)
    }

    /// Remove exactly `quantity` units of a reagent.
    ///
    /// Succeeds only if at least that much is present; otherwise the
    /// solution is left untouched and false is returned. Entries that
    /// reach zero are dropped from the contents.
    pub fn try_remove_reagent(&mut self, id: &ReagentId, quantity: f64) -> bool {
        debug_assert!(quantity >= 0.0, "reagent quantities are non-negative");
        let Some(idx) = self.contents.iter().position(|r| &r.id == id) else {
            return false;
        };
        if self.contents[idx].quantity < quantity {
            return false;
        }
        self.contents[idx].quantity -= quantity;
        if self.contents[idx].quantity <= 0.0 {
            self.contents.remove(idx);
        }
        true
    }

}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}
