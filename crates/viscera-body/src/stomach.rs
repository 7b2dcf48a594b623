//! Stomach — bounded ingestion and delayed digestion.
//!
//! The stomach is a holding organ. Food arrives as a solution and is
//! admitted whole or not at all; each admitted reagent is then aged as
//! its own ingestion event. Once an event's age passes the digestion
//! delay, its quantity moves out of the stomach and into the circulation
//! on the same entity.
//!
//! Each tick:
//! 1. Every pending event ages by the elapsed time
//! 2. Events past the delay are removed from the held solution
//! 3. The removed quantities are pooled into one egest solution
//! 4. The egest solution is handed to the circulation in a single call

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use viscera_core::circulation::Circulation;
use viscera_core::diagnostics::{BodyEvent, DiagnosticSink};
use viscera_core::error::{Result, VisceraError};
use viscera_core::solution::Solution;
use viscera_core::types::{EntityId, ReagentId, Seconds};

/// Configuration for a stomach, read once at construction.
///
/// Typically supplied from entity template data; both fields must be
/// strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StomachConfig {
    /// Maximum total volume the stomach can hold (default: 100).
    pub max_volume: f64,
    /// Seconds an ingestion event must age before its reagents egest
    /// into the circulation (default: 20).
    pub digestion_delay: Seconds,
}

impl Default for StomachConfig {
    fn default() -> Self {
        Self {
            max_volume: 100.0,
            digestion_delay: 20.0,
        }
    }
}

impl StomachConfig {
    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_volume > 0.0) {
            return Err(VisceraError::not_positive("max_volume", self.max_volume));
        }
        if !(self.digestion_delay > 0.0) {
            return Err(VisceraError::not_positive(
                "digestion_delay",
                self.digestion_delay,
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON template data.
    pub fn from_json(data: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }
}

/// One aging ingestion event: a reagent quantity waiting to digest.
///
/// Identity (reagent and quantity) is fixed at ingestion; only the age
/// advances. Events for the same reagent are never merged — each
/// ingestion digests on its own clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReagentDelta {
    pub id: ReagentId,
    pub quantity: f64,
    age: Seconds,
}

impl ReagentDelta {
    fn new(id: ReagentId, quantity: f64) -> Self {
        Self {
            id,
            quantity,
            age: 0.0,
        }
    }

    /// Seconds this event has aged so far. Monotonically non-decreasing.
    pub fn age(&self) -> Seconds {
        self.age
    }
}

/// The stomach organ: a bounded solution plus the aging queue over it.
///
/// Invariant: for every reagent, the summed quantity of its pending
/// events never exceeds the quantity held in the internal solution.
/// Events are created only alongside a successful addition and removed
/// only alongside the removal of the same amount.
pub struct Stomach {
    owner: EntityId,
    solution: Solution,
    pending: Vec<ReagentDelta>,
    digestion_delay: Seconds,
    /// Resolved once at construction, never re-resolved. While absent,
    /// digestion stalls completely: nothing ages, nothing egests.
    circulation: Option<Rc<RefCell<dyn Circulation>>>,
}

impl Stomach {
    /// Create a stomach with the default configuration.
    pub fn new(
        owner: EntityId,
        circulation: Option<Rc<RefCell<dyn Circulation>>>,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        // The default configuration always validates.
        Self::build(owner, StomachConfig::default(), circulation, sink)
    }

    /// Create a stomach with the given configuration.
    ///
    /// Reports [`BodyEvent::CirculationMissing`] through the sink when no
    /// circulation was found on the entity.
    pub fn from_config(
        owner: EntityId,
        config: StomachConfig,
        circulation: Option<Rc<RefCell<dyn Circulation>>>,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(owner, config, circulation, sink))
    }

    /// Infallible construction for callers that validated `config`.
    pub(crate) fn build(
        owner: EntityId,
        config: StomachConfig,
        circulation: Option<Rc<RefCell<dyn Circulation>>>,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        if circulation.is_none() {
            sink.report(BodyEvent::CirculationMissing { entity: owner });
        }
        Self {
            owner,
            solution: Solution::with_capacity(config.max_volume),
            pending: Vec::new(),
            digestion_delay: config.digestion_delay,
            circulation,
        }
    }

    /// Entity this stomach belongs to.
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    /// The solution currently held in the stomach.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Pending ingestion events, in ingestion order.
    pub fn pending(&self) -> &[ReagentDelta] {
        &self.pending
    }

    /// Seconds an event must age before it egests.
    pub fn digestion_delay(&self) -> Seconds {
        self.digestion_delay
    }

    /// Whether a circulation was bound at construction.
    pub fn has_circulation(&self) -> bool {
        self.circulation.is_some()
    }

    /// Try to swallow a solution whole.
    ///
    /// All-or-nothing: if the combined volume would exceed the stomach's
    /// capacity the whole solution is rejected, state untouched, and the
    /// caller decides what happens to the food. On acceptance the
    /// solution is pooled without reacting and one [`ReagentDelta`] with
    /// age 0 is appended per distinct reagent in it, even when the same
    /// reagent already has events in flight.
    ///
    /// High-frequency ingestion therefore grows the pending queue by one
    /// event per reagent per call; events are intentionally never merged,
    /// since merging would change when their quantities egest.
    pub fn try_ingest(&mut self, solution: &Solution) -> bool {
        if solution.current_volume() + self.solution.current_volume() > self.solution.max_volume() {
            return false;
        }
        self.solution.add_solution(solution);
        for reagent in solution.contents() {
            self.pending
                .push(ReagentDelta::new(reagent.id.clone(), reagent.quantity));
        }
        true
    }

    /// Advance digestion by `elapsed` seconds. Called once per tick.
    ///
    /// A no-op when no circulation is bound. Otherwise every pending
    /// event ages by `elapsed`; events whose age strictly exceeds the
    /// digestion delay have their quantity removed from the held solution
    /// and pooled into an egest solution, which is handed to the
    /// circulation exactly once per call — even when empty.
    pub fn advance(&mut self, elapsed: Seconds) {
        let Some(circulation) = self.circulation.clone() else {
            return;
        };

        let mut egest = Solution::new();
        // Take the queue and rebuild it, so removal can never invalidate
        // the pass over it.
        let pending = std::mem::take(&mut self.pending);
        for mut delta in pending {
            delta.age += elapsed;
            if delta.age > self.digestion_delay {
                // Pending quantities never exceed stored quantities, so
                // this removal cannot fail on consistent state.
                let _removed = self.solution.try_remove_reagent(&delta.id, delta.quantity);
                debug_assert!(_removed, "pending {} exceeded stored quantity", delta.id);
                egest.add_reagent(delta.id, delta.quantity);
            } else {
                self.pending.push(delta);
            }
        }

        circulation.borrow_mut().try_transfer_solution(&egest);
    }
}
