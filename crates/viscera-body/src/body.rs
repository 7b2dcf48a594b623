//! Body — the per-entity composition root.
//!
//! The body plays the role the host engine would otherwise play: it owns
//! one bloodstream and one stomach for a single entity, performs the
//! "find a sibling circulation on this entity" lookup exactly once while
//! wiring the stomach up, and drives digestion once per simulation tick.

use crate::bloodstream::{Bloodstream, BloodstreamConfig};
use crate::stomach::{Stomach, StomachConfig};
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use viscera_core::circulation::Circulation;
use viscera_core::diagnostics::DiagnosticSink;
use viscera_core::error::Result;
use viscera_core::solution::Solution;
use viscera_core::types::{EntityId, Seconds};

/// Configuration for a whole body, read once at construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub stomach: StomachConfig,
    pub bloodstream: BloodstreamConfig,
}

impl BodyConfig {
    /// Check that every nested config is in range.
    pub fn validate(&self) -> Result<()> {
        self.stomach.validate()?;
        self.bloodstream.validate()?;
        Ok(())
    }
}

/// A single entity's organs, wired together.
pub struct Body {
    entity: EntityId,
    /// Absent when the entity's template carries a stomach but no
    /// circulatory subsystem; digestion then stalls permanently.
    bloodstream: Option<Rc<RefCell<Bloodstream>>>,
    stomach: Stomach,
}

impl Body {
    /// Create a body with default organ configurations.
    pub fn new(sink: &mut dyn DiagnosticSink) -> Self {
        // Default configurations always validate.
        Self::build(EntityId::new(), BodyConfig::default(), true, sink)
    }

    /// Create a body from template configuration.
    pub fn from_config(config: BodyConfig, sink: &mut dyn DiagnosticSink) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(EntityId::new(), config, true, sink))
    }

    /// Create a body whose entity has no circulatory subsystem.
    ///
    /// The stomach reports the missing circulation at construction and
    /// every subsequent tick leaves digestion untouched.
    pub fn without_bloodstream(sink: &mut dyn DiagnosticSink) -> Self {
        Self::build(EntityId::new(), BodyConfig::default(), false, sink)
    }

    fn build(
        entity: EntityId,
        config: BodyConfig,
        with_bloodstream: bool,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let bloodstream = with_bloodstream
            .then(|| Rc::new(RefCell::new(Bloodstream::build(config.bloodstream))));
        // Sibling lookup: resolved once, never again.
        let circulation = bloodstream
            .as_ref()
            .map(|b| b.clone() as Rc<RefCell<dyn Circulation>>);
        let stomach = Stomach::build(entity, config.stomach, circulation, sink);
        Self {
            entity,
            bloodstream,
            stomach,
        }
    }

    /// Entity these organs belong to.
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// The stomach organ.
    pub fn stomach(&self) -> &Stomach {
        &self.stomach
    }

    /// The bloodstream, if the entity has one.
    pub fn blood(&self) -> Option<Ref<'_, Bloodstream>> {
        self.bloodstream.as_ref().map(|b| b.borrow())
    }

    /// Feed the entity: forward a solution to the stomach.
    pub fn ingest(&mut self, solution: &Solution) -> bool {
        self.stomach.try_ingest(solution)
    }

    /// Run one simulation tick of `elapsed` seconds.
    pub fn tick(&mut self, elapsed: Seconds) {
        self.stomach.advance(elapsed);
    }
}
