//! # Viscera
//!
//! Digestion and circulation simulation core for game entities.
//!
//! An entity's stomach admits ingested reagent solutions under a
//! capacity bound, ages each ingestion event independently, and after a
//! configured delay egests the digested quantities into the entity's
//! bloodstream — the same contract a host game engine would drive once
//! per simulation tick.
//!
//! ## Quick Start
//!
//! ```rust
//! use viscera::prelude::*;
//!
//! let mut sink = NullSink;
//! let mut body = Body::new(&mut sink);
//!
//! // Feed the entity 30 units of water
//! let mut meal = Solution::new();
//! meal.add_reagent(ReagentId::from("Water"), 30.0);
//! assert!(body.ingest(&meal));
//!
//! // Drive the simulation past the 20 second digestion delay
//! for _ in 0..202 {
//!     body.tick(0.1);
//! }
//!
//! let blood = body.blood().unwrap();
//! assert_eq!(blood.solution().quantity_of(&ReagentId::from("Water")), 30.0);
//! ```
//!
//! ## Architecture
//!
//! Viscera is organized into two crates:
//!
//! - [`viscera_core`] - The `Solution` container, collaborator traits,
//!   shared types, and errors
//! - [`viscera_body`] - The `Stomach` and `Bloodstream` organs and the
//!   per-entity `Body` composition root

pub use viscera_body as body;
pub use viscera_core as core;

/// Convenient imports for common usage.
pub mod prelude {
    pub use viscera_body::prelude::*;
    pub use viscera_core::prelude::*;
}
