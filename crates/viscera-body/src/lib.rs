//! # Viscera Body
//!
//! Concrete organ implementations for the viscera simulation:
//!
//! - **Stomach** — admits ingested solutions under a capacity bound, ages
//!   each ingestion event, and egests fully-digested reagents into the
//!   circulation after a configured delay
//! - **Bloodstream** — a reference [`viscera_core::circulation::Circulation`]
//!   implementation backed by its own bounded solution
//! - **Body** — the per-entity composition root that wires organs
//!   together and drives them once per simulation tick
//!
//! ## Quick Start
//!
//! ```rust
//! use viscera_body::prelude::*;
//! use viscera_core::prelude::*;
//!
//! let mut sink = NullSink;
//! let mut body = Body::new(&mut sink);
//!
//! let mut meal = Solution::new();
//! meal.add_reagent(ReagentId::from("Water"), 30.0);
//! assert!(body.ingest(&meal));
//!
//! // Digestion completes once cumulative time passes the delay.
//! for _ in 0..21 {
//!     body.tick(1.0);
//! }
//! ```

pub mod stomach;
pub mod bloodstream;
pub mod body;
pub mod prelude;
