//! # Viscera Core
//!
//! Core types and collaborator traits for the viscera body simulation.
//!
//! This crate defines the shared vocabulary of the organ subsystems:
//!
//! - **Solution** — a capacity-bounded mixture of reagent quantities
//! - **Circulation** — the contract an organ uses to hand digested
//!   reagents to the circulatory subsystem on the same entity
//! - **DiagnosticSink** — an injected reporting channel for warnings
//!   raised while wiring organs together
//!
//! Concrete organs (the stomach, the bloodstream) live in `viscera-body`.
//!
//! ## Quick Start
//!
//! ```rust
//! use viscera_core::prelude::*;
//!
//! let mut solution = Solution::with_capacity(100.0);
//! solution.add_reagent(ReagentId::from("Water"), 30.0);
//! assert_eq!(solution.current_volume(), 30.0);
//! ```

pub mod types;
pub mod solution;
pub mod circulation;
pub mod diagnostics;
pub mod error;
pub mod prelude;
