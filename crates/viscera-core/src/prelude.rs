//! Viscera Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use viscera_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{EntityId, Reagent, ReagentId, Seconds};

// Re-export the Solution container
pub use crate::solution::Solution;

// Re-export the Circulation trait
pub use crate::circulation::Circulation;

// Re-export diagnostics
pub use crate::diagnostics::{BodyEvent, DiagnosticSink, NullSink, RecordingSink};

// Re-export error types
pub use crate::error::{ConfigError, Result, VisceraError};
