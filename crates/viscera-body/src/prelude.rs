//! Viscera Body Prelude — convenient imports for common usage.
//!
//! ```rust
//! use viscera_body::prelude::*;
//! ```

// Re-export the organs
pub use crate::bloodstream::{Bloodstream, BloodstreamConfig};
pub use crate::stomach::{ReagentDelta, Stomach, StomachConfig};

// Re-export the composition root
pub use crate::body::{Body, BodyConfig};
