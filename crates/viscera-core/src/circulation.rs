//! Circulation — the contract between an organ and the bloodstream.
//!
//! Organs never reach into the circulatory subsystem's internals. They
//! hand over a finished solution through this trait and let the receiving
//! side decide how to dissolve it into whatever it carries.

use crate::solution::Solution;

/// The circulatory subsystem as seen by a digesting organ.
///
/// Implementations live on the same entity as the organ and are resolved
/// once when the organ is wired up. The transfer is synchronous and
/// non-reentrant with respect to the caller.
pub trait Circulation {
    /// Accept a solution of digested reagents into the circulatory store.
    ///
    /// Returns false when the transfer could not be accepted (for example
    /// the receiving store is at capacity). Callers are not required to
    /// retry; rejected reagents are the receiver's concern.
    fn try_transfer_solution(&mut self, solution: &Solution) -> bool;
}
