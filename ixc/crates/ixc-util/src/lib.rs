//! ixc-util - Shared foundation for the Ix compiler pipeline.
//!
//! Every phase crate builds on the same small set of primitives:
//!
//! - [`Span`] records where in a source file something came from.
//! - [`Diagnostic`] and [`Handler`] collect warnings and errors without
//!   aborting the phase that noticed them.
//! - [`IndexVec`] and the [`define_idx!`] macro give each arena its own
//!   typed index space, so a node id cannot be confused with any other
//!   kind of id at compile time.

pub mod diagnostic;
pub mod index_vec;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use index_vec::{Idx, IndexVec};
pub use span::Span;

// Re-export the hash types the pipeline crates share.
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
