//! # meliora
//!
//! A small library of generic functional utilities layered on top of the
//! standard library's value and collection types.
//!
//! ## Overview
//!
//! The library provides three independent, composable components plus a
//! handful of value-level helpers:
//!
//! - **Null-safe chaining**: [`Maybe`](chain::Maybe) wraps a value that may
//!   be absent and lets callers chain operations without checking for
//!   absence at every step.
//! - **Pipelines**: [`Pipeline`](pipeline::Pipeline) is an ordered,
//!   appendable sequence of unary transformations invokable as a single
//!   composed function.
//! - **Hierarchical grouping**: [`tree_by`](grouping::tree_by) partitions a
//!   collection into a nested, insertion-ordered mapping, one level per key
//!   extractor.
//! - **Utilities**: value-preserving assertion guards, positional slice
//!   accessors, string quoting, and conditional application, scoped to
//!   explicit trait imports.
//!
//! The three core components share no state and may be used in any
//! combination.
//!
//! ## Feature Flags
//!
//! - `chain`: Null-safe chaining (`Maybe`)
//! - `pipeline`: Function pipelines (`Pipeline`)
//! - `grouping`: Hierarchical grouping (`tree_by`, `group_by`)
//! - `util`: Assertion guards and small value-level helpers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use meliora::prelude::*;
//!
//! let length = Maybe::wrap("hello").invoke(str::len).into_inner();
//! assert_eq!(length, Some(5));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use meliora::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "chain")]
    pub use crate::chain::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;

    #[cfg(feature = "grouping")]
    pub use crate::grouping::*;

    #[cfg(feature = "util")]
    pub use crate::util::*;
}

#[cfg(feature = "chain")]
pub mod chain;

#[cfg(feature = "pipeline")]
pub mod pipeline;

#[cfg(feature = "grouping")]
pub mod grouping;

#[cfg(feature = "util")]
pub mod util;
