//! Small value-level utilities.
//!
//! Everything here is an extension trait scoped to an explicit import:
//! bringing the trait into scope adds the methods, nothing is ever added
//! globally.
//!
//! - [`Ensure`]: value-preserving assertion guards ([`Ensure::ensure`],
//!   [`Ensure::ensure_not`])
//! - [`Apply`]: value-level application and conditional transformation
//! - [`SliceExt`]: positional accessors with explicit empty-collection
//!   failures
//! - [`QuoteExt`]: plain string quoting

mod apply;
mod collection;
mod guard;
mod quote;

pub use apply::Apply;
pub use collection::{EmptyCollection, NotExactlyOne, SliceExt};
pub use guard::{AssertionFailed, Ensure};
pub use quote::QuoteExt;
