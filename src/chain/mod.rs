//! Null-safe chaining.
//!
//! This module provides the [`Maybe`] type, a wrapper that lets callers
//! chain an arbitrary sequence of operations over a possibly-absent value
//! without checking for absence at every step. Operations requested on an
//! absent chain are skipped entirely; operations on a present chain are
//! applied and the result is rewrapped.
//!
//! Presence is decided exactly once, at construction: the absence sentinel
//! is [`None`], and any wrapped value is present, including falsy-looking
//! values such as `0` or an empty string.
//!
//! # Failure policy
//!
//! Fallible operations chained with [`Maybe::try_invoke`] are governed by a
//! [`FailurePolicy`] carried by the chain: [`FailurePolicy::Propagate`]
//! surfaces the error to the caller unchanged, while
//! [`FailurePolicy::Suppress`] converts any failure into an absent chain.
//! The default is `Propagate`.
//!
//! # Examples
//!
//! ```rust
//! use meliora::chain::Maybe;
//!
//! let length = Maybe::wrap("hello")
//!     .invoke(str::trim)
//!     .invoke(str::len)
//!     .into_inner();
//! assert_eq!(length, Some(5));
//!
//! let absent: Maybe<&str> = Maybe::absent();
//! assert_eq!(absent.invoke(str::len).into_inner(), None);
//! ```

mod maybe;

pub use maybe::{FailurePolicy, Maybe};
