//! Function pipelines.
//!
//! This module provides [`Pipeline`], an ordered, appendable sequence of
//! unary transformations over a single value type, invokable as one
//! composed function. An empty pipeline is the identity function.
//!
//! Two composition modes are supported and deliberately kept distinct:
//!
//! - **Pure combination** ([`Pipeline::combine`], [`Pipeline::then`], the
//!   `+` operator): builds a new pipeline from the operands' stages and
//!   leaves both operands untouched.
//! - **Mutating append** ([`Pipeline::append`], the `<<` operator): pushes
//!   a stage onto the pipeline's own sequence.
//!
//! The difference is observable when a pipeline value is reused: combining
//! copies the stage list, so appending to an operand afterwards does not
//! affect any pipeline it was previously combined into.
//!
//! # Examples
//!
//! ```rust
//! use meliora::pipeline::Pipeline;
//!
//! let double = Pipeline::of(|n: i32| n * 2);
//! let add_one = Pipeline::of(|n: i32| n + 1);
//!
//! let composed = double + add_one;
//! assert_eq!(composed.invoke(5), 11);
//! ```

#[allow(clippy::module_inception)]
mod pipeline;

pub use pipeline::Pipeline;
