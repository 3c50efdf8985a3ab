//! Hierarchical grouping.
//!
//! This module provides [`tree_by`], a recursive, multi-level version of
//! grouping-by-key: given a collection and an ordered list of key
//! extractors, it partitions the collection level by level into a nested,
//! insertion-ordered mapping. A single extractor produces a flat grouping;
//! each additional extractor adds one level of nesting.
//!
//! Mappings are [`IndexMap`]s, so keys iterate in first-seen order and
//! elements within a group keep their original relative order. The
//! partition is a stable single pass, not a sort.
//!
//! # Examples
//!
//! ```rust
//! use meliora::grouping::{GroupTree, tree_by};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Row {
//!     family: &'static str,
//!     name: &'static str,
//! }
//!
//! let rows = vec![
//!     Row { family: "citrus", name: "lime" },
//!     Row { family: "citrus", name: "lemon" },
//!     Row { family: "berry", name: "sloe" },
//! ];
//!
//! let grouped = tree_by(rows, &[|row: &Row| row.family]).unwrap();
//! assert_eq!(grouped.len(), 2);
//! assert_eq!(grouped["citrus"].as_leaf().map(<[Row]>::len), Some(2));
//! ```

mod tree;

pub use tree::{GroupMap, GroupTree, GroupingError, group_by, tree_by};
