//! Recursive partitioning of collections into nested, ordered mappings.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

/// One level of a grouping result: an insertion-ordered mapping from keys
/// to subtrees.
pub type GroupMap<K, E> = IndexMap<K, GroupTree<K, E>>;

/// A subtree of a [`tree_by`] result.
///
/// The innermost level of a grouping holds the elements themselves
/// ([`GroupTree::Leaf`]); every outer level holds another ordered mapping
/// ([`GroupTree::Node`]). A result produced with `n` extractors nests
/// exactly `n` levels deep, with leaves only at the bottom.
#[derive(Debug, Clone)]
pub enum GroupTree<K, E> {
    /// A leaf group: the elements sharing one full key path, in their
    /// original relative order.
    Leaf(Vec<E>),
    /// An inner level keyed by the next extractor's values.
    Node(GroupMap<K, E>),
}

// Comparing a Node compares IndexMaps, which needs `K: Hash + Eq` rather
// than the bounds a derive would emit.
impl<K: Hash + Eq, E: PartialEq> PartialEq for GroupTree<K, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf(left), Self::Leaf(right)) => left == right,
            (Self::Node(left), Self::Node(right)) => left == right,
            _ => false,
        }
    }
}

impl<K: Hash + Eq, E: Eq> Eq for GroupTree<K, E> {}

impl<K, E> GroupTree<K, E> {
    /// Returns the leaf elements, or [`None`] if this is an inner level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::grouping::GroupTree;
    ///
    /// let leaf: GroupTree<&str, i32> = GroupTree::Leaf(vec![1, 2]);
    /// assert_eq!(leaf.as_leaf(), Some(&[1, 2][..]));
    /// assert!(leaf.as_node().is_none());
    /// ```
    pub fn as_leaf(&self) -> Option<&[E]> {
        match self {
            Self::Leaf(elements) => Some(elements),
            Self::Node(_) => None,
        }
    }

    /// Returns the inner mapping, or [`None`] if this is a leaf.
    pub const fn as_node(&self) -> Option<&GroupMap<K, E>> {
        match self {
            Self::Node(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }

    /// Counts the elements stored in the leaves of this subtree.
    ///
    /// Every input element lands in exactly one leaf, so the count at the
    /// root equals the input length.
    pub fn element_count(&self) -> usize {
        match self {
            Self::Leaf(elements) => elements.len(),
            Self::Node(children) => children.values().map(Self::element_count).sum(),
        }
    }
}

/// Error raised when a grouping request cannot be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingError {
    /// [`tree_by`] was called with an empty extractor list; there must be
    /// at least one level to group by.
    NoExtractors,
}

impl fmt::Display for GroupingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoExtractors => {
                write!(formatter, "tree_by requires at least one key extractor")
            }
        }
    }
}

impl std::error::Error for GroupingError {}

/// Groups elements by a single key extractor, preserving order.
///
/// Keys appear in the resulting mapping in first-seen order; elements with
/// equal keys stay in their original relative order. This is a stable
/// single pass, not a sort, and key equality is the key type's own [`Eq`],
/// with no coercion.
///
/// # Examples
///
/// ```rust
/// use meliora::grouping::group_by;
///
/// let groups = group_by(vec![1, 2, 3, 4, 5], |n| n % 2);
/// assert_eq!(groups[&1], vec![1, 3, 5]);
/// assert_eq!(groups[&0], vec![2, 4]);
/// ```
pub fn group_by<E, K, F>(elements: Vec<E>, extractor: F) -> IndexMap<K, Vec<E>>
where
    K: Hash + Eq,
    F: Fn(&E) -> K,
{
    let mut groups: IndexMap<K, Vec<E>> = IndexMap::new();
    for element in elements {
        groups.entry(extractor(&element)).or_default().push(element);
    }
    groups
}

/// Sorts elements into a tree according to an ordered list of key
/// extractors.
///
/// The collection is partitioned by the first extractor; if further
/// extractors remain, each partition is recursively grouped by the rest.
/// The recursion depth equals the number of extractors: one extractor
/// yields all-[`Leaf`](GroupTree::Leaf) values, more yield
/// [`Node`](GroupTree::Node) values wrapping the next level. Every input
/// element ends up in exactly one leaf, reachable by following its
/// extracted keys level by level. An empty input yields an empty mapping.
///
/// # Errors
///
/// Returns [`GroupingError::NoExtractors`] if `extractors` is empty.
///
/// # Examples
///
/// ## Single level
///
/// ```rust
/// use meliora::grouping::tree_by;
///
/// let grouped = tree_by(vec![(1, "x"), (1, "y"), (2, "z")], &[|e: &(i32, &str)| e.0])?;
/// assert_eq!(grouped[&1].as_leaf(), Some(&[(1, "x"), (1, "y")][..]));
/// assert_eq!(grouped[&2].as_leaf(), Some(&[(2, "z")][..]));
/// # Ok::<(), meliora::grouping::GroupingError>(())
/// ```
///
/// ## Two levels
///
/// ```rust
/// use meliora::grouping::tree_by;
///
/// let rows = vec![(1, 1), (1, 2), (2, 1)];
/// let extractors: &[fn(&(i32, i32)) -> i32] = &[|e| e.0, |e| e.1];
///
/// let grouped = tree_by(rows, extractors)?;
/// let under_one = grouped[&1].as_node().unwrap();
/// assert_eq!(under_one[&1].as_leaf(), Some(&[(1, 1)][..]));
/// assert_eq!(under_one[&2].as_leaf(), Some(&[(1, 2)][..]));
/// # Ok::<(), meliora::grouping::GroupingError>(())
/// ```
pub fn tree_by<E, K, F>(elements: Vec<E>, extractors: &[F]) -> Result<GroupMap<K, E>, GroupingError>
where
    K: Hash + Eq,
    F: Fn(&E) -> K,
{
    let Some((first, rest)) = extractors.split_first() else {
        return Err(GroupingError::NoExtractors);
    };

    let partitions = group_by(elements, first);
    if rest.is_empty() {
        Ok(partitions
            .into_iter()
            .map(|(key, group)| (key, GroupTree::Leaf(group)))
            .collect())
    } else {
        partitions
            .into_iter()
            .map(|(key, group)| tree_by(group, rest).map(|subtree| (key, GroupTree::Node(subtree))))
            .collect()
    }
}
