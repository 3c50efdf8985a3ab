//! Positional slice accessors with explicit failures.

use std::fmt;

/// Error raised by the fallible positional accessors when the requested
/// element does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyCollection {
    accessor: &'static str,
}

impl EmptyCollection {
    const fn new(accessor: &'static str) -> Self {
        Self { accessor }
    }

    /// The accessor that failed (`"first"`, `"second"`, or `"last"`).
    pub const fn accessor(&self) -> &'static str {
        self.accessor
    }
}

impl fmt::Display for EmptyCollection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "collection has no {} element",
            self.accessor
        )
    }
}

impl std::error::Error for EmptyCollection {}

/// Error raised by [`SliceExt::only`] when the slice does not hold exactly
/// one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotExactlyOne {
    actual: usize,
}

impl NotExactlyOne {
    /// The number of elements actually present.
    pub const fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for NotExactlyOne {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "expected exactly one element, found {}",
            self.actual
        )
    }
}

impl std::error::Error for NotExactlyOne {}

/// Positional accessors for slices.
///
/// Adds a `second` accessor and fallible versions of `first`, `second`,
/// and `last` that fail with [`EmptyCollection`] instead of returning
/// [`None`], plus [`only`](SliceExt::only) for slices expected to hold
/// exactly one element.
///
/// # Examples
///
/// ```rust
/// use meliora::util::SliceExt;
///
/// let values = [10, 20, 30];
/// assert_eq!(values.second(), Some(&20));
/// assert_eq!(values.try_last(), Ok(&30));
///
/// let empty: [i32; 0] = [];
/// assert!(empty.try_first().is_err());
/// ```
pub trait SliceExt<T> {
    /// Returns the second element, or [`None`] if there is none.
    fn second(&self) -> Option<&T>;

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollection`] if the slice is empty.
    fn try_first(&self) -> Result<&T, EmptyCollection>;

    /// Returns the second element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollection`] if the slice has fewer than two
    /// elements.
    fn try_second(&self) -> Result<&T, EmptyCollection>;

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCollection`] if the slice is empty.
    fn try_last(&self) -> Result<&T, EmptyCollection>;

    /// Returns the sole element of a one-element slice.
    ///
    /// # Errors
    ///
    /// Returns [`NotExactlyOne`] if the slice holds zero or more than one
    /// element.
    fn only(&self) -> Result<&T, NotExactlyOne>;
}

impl<T> SliceExt<T> for [T] {
    fn second(&self) -> Option<&T> {
        self.get(1)
    }

    fn try_first(&self) -> Result<&T, EmptyCollection> {
        self.first().ok_or_else(|| EmptyCollection::new("first"))
    }

    fn try_second(&self) -> Result<&T, EmptyCollection> {
        self.get(1).ok_or_else(|| EmptyCollection::new("second"))
    }

    fn try_last(&self) -> Result<&T, EmptyCollection> {
        self.last().ok_or_else(|| EmptyCollection::new("last"))
    }

    fn only(&self) -> Result<&T, NotExactlyOne> {
        match self {
            [element] => Ok(element),
            _ => Err(NotExactlyOne { actual: self.len() }),
        }
    }
}
