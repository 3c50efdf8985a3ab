//! Value-preserving assertion guards.

use std::fmt;

/// Error raised when an [`Ensure`] guard's predicate rejects a value.
///
/// Carries an optional message; it is a pure control-flow failure and does
/// not retain the rejected value.
///
/// # Examples
///
/// ```rust
/// use meliora::util::AssertionFailed;
///
/// let bare = AssertionFailed::new();
/// assert_eq!(bare.to_string(), "assertion failed");
///
/// let described = AssertionFailed::with_message("user must exist");
/// assert_eq!(described.to_string(), "assertion failed: user must exist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailed {
    message: Option<String>,
}

impl AssertionFailed {
    /// Creates a failure without a message.
    #[must_use]
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Creates a failure with a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Returns the message, if one was given.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Default for AssertionFailed {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssertionFailed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(formatter, "assertion failed: {message}"),
            None => write!(formatter, "assertion failed"),
        }
    }
}

impl std::error::Error for AssertionFailed {}

/// Value-preserving assertion guards.
///
/// A guard checks a predicate against a value and hands the value back
/// unchanged on success, so guards slot into the middle of an expression
/// without breaking the flow of data.
///
/// # Examples
///
/// ```rust
/// use meliora::util::Ensure;
///
/// let number = 7.ensure(|n| *n < 10, "number must be less than 10")?;
/// assert_eq!(number, 7);
///
/// let rejected = 20.ensure(|n| *n < 10, "number must be less than 10");
/// assert!(rejected.is_err());
/// # Ok::<(), meliora::util::AssertionFailed>(())
/// ```
pub trait Ensure: Sized {
    /// Returns the value unchanged if the predicate holds.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionFailed`] carrying `message` if the predicate
    /// rejects the value.
    fn ensure<P>(self, predicate: P, message: impl Into<String>) -> Result<Self, AssertionFailed>
    where
        P: FnOnce(&Self) -> bool,
    {
        if predicate(&self) {
            Ok(self)
        } else {
            Err(AssertionFailed::with_message(message))
        }
    }

    /// Returns the value unchanged if the predicate does *not* hold.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionFailed`] carrying `message` if the predicate
    /// accepts the value.
    fn ensure_not<P>(
        self,
        predicate: P,
        message: impl Into<String>,
    ) -> Result<Self, AssertionFailed>
    where
        P: FnOnce(&Self) -> bool,
    {
        if predicate(&self) {
            Err(AssertionFailed::with_message(message))
        } else {
            Ok(self)
        }
    }
}

impl<T> Ensure for T {}
