//! Value-level application and conditional transformation.

/// Applies functions to a value in expression position.
///
/// `apply` turns `f(x)` into `x.apply(f)`, which keeps left-to-right
/// reading order in longer expressions. `apply_when` and `apply_if`
/// transform the value only when a condition holds, returning it
/// unchanged otherwise.
///
/// # Examples
///
/// ```rust
/// use meliora::util::Apply;
///
/// let doubled = 10.apply(|n| n * 2);
/// assert_eq!(doubled, 20);
///
/// assert_eq!(20.apply_when(true, |n| n + 1), 21);
/// assert_eq!(20.apply_when(false, |n| n + 1), 20);
///
/// assert_eq!(20.apply_if(|n| *n < 40, |n| n + 1), 21);
/// assert_eq!(20.apply_if(|n| *n < 10, |n| n + 1), 20);
/// ```
pub trait Apply: Sized {
    /// Applies a function to the value and returns its result.
    fn apply<U, F>(self, function: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        function(self)
    }

    /// Transforms the value if `condition` is true, otherwise returns it
    /// unchanged.
    #[must_use]
    fn apply_when<F>(self, condition: bool, function: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { function(self) } else { self }
    }

    /// Transforms the value if the predicate accepts it, otherwise
    /// returns it unchanged.
    #[must_use]
    fn apply_if<P, F>(self, predicate: P, function: F) -> Self
    where
        P: FnOnce(&Self) -> bool,
        F: FnOnce(Self) -> Self,
    {
        if predicate(&self) {
            function(self)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}
