//! The `Maybe` chain - a null-safe wrapper for sequencing operations.

/// Controls how [`Maybe::try_invoke`] treats a failing operation.
///
/// The two policies reflect the two defensible contracts for a fallible
/// step in a null-safe chain: either the failure is the caller's problem
/// and surfaces unchanged, or it is folded into absence and the chain
/// simply goes quiet.
///
/// # Examples
///
/// ```rust
/// use meliora::chain::{FailurePolicy, Maybe};
///
/// let chain = Maybe::wrap("12a").with_policy(FailurePolicy::Suppress);
/// let parsed = chain.try_invoke(|text| text.parse::<i32>());
/// assert_eq!(parsed.map(Maybe::into_inner), Ok(None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FailurePolicy {
    /// A failing operation surfaces its error to the caller unchanged.
    #[default]
    Propagate,
    /// A failing operation produces an absent chain instead of an error.
    Suppress,
}

/// A null-safe chain over a possibly-absent value.
///
/// `Maybe<T>` wraps a value that is either *present* or *absent* and lets
/// callers request a sequence of operations without checking for absence
/// at each step. An operation requested on an absent chain is never
/// called; the chain stays absent. An operation on a present chain is
/// applied to the held value and its result is rewrapped.
///
/// Presence is determined once, at construction, by whether the held
/// [`Option`] is [`Some`]. A present-but-falsy value (zero, an empty
/// string) is still present; only the absence sentinel [`None`] is absent.
///
/// The wrapper is immutable: every chained operation consumes the chain
/// and produces a new one, possibly of a different inner type. The
/// [`FailurePolicy`] is inherited by every step.
///
/// # Examples
///
/// ## Chaining over a present value
///
/// ```rust
/// use meliora::chain::Maybe;
///
/// let result = Maybe::wrap(21)
///     .invoke(|n| n * 2)
///     .invoke(|n| n.to_string())
///     .into_inner();
/// assert_eq!(result, Some(String::from("42")));
/// ```
///
/// ## Absence short-circuits
///
/// ```rust
/// use meliora::chain::Maybe;
///
/// let absent: Maybe<i32> = Maybe::absent();
/// let result = absent.invoke(|n| n * 2).invoke(|n| n + 1).into_inner();
/// assert_eq!(result, None);
/// ```
///
/// ## Present-but-falsy values stay present
///
/// ```rust
/// use meliora::chain::Maybe;
///
/// assert!(Maybe::wrap(0).is_present());
/// assert!(Maybe::wrap("").is_present());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T> {
    value: Option<T>,
    policy: FailurePolicy,
}

impl<T> Maybe<T> {
    /// Wraps a value into a present chain.
    ///
    /// Always succeeds; the wrapped value is present by definition. Use
    /// [`Maybe::from_option`] when the value may already be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::chain::Maybe;
    ///
    /// let chain = Maybe::wrap(42);
    /// assert!(chain.is_present());
    /// assert_eq!(chain.into_inner(), Some(42));
    /// ```
    #[inline]
    pub const fn wrap(value: T) -> Self {
        Self {
            value: Some(value),
            policy: FailurePolicy::Propagate,
        }
    }

    /// Creates an absent chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::chain::Maybe;
    ///
    /// let chain: Maybe<String> = Maybe::absent();
    /// assert!(chain.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self {
            value: None,
            policy: FailurePolicy::Propagate,
        }
    }

    /// Wraps an [`Option`], preserving its presence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::chain::Maybe;
    ///
    /// assert!(Maybe::from_option(Some(1)).is_present());
    /// assert!(Maybe::from_option(None::<i32>).is_absent());
    /// ```
    #[inline]
    pub const fn from_option(value: Option<T>) -> Self {
        Self {
            value,
            policy: FailurePolicy::Propagate,
        }
    }

    /// Returns a chain with the given failure policy.
    ///
    /// The policy is inherited by every chain produced from this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::chain::{FailurePolicy, Maybe};
    ///
    /// let chain = Maybe::wrap(1).with_policy(FailurePolicy::Suppress);
    /// assert_eq!(chain.policy(), FailurePolicy::Suppress);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the chain's failure policy.
    #[inline]
    pub const fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Returns `true` if the chain holds a value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the chain is absent.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Applies an operation to the held value, if present.
    ///
    /// When the chain is absent the operation is discarded without being
    /// called and the result is an absent chain of the operation's output
    /// type. When present, the operation is applied and its result is
    /// rewrapped as present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::chain::Maybe;
    ///
    /// let doubled = Maybe::wrap(21).invoke(|n| n * 2);
    /// assert_eq!(doubled.into_inner(), Some(42));
    ///
    /// let skipped: Maybe<i32> = Maybe::absent().invoke(|n: i32| n * 2);
    /// assert_eq!(skipped.into_inner(), None);
    /// ```
    #[inline]
    pub fn invoke<U, F>(self, operation: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe {
            value: self.value.map(operation),
            policy: self.policy,
        }
    }

    /// Applies an operation whose result may itself be absent.
    ///
    /// Like [`Maybe::invoke`], but the operation returns an [`Option`]
    /// which is flattened into the resulting chain rather than wrapped a
    /// second time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::chain::Maybe;
    ///
    /// let words = vec!["alpha", "beta"];
    /// let first = Maybe::wrap(&words).invoke_option(|w| w.first().copied());
    /// assert_eq!(first.into_inner(), Some("alpha"));
    ///
    /// let empty: Vec<&str> = vec![];
    /// let none = Maybe::wrap(&empty).invoke_option(|w| w.first().copied());
    /// assert!(none.is_absent());
    /// ```
    #[inline]
    pub fn invoke_option<U, F>(self, operation: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Maybe {
            value: self.value.and_then(operation),
            policy: self.policy,
        }
    }

    /// Applies a fallible operation under the chain's failure policy.
    ///
    /// When the chain is absent, the operation is discarded and the result
    /// is `Ok` of an absent chain regardless of policy. When present:
    ///
    /// - under [`FailurePolicy::Propagate`], a failing operation's error is
    ///   returned to the caller unchanged;
    /// - under [`FailurePolicy::Suppress`], a failing operation yields an
    ///   `Ok` absent chain and the error is dropped.
    ///
    /// # Errors
    ///
    /// Returns the operation's error only under the propagating policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::chain::{FailurePolicy, Maybe};
    ///
    /// let parsed = Maybe::wrap("42").try_invoke(|text| text.parse::<i32>());
    /// assert_eq!(parsed.map(Maybe::into_inner), Ok(Some(42)));
    ///
    /// let failed = Maybe::wrap("x").try_invoke(|text| text.parse::<i32>());
    /// assert!(failed.is_err());
    ///
    /// let suppressed = Maybe::wrap("x")
    ///     .with_policy(FailurePolicy::Suppress)
    ///     .try_invoke(|text| text.parse::<i32>());
    /// assert_eq!(suppressed.map(|chain| chain.is_absent()), Ok(true));
    /// ```
    pub fn try_invoke<U, E, F>(self, operation: F) -> Result<Maybe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let policy = self.policy;
        match self.value {
            None => Ok(Maybe {
                value: None,
                policy,
            }),
            Some(value) => match operation(value) {
                Ok(result) => Ok(Maybe {
                    value: Some(result),
                    policy,
                }),
                Err(error) => match policy {
                    FailurePolicy::Propagate => Err(error),
                    FailurePolicy::Suppress => Ok(Maybe {
                        value: None,
                        policy,
                    }),
                },
            },
        }
    }

    /// Terminal extraction: consumes the chain and returns the held value,
    /// or [`None`] if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::chain::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(7).into_inner(), Some(7));
    /// assert_eq!(Maybe::<i32>::absent().into_inner(), None);
    /// ```
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.value
    }

    /// Returns a reference to the held value, or [`None`] if absent.
    #[inline]
    pub const fn as_inner(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the chain and returns the held value, or the given default
    /// if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::chain::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(7).unwrap_or(0), 7);
    /// assert_eq!(Maybe::absent().unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> Default for Maybe<T> {
    /// The default chain is absent.
    fn default() -> Self {
        Self::absent()
    }
}
