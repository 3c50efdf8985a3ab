//! The `Pipeline` type - an ordered sequence of unary transformations.

use std::fmt;
use std::ops::{Add, Shl};
use std::sync::Arc;

use smallvec::SmallVec;
use static_assertions::assert_impl_all;

/// A single pipeline stage. Stages are shared between pipelines produced
/// by pure combination, so they are reference-counted.
type Stage<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// An ordered sequence of unary transformations over values of type `T`.
///
/// A pipeline `[f1, f2, ..., fn]` applied to `x` computes
/// `fn(...f2(f1(x))...)`: the input flows through the stages left to
/// right, each stage receiving exactly the value produced by its
/// predecessor. An empty pipeline is the identity function.
///
/// Invocation is pure: [`Pipeline::invoke`] borrows the pipeline and never
/// consumes or mutates the stage sequence, so a pipeline may be invoked
/// any number of times, concurrently from multiple callers. The only
/// mutation point is [`Pipeline::append`] (and the `<<` operator), which
/// requires exclusive access.
///
/// # Examples
///
/// ## Building and invoking
///
/// ```rust
/// use meliora::pipeline::Pipeline;
///
/// let mut pipeline = Pipeline::of(|n: i32| n * 2);
/// pipeline.append(|n| n + 1);
///
/// // double(5) = 10, add_one(10) = 11
/// assert_eq!(pipeline.invoke(5), 11);
/// ```
///
/// ## Pure combination does not alias the operands
///
/// ```rust
/// use meliora::pipeline::Pipeline;
///
/// let mut first = Pipeline::of(|n: i32| n + 1);
/// let second = Pipeline::of(|n: i32| n * 10);
/// let combined = Pipeline::combine(&first, &second);
///
/// first.append(|n| n * 1000);
///
/// // The append above is invisible to the combined pipeline.
/// assert_eq!(combined.invoke(1), 20);
/// ```
pub struct Pipeline<T> {
    stages: SmallVec<[Stage<T>; 4]>,
}

impl<T> Pipeline<T> {
    /// Creates an empty pipeline, which acts as the identity function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::pipeline::Pipeline;
    ///
    /// let identity: Pipeline<i32> = Pipeline::new();
    /// assert_eq!(identity.invoke(42), 42);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            stages: SmallVec::new(),
        }
    }

    /// Creates a singleton pipeline from one transformation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::pipeline::Pipeline;
    ///
    /// let double = Pipeline::of(|n: i32| n * 2);
    /// assert_eq!(double.invoke(21), 42);
    /// ```
    #[must_use]
    pub fn of<F>(function: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        let mut stages = SmallVec::new();
        stages.push(Arc::new(function) as Stage<T>);
        Self { stages }
    }

    /// Returns the number of stages in the pipeline.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages (the identity).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Pure combination: builds a new pipeline whose stages are `first`'s
    /// followed by `second`'s.
    ///
    /// Neither operand is mutated; the stage lists are copied (stages
    /// themselves are shared by reference count). Because of the copy,
    /// later [`Pipeline::append`] calls on either operand do not affect
    /// the combined pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::pipeline::Pipeline;
    ///
    /// let double = Pipeline::of(|n: i32| n * 2);
    /// let add_one = Pipeline::of(|n: i32| n + 1);
    ///
    /// let combined = Pipeline::combine(&double, &add_one);
    /// assert_eq!(combined.invoke(5), 11);
    ///
    /// // Operands remain usable.
    /// assert_eq!(double.invoke(5), 10);
    /// assert_eq!(add_one.invoke(5), 6);
    /// ```
    #[must_use]
    pub fn combine(first: &Self, second: &Self) -> Self {
        let mut stages = first.stages.clone();
        stages.extend(second.stages.iter().cloned());
        Self { stages }
    }

    /// Pure combination in method form: `a.then(&b)` is
    /// [`Pipeline::combine(&a, &b)`](Pipeline::combine).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::pipeline::Pipeline;
    ///
    /// let pipeline = Pipeline::of(|n: i32| n + 1).then(&Pipeline::of(|n| n * 10));
    /// assert_eq!(pipeline.invoke(1), 20);
    /// ```
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self::combine(self, other)
    }

    /// Mutating append: pushes a transformation onto this pipeline's own
    /// stage sequence and returns `self` for chaining.
    ///
    /// Unlike [`Pipeline::combine`], this mutates shared state: every
    /// caller holding this pipeline observes the new stage. Pipelines
    /// previously built *from* this one by combination are unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::pipeline::Pipeline;
    ///
    /// let mut pipeline = Pipeline::new();
    /// pipeline.append(|n: i32| n + 1).append(|n| n * 2);
    /// assert_eq!(pipeline.invoke(3), 8);
    /// ```
    pub fn append<F>(&mut self, function: F) -> &mut Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.stages.push(Arc::new(function) as Stage<T>);
        self
    }

    /// Invokes the pipeline: folds the input through every stage, left to
    /// right.
    ///
    /// Evaluation is pure and repeatable; the stage sequence is never
    /// consumed. An empty pipeline returns the input unchanged. If a
    /// stage panics, the invocation aborts and the panic propagates to
    /// the caller; there is no partial-result recovery.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meliora::pipeline::Pipeline;
    ///
    /// let mut pipeline = Pipeline::of(|text: String| text.to_uppercase());
    /// pipeline.append(|text| format!("{text}!"));
    ///
    /// assert_eq!(pipeline.invoke(String::from("hello")), "HELLO!");
    /// assert_eq!(pipeline.invoke(String::from("again")), "AGAIN!");
    /// ```
    pub fn invoke(&self, input: T) -> T {
        self.stages.iter().fold(input, |value, stage| stage(value))
    }
}

impl<T> Default for Pipeline<T> {
    /// The default pipeline is empty, i.e. the identity function.
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Pipeline<T> {
    /// Copies the stage list; the stages themselves are shared.
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
        }
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// Pure combination via `+`: `a + b` is `Pipeline::combine(&a, &b)`.
///
/// Consumes the operands; combine through references with
/// [`Pipeline::combine`] or [`Pipeline::then`] to keep them.
impl<T> Add for Pipeline<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::combine(&self, &other)
    }
}

/// Pure combination via `+` on references, leaving both operands usable.
impl<T> Add for &Pipeline<T> {
    type Output = Pipeline<T>;

    fn add(self, other: Self) -> Pipeline<T> {
        Pipeline::combine(self, other)
    }
}

/// Mutating append via `<<`: `pipeline << f` pushes `f` onto the
/// pipeline's own sequence and returns the same pipeline.
///
/// This is [`Pipeline::append`] in operator form and keeps its mutating
/// semantics: the stage list grows in place rather than being copied.
impl<T, F> Shl<F> for Pipeline<T>
where
    F: Fn(T) -> T + Send + Sync + 'static,
{
    type Output = Self;

    fn shl(mut self, function: F) -> Self {
        self.append(function);
        self
    }
}

assert_impl_all!(Pipeline<i32>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Identity and basic invocation
    // =========================================================================

    #[rstest]
    fn empty_pipeline_is_identity() {
        let pipeline: Pipeline<i32> = Pipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.invoke(42), 42);
    }

    #[rstest]
    fn singleton_pipeline_applies_function() {
        let pipeline = Pipeline::of(|n: i32| n * 2);
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline.invoke(5), 10);
    }

    #[rstest]
    fn invocation_is_left_to_right() {
        let mut pipeline = Pipeline::of(|n: i32| n + 1);
        pipeline.append(|n| n * 10);
        // (3 + 1) * 10, not 3 * 10 + 1
        assert_eq!(pipeline.invoke(3), 40);
    }

    #[rstest]
    fn invocation_is_repeatable() {
        let pipeline = Pipeline::of(|n: i32| n + 1);
        assert_eq!(pipeline.invoke(1), 2);
        assert_eq!(pipeline.invoke(1), 2);
        assert_eq!(pipeline.invoke(10), 11);
    }

    // =========================================================================
    // Pure combination
    // =========================================================================

    #[rstest]
    fn combine_concatenates_in_order() {
        let double = Pipeline::of(|n: i32| n * 2);
        let add_one = Pipeline::of(|n: i32| n + 1);
        let combined = Pipeline::combine(&double, &add_one);
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.invoke(5), 11);
    }

    #[rstest]
    fn combine_leaves_operands_unchanged() {
        let first = Pipeline::of(|n: i32| n + 1);
        let second = Pipeline::of(|n: i32| n * 2);
        let _ = Pipeline::combine(&first, &second);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(first.invoke(1), 2);
        assert_eq!(second.invoke(1), 2);
    }

    #[rstest]
    fn add_operator_combines() {
        let combined = Pipeline::of(|n: i32| n + 1) + Pipeline::of(|n| n * 10);
        assert_eq!(combined.invoke(1), 20);
    }

    #[rstest]
    fn add_operator_on_references_keeps_operands() {
        let first = Pipeline::of(|n: i32| n + 1);
        let second = Pipeline::of(|n: i32| n * 10);
        let combined = &first + &second;
        assert_eq!(combined.invoke(1), 20);
        assert_eq!(first.invoke(1), 2);
    }

    // =========================================================================
    // Mutating append
    // =========================================================================

    #[rstest]
    fn append_returns_self_for_chaining() {
        let mut pipeline = Pipeline::new();
        pipeline
            .append(|n: i32| n + 1)
            .append(|n| n * 2)
            .append(|n| n - 3);
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline.invoke(3), 5);
    }

    #[rstest]
    fn shl_operator_appends() {
        let pipeline = Pipeline::new() << (|n: i32| n + 1) << (|n: i32| n * 2);
        assert_eq!(pipeline.invoke(3), 8);
    }

    #[rstest]
    fn append_does_not_affect_previously_combined() {
        let mut first = Pipeline::of(|n: i32| n + 1);
        let second = Pipeline::of(|n: i32| n * 10);
        let combined = Pipeline::combine(&first, &second);

        let before = combined.invoke(1);
        first.append(|n| n * 1000);
        let after = combined.invoke(1);

        assert_eq!(before, 20);
        assert_eq!(after, 20);
        assert_eq!(first.invoke(1), 2000);
    }

    #[rstest]
    fn clone_shares_stages_but_not_sequence() {
        let mut original = Pipeline::of(|n: i32| n + 1);
        let cloned = original.clone();
        original.append(|n| n * 10);

        assert_eq!(original.invoke(1), 20);
        assert_eq!(cloned.invoke(1), 2);
    }

    // =========================================================================
    // Non-Copy value types
    // =========================================================================

    #[rstest]
    fn pipeline_over_owned_strings() {
        let mut pipeline = Pipeline::of(|text: String| text.to_uppercase());
        pipeline.append(|text| format!("{text}!"));
        assert_eq!(pipeline.invoke(String::from("hello")), "HELLO!");
    }

    #[rstest]
    fn pipeline_over_vectors() {
        let pipeline = Pipeline::of(|v: Vec<i32>| v.into_iter().map(|n| n * 2).collect())
            << (|v: Vec<i32>| v.into_iter().filter(|n| *n > 5).collect());
        assert_eq!(pipeline.invoke(vec![1, 2, 3, 4, 5]), vec![6, 8, 10]);
    }

    #[rstest]
    fn debug_reports_stage_count() {
        let pipeline = Pipeline::of(|n: i32| n) << (|n: i32| n);
        let rendered = format!("{pipeline:?}");
        assert!(rendered.contains("Pipeline"));
        assert!(rendered.contains('2'));
    }
}
