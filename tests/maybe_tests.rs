//! Unit tests for the Maybe null-safe chain.
//!
//! Maybe wraps a possibly-absent value and lets callers chain operations
//! without checking for absence at each step:
//! - Absent chains skip every requested operation
//! - Present chains apply operations and rewrap the result
//! - Fallible operations follow the chain's failure policy

#![cfg(feature = "chain")]

use meliora::chain::{FailurePolicy, Maybe};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and presence
// =============================================================================

#[rstest]
fn wrap_round_trips_the_value() {
    assert_eq!(Maybe::wrap(42).into_inner(), Some(42));
    assert_eq!(
        Maybe::wrap(String::from("hello")).into_inner(),
        Some(String::from("hello"))
    );
}

#[rstest]
fn presence_is_not_truthiness() {
    // Present-but-falsy values are still present; only None is absent.
    assert!(Maybe::wrap(0).is_present());
    assert!(Maybe::wrap("").is_present());
    assert!(Maybe::wrap(false).is_present());
    assert!(Maybe::<i32>::absent().is_absent());
}

#[rstest]
fn from_option_and_from_impl_agree() {
    let via_fn = Maybe::from_option(Some(5));
    let via_from: Maybe<i32> = Some(5).into();
    assert_eq!(via_fn, via_from);

    let absent: Maybe<i32> = None.into();
    assert!(absent.is_absent());
}

// =============================================================================
// Chained invocation
// =============================================================================

#[rstest]
fn chained_operations_flow_left_to_right() {
    let result = Maybe::wrap("  hello  ")
        .invoke(str::trim)
        .invoke(str::to_uppercase)
        .invoke(|text| format!("{text}!"))
        .into_inner();
    assert_eq!(result, Some(String::from("HELLO!")));
}

#[rstest]
fn absent_chain_skips_every_operation() {
    let calls = Cell::new(0);
    let count = |value: i32| {
        calls.set(calls.get() + 1);
        value
    };

    let result = Maybe::<i32>::absent()
        .invoke(count)
        .invoke(count)
        .invoke(count)
        .into_inner();

    assert_eq!(result, None);
    assert_eq!(calls.get(), 0, "no operation may run against a real value");
}

#[rstest]
fn chain_can_become_absent_mid_stream() {
    let calls = Cell::new(0);
    let result = Maybe::wrap(vec![1, 2, 3])
        .invoke_option(|v| v.into_iter().find(|n| *n > 10))
        .invoke(|n| {
            calls.set(calls.get() + 1);
            n * 2
        })
        .into_inner();

    assert_eq!(result, None);
    assert_eq!(calls.get(), 0, "operations after the absence are skipped");
}

#[rstest]
fn each_step_produces_a_new_chain() {
    let first = Maybe::wrap(1);
    let second = first.invoke(|n| n + 1);
    assert_eq!(first.into_inner(), Some(1));
    assert_eq!(second.into_inner(), Some(2));
}

// =============================================================================
// Failure policy
// =============================================================================

#[rstest]
fn propagate_policy_surfaces_errors_unchanged() {
    let result = Maybe::wrap("not a number").try_invoke(|text| text.parse::<i32>());
    let error = result.expect_err("parse failure must propagate");
    assert_eq!(error, "x".parse::<i32>().unwrap_err());
}

#[rstest]
fn suppress_policy_turns_errors_into_absence() {
    let result = Maybe::wrap("not a number")
        .with_policy(FailurePolicy::Suppress)
        .try_invoke(|text| text.parse::<i32>())
        .expect("suppressed failure is not an error");
    assert!(result.is_absent());
}

#[rstest]
fn suppress_policy_passes_successes_through() {
    let result = Maybe::wrap("42")
        .with_policy(FailurePolicy::Suppress)
        .try_invoke(|text| text.parse::<i32>())
        .expect("success is unaffected by policy");
    assert_eq!(result.into_inner(), Some(42));
}

#[rstest]
fn absent_chain_never_reaches_the_fallible_operation() {
    let calls = Cell::new(0);
    let result: Result<Maybe<i32>, String> = Maybe::<&str>::absent().try_invoke(|_| {
        calls.set(calls.get() + 1);
        Err(String::from("unreachable"))
    });
    assert_eq!(result.map(|chain| chain.is_absent()), Ok(true));
    assert_eq!(calls.get(), 0);
}
