//! Unit tests for `Try<A>`.
//!
//! `Try` is `Success(A)` or `Failure(TryError)`:
//! - `of`, `map` and `flat_map` turn panics into failures
//! - A failure travels through a chain with its identity intact
//! - `recover` and `recover_with` only act on failures

use std::sync::atomic::{AtomicUsize, Ordering};

use fp_containers::control::{Optional, Try};
use fp_containers::error::{PanicError, TryError};
use rstest::rstest;

#[derive(Debug, thiserror::Error)]
#[error("you were unlucky")]
struct Unlucky;

fn panic_message(result: Try<impl std::fmt::Debug>) -> String {
    let error = result.get().unwrap_err();
    error.downcast_ref::<PanicError>().unwrap().message().to_string()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(0)]
#[case(7)]
#[case(-1)]
fn of_round_trips(#[case] value: i32) {
    assert_eq!(Try::of(|| value).get().unwrap(), value);
}

#[rstest]
fn of_captures_string_panics() {
    let result = Try::of(|| -> i32 { panic!("static {}", "formatted") });
    assert_eq!(panic_message(result), "static formatted");
}

#[rstest]
fn of_normalizes_non_string_payloads() {
    let result = Try::of(|| -> i32 { std::panic::panic_any(42_u32) });
    assert_eq!(panic_message(result), "Box<dyn Any>");
}

#[rstest]
fn of_result_converts_err() {
    let result = Try::of_result(|| -> Result<i32, Unlucky> { Err(Unlucky) });
    let error = result.get().unwrap_err();
    assert!(error.downcast_ref::<Unlucky>().is_some());
    assert_eq!(error.to_string(), "you were unlucky");
}

#[rstest]
fn from_result_and_back() {
    let ok: Try<i32> = Ok::<_, Unlucky>(1).into();
    assert_eq!(ok, Try::success(1));
    let failed: Try<i32> = Err(Unlucky).into();
    let result: Result<i32, TryError> = failed.into();
    assert!(result.is_err());
}

// =============================================================================
// Failure Propagation
// =============================================================================

#[rstest]
fn failure_keeps_error_identity_through_chain() {
    let error = TryError::new(Unlucky);
    let calls = AtomicUsize::new(0);

    let result = Try::<i32>::failure(error.clone())
        .map(|n| {
            calls.fetch_add(1, Ordering::SeqCst);
            n + 1
        })
        .flat_map(|n| {
            calls.fetch_add(1, Ordering::SeqCst);
            Try::success(n - 2)
        })
        .map_result(|n| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Unlucky>(n)
        });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(result.error().unwrap().ptr_eq(&error));
    assert!(result.get().unwrap_err().ptr_eq(&error));
}

#[rstest]
fn success_chain() {
    let result = Try::of(|| 0.7_f64)
        .map(|n| n + 1.0)
        .flat_map(|n| Try::success(n - 2.0))
        .recover(|_| 0.0)
        .get()
        .unwrap();
    assert!((result - -0.3).abs() < f64::EPSILON);
}

#[rstest]
fn failed_chain_recovers() {
    let result = Try::of(|| -> f64 { panic!("you were unlucky") })
        .map(|n| n + 1.0)
        .flat_map(|n| Try::success(n - 2.0))
        .recover(|_| 0.0)
        .get()
        .unwrap();
    assert!(result.abs() < f64::EPSILON);
}

#[rstest]
fn map_on_success_captures_panic() {
    let result = Try::success("hello").map(|_| -> usize { panic!("mapped") });
    assert_eq!(panic_message(result), "mapped");
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
fn recover_is_a_no_op_on_success() {
    let calls = AtomicUsize::new(0);
    let result = Try::success(5)
        .recover(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            0
        })
        .recover_with(|_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Try::success(0)
        });
    assert_eq!(result, Try::success(5));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn recover_with_receives_the_error() {
    let error = TryError::msg("bad bad bad");
    let seen = error.clone();
    let result = Try::<&str>::failure(error).recover_with(move |received| {
        assert!(received.ptr_eq(&seen));
        Try::success("okay")
    });
    assert_eq!(result, Try::success("okay"));
}

#[rstest]
#[should_panic(expected = "inside recover")]
fn recover_does_not_capture_panics() {
    let _ = Try::<i32>::failure(TryError::msg("failed")).recover(|_| panic!("inside recover"));
}

// =============================================================================
// Applicative, Case Analysis, Void
// =============================================================================

#[rstest]
fn ap_applies_function() {
    let function = Try::success(|s: &str| format!("{s} world"));
    assert_eq!(
        Try::success("hello").ap(function),
        Try::success(String::from("hello world"))
    );
}

#[rstest]
fn ap_reports_own_error_before_the_function_error() {
    let own = TryError::msg("own");
    let function: Try<fn(i32) -> i32> = Try::failure(TryError::msg("function"));
    let result = Try::<i32>::failure(own.clone()).ap(function);
    assert_eq!(result.error(), Some(&own));
}

#[rstest]
fn ap_reports_function_error_on_success() {
    let function_error = TryError::msg("function");
    let function: Try<fn(i32) -> i32> = Try::failure(function_error.clone());
    assert_eq!(Try::success(1).ap(function).error(), Some(&function_error));
}

#[rstest]
#[case(Try::success(1), "success")]
#[case(Try::failure(TryError::msg("failure")), "failure")]
fn case_dispatches(#[case] input: Try<i32>, #[case] expected: &str) {
    let result = input.case(
        |_| Try::success(String::from("success")),
        |error| Try::success(error.to_string()),
    );
    assert_eq!(result.get().unwrap(), expected);
}

#[rstest]
fn void_discards_value() {
    assert_eq!(Try::success("dropped").void(), Try::unit());
}

#[rstest]
fn to_optional_discards_error() {
    assert_eq!(Try::success(1).to_optional(), Optional::some(1));
    assert!(Try::<i32>::failure(TryError::msg("gone")).to_optional().is_empty());
}

#[rstest]
fn get_or_else_on_failure() {
    assert_eq!(Try::failure(TryError::msg("x")).get_or_else(9), 9);
}

// =============================================================================
// Batch Operations
// =============================================================================

#[rstest]
fn flatten_keeps_successes_in_order() {
    let items = vec![
        Try::of(|| 1),
        Try::of(|| -> i32 { panic!("dropped") }),
        Try::success(2),
    ];
    assert_eq!(Try::flatten(items), vec![1, 2]);
}

#[rstest]
fn all_returns_first_failure() {
    let first = TryError::msg("first");
    let second = TryError::msg("second");
    let result = Try::all(vec![
        Try::success(1),
        Try::failure(first.clone()),
        Try::failure(second.clone()),
    ]);
    let error = result.get().unwrap_err();
    assert!(error.ptr_eq(&first));
    assert!(!error.ptr_eq(&second));
}

#[rstest]
fn all_collects_successes() {
    assert_eq!(
        Try::all(vec![Try::success(1), Try::success(2), Try::success(3)]),
        Try::success(vec![1, 2, 3])
    );
}
