//! Unit tests for `Optional<A>`.
//!
//! `Optional` is either `Some(A)` or `None`:
//! - Present values include falsy ones (`0`, `""`, `false`)
//! - Transformations never run on `None`
//! - Callbacks reporting absence collapse to `None`

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use fp_containers::control::{Optional, Try};
use fp_containers::error::{EmptyOptionalError, TryError};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(Some(0), true)]
#[case(Some(42), true)]
#[case(None, false)]
fn of_tracks_presence(#[case] input: Option<i32>, #[case] present: bool) {
    let value = Optional::of(input);
    assert_eq!(value.is_present(), present);
    assert_eq!(value.is_empty(), !present);
}

#[rstest]
fn of_round_trips_present_values() {
    assert_eq!(Optional::of(Some("")).get(), Ok(""));
    assert_eq!(Optional::of(Some(false)).get(), Ok(false));
}

#[rstest]
fn conversions_with_option() {
    let value: Optional<i32> = Some(3).into();
    assert_eq!(value, Optional::some(3));
    let back: Option<i32> = value.into();
    assert_eq!(back, Some(3));
}

#[rstest]
fn default_is_empty() {
    assert!(Optional::<String>::default().is_empty());
}

// =============================================================================
// Absorption
// =============================================================================

#[rstest]
fn empty_never_calls_callbacks() {
    let calls = AtomicUsize::new(0);
    let count = |n: i32| {
        calls.fetch_add(1, Ordering::SeqCst);
        n
    };

    let empty = Optional::<i32>::empty();
    assert!(empty.map(count).is_empty());
    assert!(empty.map_nullable(|n| Some(count(n))).is_empty());
    assert!(empty.flat_map(|n| Optional::some(count(n))).is_empty());
    assert!(empty.chain(|n| Optional::some(count(n))).is_empty());
    assert!(empty.ap(Optional::some(count)).is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn map_nullable_collapses_absence() {
    let result = Optional::some("value").map_nullable(|_| None::<i32>);
    assert!(result.is_empty());
}

#[rstest]
fn map_transforms_present_value() {
    let result = Optional::some("hello").map(|s| format!("{s} world"));
    assert_eq!(result, Optional::some(String::from("hello world")));
}

#[rstest]
#[should_panic(expected = "not captured")]
fn map_does_not_capture_panics() {
    let _ = Optional::some(1).map(|_| -> i32 { panic!("not captured") });
}

// =============================================================================
// Applicative and Case Analysis
// =============================================================================

#[rstest]
fn ap_applies_wrapped_function() {
    let function = Optional::some(|s: &str| s.len());
    assert_eq!(Optional::some("four").ap(function), Optional::some(4));
}

#[rstest]
fn ap_with_empty_function_is_empty() {
    let function: Optional<fn(i32) -> i32> = Optional::empty();
    assert!(Optional::some(1).ap(function).is_empty());
}

#[rstest]
#[case(Optional::some(2), "two")]
#[case(Optional::empty(), "none")]
fn case_dispatches(#[case] input: Optional<i32>, #[case] expected: &str) {
    let result = input.case(|_| Optional::some("two"), || Optional::some("none"));
    assert_eq!(result, Optional::some(expected));
}

#[rstest]
fn filter_keeps_matching_values() {
    assert_eq!(Optional::some(4).filter(|n| n % 2 == 0), Optional::some(4));
    assert!(Optional::some(3).filter(|n| n % 2 == 0).is_empty());
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn get_on_empty_is_an_error() {
    assert_eq!(Optional::<i32>::empty().get(), Err(EmptyOptionalError));
    assert_eq!(
        EmptyOptionalError.to_string(),
        "called get on an empty Optional"
    );
}

#[rstest]
fn get_or_else_variants() {
    assert_eq!(Optional::some(1).get_or_else(2), 1);
    assert_eq!(Optional::empty().get_or_else(2), 2);
    assert_eq!(Optional::<i32>::empty().get_or_else_with(|| 3), 3);
}

#[rstest]
fn get_or_null_maps_to_option() {
    assert_eq!(Optional::some(1).get_or_null(), Some(1));
    assert_eq!(Optional::<i32>::empty().get_or_null(), None);
}

#[rstest]
fn get_or_throw_returns_the_given_error() {
    #[derive(Debug, PartialEq)]
    struct Missing(&'static str);

    assert_eq!(Optional::some(1).get_or_throw(Missing("id")), Ok(1));
    assert_eq!(
        Optional::<i32>::empty().get_or_throw(Missing("id")),
        Err(Missing("id"))
    );
}

#[rstest]
fn contains_and_exists() {
    let value = Optional::some(String::from("rust"));
    assert!(value.contains(&String::from("rust")));
    assert!(!value.contains(&String::from("go")));
    assert!(value.exists(|s| s.len() == 4));
    assert!(!Optional::<String>::empty().contains(&String::new()));
}

#[rstest]
fn to_try_uses_the_given_error() {
    let error = TryError::msg("absent");
    let result: Try<i32> = Optional::empty().to_try(error.clone());
    assert_eq!(result.error(), Some(&error));
    assert_eq!(Optional::some(1).to_try(TryError::msg("unused")), Try::success(1));
}

// =============================================================================
// Batch Operations
// =============================================================================

#[rstest]
fn flatten_filters_and_preserves_order() {
    let values = vec![
        Optional::some(1),
        Optional::empty(),
        Optional::some(2),
        Optional::empty(),
        Optional::some(3),
    ];
    assert_eq!(Optional::flatten(values), vec![1, 2, 3]);
}

#[rstest]
fn all_stops_at_first_empty() {
    let visited = AtomicUsize::new(0);
    let items = [Optional::some(1), Optional::empty(), Optional::some(3)]
        .into_iter()
        .inspect(|_| {
            visited.fetch_add(1, Ordering::SeqCst);
        });
    assert!(Optional::all(items).is_empty());
    assert_eq!(visited.load(Ordering::SeqCst), 2);
}

#[rstest]
fn all_of_nothing_is_an_empty_vec() {
    assert_eq!(Optional::<i32>::all(Vec::new()), Optional::some(Vec::new()));
}

#[rstest]
fn flatten_fields_drops_absent_entries() {
    let fields = BTreeMap::from([
        ("a", Optional::some(1)),
        ("b", Optional::empty()),
        ("c", Optional::some(3)),
    ]);
    assert_eq!(
        Optional::flatten_fields(fields),
        BTreeMap::from([("a", 1), ("c", 3)])
    );
}
