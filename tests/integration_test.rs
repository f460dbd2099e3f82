//! Integration tests for fp-containers.
//!
//! These tests go through the prelude and move values across container
//! boundaries: `Optional` to `Try`, `Try` to `Either`, sync to async.

use fp_containers::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

fn find_user(id: u32) -> Optional<User> {
    Optional::some(id).filter(|id| *id < 100).map(|id| User {
        id,
        name: format!("user-{id}"),
    })
}

fn classify(value: i32) -> &'static str {
    Match::new()
        .case_when(|n: &i32| *n < 0, "negative")
        .case(0, "zero")
        .default("positive")(value)
}

#[rstest]
#[case(7, Ok("user-7".to_string()))]
#[case(700, Err(()))]
fn optional_into_try_into_result(#[case] id: u32, #[case] expected: Result<String, ()>) {
    let result = find_user(id)
        .to_try(EmptyOptionalError)
        .map(|user| user.name)
        .into_result()
        .map_err(|_| ());
    assert_eq!(result, expected);
}

#[rstest]
fn try_into_either_via_result() {
    let parsed: Either<TryError, i32> = Try::of_result(|| "12".parse::<i32>()).into_result().into();
    assert_eq!(parsed.right(), Some(12));

    let failed: Either<TryError, i32> = Try::of_result(|| "twelve".parse::<i32>()).into_result().into();
    assert!(failed.is_left());
}

#[rstest]
#[case(-4, "negative")]
#[case(0, "zero")]
#[case(9, "positive")]
fn match_inside_a_chain(#[case] value: i32, #[case] expected: &str) {
    assert_eq!(Try::success(value).map(classify), Try::success(expected));
}

#[rstest]
fn batch_helpers_agree() {
    let values = vec![Optional::some(1), Optional::empty(), Optional::some(3)];
    assert_eq!(Optional::flatten(values.clone()), vec![1, 3]);
    assert!(Optional::all(values).is_empty());

    let tries = vec![Try::success(1), Try::success(2)];
    assert_eq!(Try::all(tries).get().unwrap(), vec![1, 2]);
}

#[cfg(feature = "async")]
#[rstest]
#[tokio::test]
async fn sync_values_lift_into_async_chains() {
    let doubled = find_user(5).into_async().map(|user| user.id * 2);
    let user = TryAsync::of(async move { doubled.get_or_else(0).await })
        .flat_map(|id| Try::success(id + 1).into_async())
        .get()
        .await;
    assert_eq!(user.unwrap(), 11);
}
