use std::{cell::Cell, future::ready, task::Poll};

use optio::{Option, OptionFutureExt};
use tests::{ExampleType, block_on, poll_once, yield_once};

fn example(value: &str) -> Option<ExampleType> {
    optio::some(ExampleType::new(value))
}

#[test]
fn otherwise_prefers_the_present_value() {
    assert_eq!(example("Hello!").otherwise(ExampleType::new("fallback")), ExampleType::new("Hello!"));
    assert_eq!(Option::None.otherwise(ExampleType::new("fallback")), ExampleType::new("fallback"));
}

#[test]
fn lazy_fallback_runs_only_when_absent() {
    let called = Cell::new(false);
    let value = example("Hello!").otherwise_with(|| {
        called.set(true);
        ExampleType::new("fallback")
    });
    assert_eq!(value.example_property, "Hello!");
    assert!(!called.get());

    let value = Option::None.otherwise_with(|| {
        called.set(true);
        ExampleType::new("fallback")
    });
    assert_eq!(value.example_property, "fallback");
    assert!(called.get());
}

#[test]
fn otherwise_option_chains_fallbacks() {
    assert_eq!(Option::None.otherwise_option(optio::some(2)), optio::some(2));
    assert_eq!(optio::some(1).otherwise_option(optio::some(2)), optio::some(1));
    assert_eq!(Option::<i32>::NONE.otherwise_option(Option::None), Option::None);

    let resolved = Option::None
        .otherwise_option_with(|| Option::None)
        .otherwise_option_with(|| optio::some("third"))
        .otherwise("last");
    assert_eq!(resolved, "third");
}

#[test]
fn async_fallback_is_not_awaited_when_present() {
    let produced = Cell::new(false);
    let fut = optio::some(1).otherwise_async(|| {
        produced.set(true);
        yield_once(2)
    });
    assert_eq!(poll_once(fut), Poll::Ready(1));
    assert!(!produced.get());
}

#[test]
fn async_fallback_is_awaited_when_absent() {
    let fut = Option::None.otherwise_async(|| yield_once(2));
    assert_eq!(block_on(fut), 2);

    let fut = Option::<i32>::NONE.otherwise_option_async(|| yield_once(optio::some(3)));
    assert_eq!(block_on(fut), optio::some(3));
}

#[test]
fn deferred_source_is_awaited_before_falling_back() {
    assert_eq!(block_on(yield_once(example("Hello!")).otherwise(ExampleType::new("x"))).example_property, "Hello!");
    assert_eq!(block_on(ready(Option::<i32>::NONE).otherwise(7)), 7);
    assert_eq!(block_on(ready(Option::<i32>::NONE).otherwise_with(|| 8)), 8);
    assert_eq!(block_on(yield_once(Option::None).otherwise_option(optio::some(9))), optio::some(9));
    assert_eq!(
        block_on(ready(Option::<i32>::NONE).otherwise_option_with(|| Option::None)),
        Option::None
    );
}

#[test]
fn deferred_source_with_deferred_fallback() {
    let produced = Cell::new(0);
    let fut = yield_once(optio::some(1)).otherwise_async(|| {
        produced.set(produced.get() + 1);
        ready(2)
    });
    assert_eq!(block_on(fut), 1);
    assert_eq!(produced.get(), 0);

    let fut = yield_once(Option::None).otherwise_option_async(|| {
        produced.set(produced.get() + 1);
        yield_once(optio::some(2))
    });
    assert_eq!(block_on(fut), optio::some(2));
    assert_eq!(produced.get(), 1);
}

#[test]
fn deferred_source_is_not_resolved_before_polling() {
    let fut = yield_once(optio::some(1)).otherwise(2);
    assert_eq!(poll_once(fut), Poll::Pending);
}
