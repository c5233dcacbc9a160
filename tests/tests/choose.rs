use std::{cell::Cell, future::ready};

use optio::{Option, OptionFutureExt};
use tests::{ExampleType, block_on, yield_once};

#[test]
fn choose_transforms_a_present_value() {
    let option = optio::some(ExampleType::new("Hello!"));
    assert_eq!(option.choose(|v| v.example_property), optio::some(String::from("Hello!")));
}

#[test]
fn choose_never_calls_the_mapping_on_absence() {
    let called = Cell::new(false);
    let chosen = Option::<ExampleType>::NONE.choose(|v| {
        called.set(true);
        v.example_property
    });
    assert_eq!(chosen, Option::None);
    assert!(!called.get());
}

#[test]
fn chained_transforms_compose() {
    let length = optio::some(ExampleType::new("Hello!"))
        .choose(|v| v.example_property)
        .choose(|s| s.len())
        .otherwise(0);
    assert_eq!(length, 6);
}

#[test]
fn choose_option_flattens_the_result() {
    let parse = |s: &str| Option::from_nullable(s.parse::<i32>().ok());

    assert_eq!(optio::some("12").choose_option(parse), optio::some(12));
    assert_eq!(optio::some("twelve").choose_option(parse), Option::None);
    assert_eq!(Option::None.choose_option(parse), Option::None);
}

#[test]
fn flatten_removes_one_level() {
    assert_eq!(optio::some(optio::some(1)).flatten(), optio::some(1));
    assert_eq!(optio::some(Option::<i32>::NONE).flatten(), Option::None);
    assert_eq!(Option::<Option<i32>>::NONE.flatten(), Option::None);
}

#[test]
fn holds_tests_the_value() {
    let option = optio::some(ExampleType::new("Hello!"));
    assert!(option.holds(|v| v.example_property.starts_with("Hell")));
    assert!(!option.holds(|v| v.example_property.is_empty()));
    assert!(!Option::<ExampleType>::NONE.holds(|_| true));
}

#[test]
fn async_mappings() {
    let chosen = block_on(optio::some(2).choose_async(|v| yield_once(v * 10)));
    assert_eq!(chosen, optio::some(20));

    let chosen = block_on(optio::some(2).choose_option_async(|_| ready(Option::<i32>::NONE)));
    assert_eq!(chosen, Option::None);

    let called = Cell::new(false);
    let chosen = block_on(Option::<i32>::NONE.choose_async(|v| {
        called.set(true);
        ready(v)
    }));
    assert_eq!(chosen, Option::None);
    assert!(!called.get());
}

#[test]
fn deferred_source_mappings() {
    let source = || yield_once(optio::some(ExampleType::new("Hello!")));

    assert_eq!(block_on(source().choose(|v| v.example_property.len())), optio::some(6));
    assert_eq!(
        block_on(source().choose_option(|v| optio::some(v.example_property))),
        optio::some(String::from("Hello!"))
    );
    assert_eq!(
        block_on(source().choose_async(|v| yield_once(v.example_property.len()))),
        optio::some(6)
    );
    assert_eq!(
        block_on(source().choose_option_async(|_| ready(Option::<usize>::NONE))),
        Option::None
    );
    assert!(block_on(source().holds(|v| v.example_property == "Hello!")));
    assert!(block_on(source().holds_async(|v| ready(!v.example_property.is_empty()))));
}

#[test]
fn async_predicate_on_absence_is_false() {
    let called = Cell::new(false);
    let holds = block_on(Option::<i32>::NONE.holds_async(|_| {
        called.set(true);
        ready(true)
    }));
    assert!(!holds);
    assert!(!called.get());
}

#[test]
fn chained_string_transforms() {
    let greeting = optio::some(String::from("Hello"))
        .choose(|v| v + " world")
        .choose(|v| v + "!");
    assert_eq!(greeting, optio::some(String::from("Hello world!")));
}
