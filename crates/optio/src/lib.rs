//! An optional value that forces callers to handle absence.
//!
//! [`Option`] is a closed sum of a present value and an explicit absence, with an algebra of
//! total operators on top of it:
//!
//! - fallback: [`Option::otherwise`] and friends resolve absence eagerly, lazily, or through a
//!   future;
//! - transformation: [`Option::choose`], [`Option::choose_option`], [`Option::flatten`];
//! - matching: [`Option::holds`];
//! - sequences: [`OptionsExt`] and [`SequenceExt`];
//! - deferred sources: [`OptionFutureExt`];
//! - serde support using the array encoding described in [`wire`].
//!
//! ```
//! use optio::{Option, OptionsExt};
//!
//! let greeting = optio::some("Hello").choose(|v| format!("{v} world")).otherwise_with(String::new);
//! assert_eq!(greeting, "Hello world");
//!
//! let values: Vec<_> = vec![Option::None, optio::some(1), optio::some(2)].choose_values().collect();
//! assert_eq!(values, [1, 2]);
//! ```

mod choose;
mod error;
mod fallback;
mod matching;
mod option;

pub mod erased;
pub mod future;
pub mod nullable;
pub mod sequence;
pub mod wire;

pub use error::CardinalityError;
pub use erased::AnyOption;
pub use future::OptionFutureExt;
pub use nullable::Nullable;
pub use option::{Option, StdOption};
pub use sequence::{OptionsExt, SequenceExt};

/// A present option wrapping `value`.
pub const fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// The absent option for `T`.
pub const fn none<T>() -> Option<T> {
    Option::None
}
