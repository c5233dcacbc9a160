//! Resolving absence to a substitute value or option.
//!
//! The `*_with` forms take a producer that runs only when the option is absent. Raw-value
//! fallbacks always yield a raw value and option fallbacks always yield an option.

use crate::Option;

impl<T> Option<T> {
    /// The present value, or `fallback` if absent.
    pub fn otherwise(self, fallback: T) -> T {
        match self {
            Option::Some(value) => value,
            Option::None => fallback,
        }
    }

    /// The present value, or the result of `fallback` if absent.
    pub fn otherwise_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Option::Some(value) => value,
            Option::None => fallback(),
        }
    }

    /// This option if present, otherwise `another`.
    pub fn otherwise_option(self, another: Option<T>) -> Option<T> {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => another,
        }
    }

    /// This option if present, otherwise the option produced by `another`.
    pub fn otherwise_option_with<F>(self, another: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => another(),
        }
    }
}
