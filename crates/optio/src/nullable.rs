//! Bridge to host types that carry their own "no value" sentinel.
//!
//! This is the only place where [`Option`] meets ambient null-like semantics: the standard
//! library option (`None` is the sentinel) and raw pointers (null is the sentinel, present
//! values surface as [`NonNull`]).

use std::ptr::{self, NonNull};

use crate::{Option, option::StdOption};

/// A type with a distinct null-like bottom value.
pub trait Nullable: Sized {
    /// What a non-null value converts to.
    type Value;

    fn into_option(self) -> Option<Self::Value>;

    fn from_option(option: Option<Self::Value>) -> Self;
}

impl<T> Nullable for StdOption<T> {
    type Value = T;

    fn into_option(self) -> Option<T> {
        Option::from(self)
    }

    fn from_option(option: Option<T>) -> Self {
        option.into_std()
    }
}

impl<T> Nullable for *const T {
    type Value = NonNull<T>;

    fn into_option(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut()).into()
    }

    fn from_option(option: Option<NonNull<T>>) -> Self {
        match option {
            Option::Some(ptr) => ptr.as_ptr().cast_const(),
            Option::None => ptr::null(),
        }
    }
}

impl<T> Nullable for *mut T {
    type Value = NonNull<T>;

    fn into_option(self) -> Option<NonNull<T>> {
        NonNull::new(self).into()
    }

    fn from_option(option: Option<NonNull<T>>) -> Self {
        match option {
            Option::Some(ptr) => ptr.as_ptr(),
            Option::None => ptr::null_mut(),
        }
    }
}

impl<T> Option<T> {
    /// A non-null value becomes present, the sentinel becomes absent.
    pub fn from_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        value.into_option()
    }

    /// The value itself, or the sentinel of `N` if absent.
    pub fn or_null<N>(self) -> N
    where
        N: Nullable<Value = T>,
    {
        N::from_option(self)
    }
}
