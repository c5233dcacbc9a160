//! Deferred forms of the fallback, choose and matching operators.
//!
//! Nothing here assumes an executor; the returned futures only await what they are given.
//! A present option resolves on the first poll without awaiting the fallback or calling the
//! producer, and an absent option never reaches a mapping or predicate.

use std::future::Future;

use crate::Option;

impl<T> Option<T> {
    /// The present value, or the output of the future produced by `fallback` if absent.
    pub async fn otherwise_async<F, Fut>(self, fallback: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Option::Some(value) => value,
            Option::None => fallback().await,
        }
    }

    /// This option if present, otherwise the option produced by the future from `another`.
    pub async fn otherwise_option_async<F, Fut>(self, another: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => another().await,
        }
    }

    pub async fn choose_async<U, F, Fut>(self, mapping: F) -> Option<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Option::Some(value) => Option::Some(mapping(value).await),
            Option::None => Option::None,
        }
    }

    pub async fn choose_option_async<U, F, Fut>(self, mapping: F) -> Option<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Option<U>>,
    {
        match self {
            Option::Some(value) => mapping(value).await,
            Option::None => Option::None,
        }
    }

    /// Consumes the option; use [`Option::as_ref`] first to test a borrowed value.
    pub async fn holds_async<F, Fut>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Option::Some(value) => predicate(value).await,
            Option::None => false,
        }
    }
}

/// Operators for a deferred option: every method awaits the source first and only then
/// decides whether the fallback, mapping or predicate is needed.
pub trait OptionFutureExt<T>: Future<Output = Option<T>> + Sized {
    fn otherwise(self, fallback: T) -> impl Future<Output = T> {
        async move { self.await.otherwise(fallback) }
    }

    fn otherwise_with<F>(self, fallback: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> T,
    {
        async move { self.await.otherwise_with(fallback) }
    }

    fn otherwise_option(self, another: Option<T>) -> impl Future<Output = Option<T>> {
        async move { self.await.otherwise_option(another) }
    }

    fn otherwise_option_with<F>(self, another: F) -> impl Future<Output = Option<T>>
    where
        F: FnOnce() -> Option<T>,
    {
        async move { self.await.otherwise_option_with(another) }
    }

    fn otherwise_async<F, Fut>(self, fallback: F) -> impl Future<Output = T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        async move { self.await.otherwise_async(fallback).await }
    }

    fn otherwise_option_async<F, Fut>(self, another: F) -> impl Future<Output = Option<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        async move { self.await.otherwise_option_async(another).await }
    }

    fn choose<U, F>(self, mapping: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.choose(mapping) }
    }

    fn choose_option<U, F>(self, mapping: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Option<U>,
    {
        async move { self.await.choose_option(mapping) }
    }

    fn choose_async<U, F, Fut>(self, mapping: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.choose_async(mapping).await }
    }

    fn choose_option_async<U, F, Fut>(self, mapping: F) -> impl Future<Output = Option<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Option<U>>,
    {
        async move { self.await.choose_option_async(mapping).await }
    }

    fn holds<F>(self, predicate: F) -> impl Future<Output = bool>
    where
        F: FnOnce(&T) -> bool,
    {
        async move { self.await.holds(predicate) }
    }

    fn holds_async<F, Fut>(self, predicate: F) -> impl Future<Output = bool>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move { self.await.holds_async(predicate).await }
    }
}

impl<T, Fut> OptionFutureExt<T> for Fut where Fut: Future<Output = Option<T>> {}
