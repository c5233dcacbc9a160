//! Operators over externally supplied sequences.
//!
//! `first` operators stop at the first qualifying element. `single` operators stop at the second
//! one, which is the earliest point a [`CardinalityError`] can be reported; when there is at most
//! one match they consume the whole source. The `async` projections start every future before
//! awaiting any of them.

use std::future::Future;

use futures::{FutureExt, future::join_all};
use itertools::Itertools;

use crate::{CardinalityError, Option};

/// Extraction from a sequence of options.
pub trait OptionsExt<T>: IntoIterator<Item = Option<T>> + Sized {
    /// The present values in source order, skipping absent entries.
    fn choose_values(self) -> impl Iterator<Item = T> {
        self.into_iter().filter_map(Option::into_std)
    }

    fn choose_values_matching<P>(self, predicate: P) -> impl Iterator<Item = T>
    where
        P: FnMut(&T) -> bool,
    {
        self.choose_values().filter(predicate)
    }

    fn choose_values_map<U, F>(self, mapping: F) -> impl Iterator<Item = U>
    where
        F: FnMut(T) -> U,
    {
        self.choose_values().map(mapping)
    }

    /// Applies a deferred `mapping` to every present value. All mappings are started when this is
    /// called and then awaited together; results keep source order.
    fn choose_values_map_async<U, F, Fut>(self, mapping: F) -> impl Future<Output = Vec<U>>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = U>,
    {
        join_all(self.choose_values().map(mapping))
    }

    fn choose_first(self) -> Option<T> {
        self.choose_values().next().into()
    }

    fn choose_first_matching<P>(self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.choose_values().find(predicate).into()
    }

    /// The only present value, `None` if there is none, or an error if there are several.
    fn choose_single(self) -> Result<Option<T>, CardinalityError> {
        single(self.choose_values())
    }

    fn choose_single_matching<P>(self, predicate: P) -> Result<Option<T>, CardinalityError>
    where
        P: FnMut(&T) -> bool,
    {
        single(self.choose_values().filter(predicate))
    }
}

impl<T, I> OptionsExt<T> for I where I: IntoIterator<Item = Option<T>> {}

/// Building an option from a sequence of raw values.
pub trait SequenceExt: IntoIterator + Sized {
    fn first_or_none(self) -> Option<Self::Item> {
        self.into_iter().next().into()
    }

    fn first_or_none_matching<P>(self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter().find(predicate).into()
    }

    fn single_or_none(self) -> Result<Option<Self::Item>, CardinalityError> {
        single(self.into_iter())
    }

    fn single_or_none_matching<P>(self, predicate: P) -> Result<Option<Self::Item>, CardinalityError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        single(self.into_iter().filter(predicate))
    }

    /// The values selected by an option-returning `selector`; elements it maps to `None` are
    /// dropped.
    fn choose_by<U, F>(self, selector: F) -> impl Iterator<Item = U>
    where
        F: FnMut(Self::Item) -> Option<U>,
    {
        self.into_iter().map(selector).filter_map(Option::into_std)
    }

    /// Like [`SequenceExt::choose_by`] with a deferred selector. The selector is called on every
    /// element up front and the futures are awaited together; results keep source order.
    fn choose_by_async<U, F, Fut>(self, selector: F) -> impl Future<Output = Vec<U>>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Option<U>>,
    {
        join_all(self.into_iter().map(selector))
            .map(|selected| selected.choose_values().collect())
    }
}

impl<I: IntoIterator> SequenceExt for I {}

fn single<I: Iterator>(iter: I) -> Result<Option<I::Item>, CardinalityError> {
    match iter.at_most_one() {
        Ok(item) => Ok(item.into()),
        Err(_) => {
            tracing::debug!(
                item = std::any::type_name::<I::Item>(),
                "more than one matching element"
            );
            Err(CardinalityError)
        }
    }
}
