//! Type-erased view over options whose value type is only known at runtime.

use std::{
    any::{self, Any, TypeId},
    fmt,
};

use crate::Option;

/// An [`Option`] seen through a trait object.
///
/// Equality through this view keeps the value type in the comparison: options over different
/// value types are never equal, even when both are absent.
pub trait AnyOption: Any + fmt::Debug + Send + Sync {
    /// The [`TypeId`] of the value type `T`, not of `Option<T>`.
    fn value_type_id(&self) -> TypeId;

    fn value_type_name(&self) -> &'static str;

    fn is_some(&self) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Compares against another option of the same value type, or against a bare value.
    /// Anything else is unequal.
    fn dyn_eq(&self, other: &dyn Any) -> bool;
}

impl<T> AnyOption for Option<T>
where
    T: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    fn value_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn value_type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn is_some(&self) -> bool {
        Option::is_some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn dyn_eq(&self, other: &dyn Any) -> bool {
        if let Some(other) = other.downcast_ref::<Option<T>>() {
            self == other
        } else if let Some(value) = other.downcast_ref::<T>() {
            self.contains(value)
        } else {
            false
        }
    }
}

impl PartialEq for dyn AnyOption {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other.as_any())
    }
}
