use crate::Option;

impl<T> Option<T> {
    /// Applies `mapping` to a present value and wraps the result. An absent option stays absent
    /// and `mapping` is never called.
    pub fn choose<U, F>(self, mapping: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Option::Some(value) => Option::Some(mapping(value)),
            Option::None => Option::None,
        }
    }

    /// Applies an option-returning `mapping` to a present value and returns its result as-is,
    /// flattening one level of nesting.
    pub fn choose_option<U, F>(self, mapping: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Option::Some(value) => mapping(value),
            Option::None => Option::None,
        }
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Option<T> {
        match self {
            Option::Some(inner) => inner,
            Option::None => Option::None,
        }
    }
}
