use crate::Option;

impl<T> Option<T> {
    /// Returns `true` if the option is present and `predicate` holds for its value.
    pub fn holds<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Option::Some(value) => predicate(value),
            Option::None => false,
        }
    }
}
