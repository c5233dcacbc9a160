use std::fmt;

/// The standard library option, used where this crate bridges to ambient "no value" semantics.
pub type StdOption<T> = std::option::Option<T>;

/// A value that is either present ([`Option::Some`]) or explicitly absent ([`Option::None`]).
///
/// Values are immutable: every operation consumes or borrows an option and produces a new one.
/// Each instantiation has its own zero-payload `None`, so two absent options of the same value
/// type always compare equal and constructing one never allocates.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Option<T> {
    None,
    Some(T),
}

impl<T> Option<T> {
    /// The absent option for `T`.
    pub const NONE: Self = Option::None;

    pub const fn some(value: T) -> Self {
        Option::Some(value)
    }

    pub const fn none() -> Self {
        Option::None
    }

    pub const fn is_some(&self) -> bool {
        matches!(self, Option::Some(_))
    }

    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Option::Some(value) => Option::Some(value),
            Option::None => Option::None,
        }
    }

    /// Tests for presence and borrows the value in one step.
    ///
    /// ```
    /// # use optio::Option;
    /// let option = Option::some(3);
    /// if let Some(value) = option.get() {
    ///     assert_eq!(*value, 3);
    /// }
    /// assert_eq!(Option::<i32>::NONE.get(), None);
    /// ```
    pub const fn get(&self) -> StdOption<&T> {
        match self {
            Option::Some(value) => Some(value),
            Option::None => None,
        }
    }

    /// Returns `true` if the option is present and its value equals `value`. An absent option
    /// never equals a bare value.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(self, Option::Some(inner) if inner == value)
    }

    pub fn into_std(self) -> StdOption<T> {
        match self {
            Option::Some(value) => Some(value),
            Option::None => None,
        }
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.get().into_iter()
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Option::None
    }
}

/// `Some(a)` renders exactly as `a`; `None` renders as the empty string.
impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Option::Some(value) => fmt::Display::fmt(value, f),
            Option::None => Ok(()),
        }
    }
}

impl<T> From<StdOption<T>> for Option<T> {
    fn from(value: StdOption<T>) -> Self {
        match value {
            Some(value) => Option::Some(value),
            None => Option::None,
        }
    }
}

impl<T> From<Option<T>> for StdOption<T> {
    fn from(option: Option<T>) -> Self {
        option.into_std()
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;

    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;

    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
