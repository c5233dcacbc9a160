use std::fmt;

/// A single-match extraction found more than one qualifying element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardinalityError;

impl fmt::Display for CardinalityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sequence contains more than one matching element")
    }
}

impl std::error::Error for CardinalityError {}
