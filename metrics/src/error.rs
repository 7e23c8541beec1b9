use core::error::Error as StdError;

use thiserror::Error;

/// Two arrays that must have the same length were given with different lengths.
///
/// `size_a` and `size_b` are the observed lengths, in the order the inputs were
/// passed. No range check is applied.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("Arrays must have same length, got {size_a} and {size_b}")]
pub struct SizeMismatchError {
    pub size_a: usize,
    pub size_b: usize,
}

impl SizeMismatchError {
    pub fn new(size_a: usize, size_b: usize) -> Self {
        Self { size_a, size_b }
    }
}

/// An argument had an invalid value.
///
/// Every specialized invalid-value failure of this crate converts into this
/// enum, so a caller may handle the whole family in one arm.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValueError {
    #[error(transparent)]
    SizeMismatch(#[from] SizeMismatchError),
}

impl ValueError {
    pub fn size_mismatch(&self) -> Option<&SizeMismatchError> {
        match self {
            Self::SizeMismatch(e) => Some(e),
        }
    }
}

/// Classification of errors that belong to the "invalid value" kind.
pub trait InvalidValue {
    fn is_invalid_value_error(&self) -> bool;
}

impl InvalidValue for SizeMismatchError {
    fn is_invalid_value_error(&self) -> bool {
        true
    }
}

impl InvalidValue for ValueError {
    fn is_invalid_value_error(&self) -> bool {
        true
    }
}

/// Same query as [`InvalidValue::is_invalid_value_error`] for a type-erased error.
pub fn is_invalid_value_error(err: &(dyn StdError + 'static)) -> bool {
    err.is::<SizeMismatchError>() || err.is::<ValueError>()
}
