#![cfg_attr(not(feature = "std"), no_std)]

mod check;
mod error;

pub use check::{check_same_len, check_same_length};
pub use error::{is_invalid_value_error, InvalidValue, SizeMismatchError, ValueError};
