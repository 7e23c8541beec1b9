use crate::SizeMismatchError;

/// Returns the common length, or the mismatch in the order the sizes were given.
pub fn check_same_length(size_a: usize, size_b: usize) -> Result<usize, SizeMismatchError> {
    if size_a != size_b {
        return Err(SizeMismatchError::new(size_a, size_b));
    }

    Ok(size_a)
}

/// Slice form of [`check_same_length`], for inputs such as observed and predicted values.
pub fn check_same_len<A, B>(a: &[A], b: &[B]) -> Result<usize, SizeMismatchError> {
    check_same_length(a.len(), b.len())
}
