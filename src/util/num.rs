/// Safely converts a `usize` to `i64`, returning the caller-supplied error
/// when the value does not fit.
///
/// ## Parameters
/// - `value`: The length or count to convert.
/// - `error`: The error to return if conversion would overflow.
///
/// ## Returns
/// - `Ok(i64)`: The converted value if it fits.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use monkey::util::num::usize_to_i64_checked;
///
/// let result = usize_to_i64_checked(42_usize, "too big!");
/// assert_eq!(result.unwrap(), 42);
/// ```
pub fn usize_to_i64_checked<E>(value: usize, error: E) -> Result<i64, E> {
    i64::try_from(value).map_err(|_| error)
}

/// Converts an `i64` array index into a `usize` slot.
///
/// Negative indexes address no slot and map to `None`; the indexing
/// evaluator turns that into a null result rather than an error.
///
/// ## Example
/// ```
/// use monkey::util::num::i64_to_usize;
///
/// assert_eq!(i64_to_usize(3), Some(3));
/// assert_eq!(i64_to_usize(-1), None);
/// ```
#[must_use]
pub fn i64_to_usize(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
