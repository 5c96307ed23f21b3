/// The builtin table and dispatch.
///
/// Declares the `Builtin` handle stored in values, the static name table,
/// and the central arity check performed before any builtin runs.
pub mod core;

/// `len(x)`: string byte length or array element count.
pub mod len;

/// `first(arr)`: the first element of an array, or null when empty.
pub mod first;

/// `last(arr)`: the last element of an array, or null when empty.
pub mod last;

/// `rest(arr)`: a fresh array of all but the first element.
pub mod rest;

/// `push(arr, x)`: a fresh array extended by one element.
pub mod push;
