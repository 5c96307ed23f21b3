/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the integer
/// types the interpreter mixes: `i64` at the language surface and `usize` at
/// the host collections underneath. Use these helpers whenever a conversion
/// could lose information.
pub mod num;
