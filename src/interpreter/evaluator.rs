/// Core evaluation logic.
///
/// Contains the program, block, statement, and expression evaluators, name
/// resolution, and error propagation.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and the truthiness-inverting `!` operator.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: integer arithmetic and
/// comparison, boolean equality, and string concatenation.
pub mod binary;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument binding in a
/// fresh scope, and return-value unwrapping.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides truthiness, conditional evaluation, and array indexing shared by
/// the evaluation logic.
pub mod utils;

/// The built-in function table.
///
/// Declares the host-provided functions on values (`len`, `first`, `last`,
/// `rest`, `push`) and the table used to resolve them.
pub mod builtin;
