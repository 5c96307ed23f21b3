/// Core parser state and expression parsing.
///
/// Contains the `Parser` itself, the precedence table, the Pratt expression
/// loop, and conditional expressions.
pub mod core;

/// Statement parsing.
///
/// Implements `let`, `return`, and expression statements, each with an
/// optional trailing semicolon.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by conditionals and
/// function bodies.
pub mod block;

/// Prefix-position parsing.
///
/// Dispatches on the token that can begin an expression: literals,
/// identifiers, unary operators, grouping, conditionals, function literals,
/// and array literals.
pub mod unary;

/// Infix-position parsing.
///
/// Implements binary operators, call expressions, and index expressions.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides shared list parsing for call arguments, array elements, and
/// function parameters.
pub mod utils;
