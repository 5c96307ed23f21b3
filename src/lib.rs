//! # monkey
//!
//! monkey is an interpreter for the Monkey programming language written in
//! Rust. It tokenizes, parses, and evaluates Monkey source code: a small,
//! dynamically-typed scripting language with integers, booleans, strings,
//! arrays, first-class functions with closures, and a handful of built-in
//! functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::InterpreterError,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::{core::Value, environment::Environment},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders every node's canonical textual form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, stable message
/// templates, and source lines for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and environments to provide a complete runtime for
/// source code evaluation. It exposes the public API for interpreting and
/// executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive prompt.
///
/// Reads lines from standard input, pipes each through the lexer, parser,
/// and evaluator against a persistent environment, and prints results.
pub mod repl;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used throughout the
/// evaluator and the built-in functions.
pub mod util;

/// Parses and evaluates a complete source string.
///
/// The source is tokenized and parsed as a whole; if any syntax error was
/// recorded the first one is returned and nothing is evaluated. Otherwise
/// the program runs against a fresh global environment and the value of its
/// last statement is returned. With `auto_print` set, a non-null result is
/// also printed to standard output.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use monkey::get_result;
///
/// // Simple program: the value of the last statement is returned.
/// let source = "let result = 2 + 2; result;";
/// let res = get_result(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown identifier).
/// let source = "let y = x + 1;"; // 'x' is not defined
/// let res = get_result(source, false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Value, InterpreterError> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if let Some(error) = parser.errors().first() {
        return Err(error.clone().into());
    }

    let env = Environment::new();
    let value = eval_program(&program, &env)?;

    if auto_print && value != Value::Null {
        println!("{value}");
    }

    Ok(value)
}
