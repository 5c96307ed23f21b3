/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages environments, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, functions, closures, and control flow.
/// - Reports runtime errors such as type mismatches or unresolved names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, operators, delimiters, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Surfaces malformed input as illegal tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, recording errors with location
///   info.
/// - Supports operator precedence, function literals, calls, and indexing.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation and
/// execution, such as integers, booleans, strings, arrays, and functions,
/// together with the environments bindings live in.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Provides type names, equality, and the inspect rendering.
/// - Implements lexically nested environments.
pub mod value;
