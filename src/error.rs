/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include missing expected tokens and tokens no
/// expression can start with.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches, unresolved identifiers, calls on non-functions, and
/// arithmetic failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Either phase of interpretation can fail; this wraps both.
///
/// The inner errors render the bare message templates the language tests
/// observe; this wrapper prefixes the source line, which is what the
/// command-line runner reports.
pub enum InterpreterError {
    /// The source did not parse.
    Parse(ParseError),
    /// The program failed while evaluating.
    Runtime(RuntimeError),
}

impl From<ParseError> for InterpreterError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for InterpreterError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "Error on line {}: {error}", error.line()),
            Self::Runtime(error) => write!(f, "Error on line {}: {error}", error.line()),
        }
    }
}

impl std::error::Error for InterpreterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}
