use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors short-circuit the enclosing blocks and surface as the final
/// result of the program. Their rendered messages are part of the language's
/// observable surface and must stay stable.
pub enum RuntimeError {
    /// The two operands of a binary operator have different types.
    TypeMismatch {
        /// Type name of the left operand.
        left: &'static str,
        /// The operator that was applied.
        op: BinaryOperator,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A binary operator was applied to operands that do not support it.
    UnknownBinaryOperator {
        /// Type name of the left operand.
        left: &'static str,
        /// The operator that was applied.
        op: BinaryOperator,
        /// Type name of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator was applied to an operand that does not support it.
    UnknownUnaryOperator {
        /// The operator that was applied.
        op: UnaryOperator,
        /// Type name of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A name resolved to neither a binding nor a builtin.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call was made on a value that is not callable.
    NotAFunction {
        /// Type name of the value that was called.
        type_name: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    WrongNumberOfArguments {
        /// How many arguments were supplied.
        got: usize,
        /// How many arguments the function takes.
        want: usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin received an argument of an unsupported type.
    UnsupportedArgument {
        /// Name of the builtin function.
        function: &'static str,
        /// Type name of the offending argument.
        type_name: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The index operator was applied to a value that cannot be indexed.
    IndexNotSupported {
        /// Type name of the value being indexed.
        type_name: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// The source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::TypeMismatch { line, .. }
            | Self::UnknownBinaryOperator { line, .. }
            | Self::UnknownUnaryOperator { line, .. }
            | Self::IdentifierNotFound { line, .. }
            | Self::NotAFunction { line, .. }
            | Self::WrongNumberOfArguments { line, .. }
            | Self::UnsupportedArgument { line, .. }
            | Self::IndexNotSupported { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch {
                left, op, right, ..
            } => write!(f, "type mismatch: {left} {op} {right}"),
            Self::UnknownBinaryOperator {
                left, op, right, ..
            } => write!(f, "unknown operator: {left} {op} {right}"),
            Self::UnknownUnaryOperator { op, operand, .. } => {
                write!(f, "unknown operator: {op}{operand}")
            }
            Self::IdentifierNotFound { name, .. } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { type_name, .. } => write!(f, "not a function: {type_name}"),
            Self::WrongNumberOfArguments { got, want, .. } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            }
            Self::UnsupportedArgument {
                function,
                type_name,
                ..
            } => write!(f, "argument to `{function}` not supported, got {type_name}"),
            Self::IndexNotSupported { type_name, .. } => {
                write!(f, "index operator not supported: {type_name}")
            }
            Self::DivisionByZero { .. } => write!(f, "division by zero"),
            Self::Overflow { .. } => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for RuntimeError {}
