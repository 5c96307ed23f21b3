use std::rc::Rc;

use crate::{
    ast::{Block, joined},
    interpreter::{evaluator::builtin::core::Builtin, value::environment::Env},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types a program can produce: the
/// scalars, arrays, the two callable kinds, the null sentinel, and the
/// internal wrapper that carries `return` payloads out of nested blocks.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and by the
    /// `!` operator. Only `false` and `Null` are falsy in conditions; every
    /// other value, including `0` and `""`, is truthy.
    Boolean(bool),
    /// A string of text.
    Str(String),
    /// An array of `Value` elements. The elements are shared, so passing an
    /// array around never copies it; builtins that "modify" an array return
    /// a fresh one instead.
    Array(Rc<Vec<Self>>),
    /// A user-defined function together with the environment it captured.
    Function(Rc<Function>),
    /// A host-provided function from the builtin table.
    Builtin(Builtin),
    /// Wrapper carrying a `return` payload upward through nested blocks
    /// until the enclosing function (or program) unwraps it. Never stored in
    /// an environment.
    Return(Box<Self>),
    /// The absence of a value.
    Null,
}

/// The shared `true` sentinel.
pub const TRUE: Value = Value::Boolean(true);
/// The shared `false` sentinel.
pub const FALSE: Value = Value::Boolean(false);
/// The shared null sentinel.
pub const NULL: Value = Value::Null;

/// A function value: parameters, body, and the environment that was active
/// when the literal was evaluated.
///
/// The captured environment is what makes closures work; it keeps the whole
/// chain of enclosing scopes reachable for as long as the function lives.
#[derive(Debug)]
pub struct Function {
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The body evaluated on every call.
    pub body: Block,
    /// The defining environment (lexical scope, not the caller's).
    pub env: Env,
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl Value {
    /// Returns the stable type name used in runtime diagnostics.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(5).type_name(), "INTEGER");
    /// assert_eq!(Value::Null.type_name(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
            Self::Null => "NULL",
        }
    }
}

impl PartialEq for Value {
    /// Scalars and arrays compare by value; functions compare by identity
    /// (two closures are equal only when they are the same closure) and
    /// builtins by name. `Return` wrappers compare their payloads.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left.name() == right.name(),
            (Self::Return(left), Self::Return(right)) => left == right,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders the inspect form the driver prints.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use monkey::interpreter::value::core::Value;
    ///
    /// let array = Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(2)]));
    ///
    /// assert_eq!(array.to_string(), "[1, 2]");
    /// assert_eq!(Value::Null.to_string(), "NULL");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Array(elements) => write!(f, "[{}]", joined(elements, ", ")),
            Self::Function(function) => write!(
                f,
                "fn({}) {{\n{}\n}}",
                joined(&function.parameters, ", "),
                function.body
            ),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Null => write!(f, "NULL"),
        }
    }
}
