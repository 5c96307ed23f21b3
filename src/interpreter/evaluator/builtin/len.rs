use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::usize_to_i64_checked,
};

/// Returns the length of its argument.
///
/// Strings report their length in bytes, arrays their element count. Every
/// other type is unsupported.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::builtin::len::len, value::core::Value};
///
/// let result = len(&[Value::from("hello")], 1).unwrap();
///
/// assert_eq!(result, 5.into());
/// ```
pub fn len(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(value) => Ok(Value::Integer(usize_to_i64_checked(
            value.len(),
            RuntimeError::Overflow { line },
        )?)),
        Value::Array(elements) => Ok(Value::Integer(usize_to_i64_checked(
            elements.len(),
            RuntimeError::Overflow { line },
        )?)),
        value => Err(RuntimeError::UnsupportedArgument {
            function: "len",
            type_name: value.type_name(),
            line,
        }),
    }
}
