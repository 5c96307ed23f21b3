use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{NULL, Value},
    },
};

/// Returns a fresh array containing all but the first element, or null when
/// the array is empty.
///
/// Successive applications walk an array down to `[]`, which is what the
/// recursive iteration idiom of the language is built on.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::builtin::rest::rest, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
/// let result = rest(&[array], 1).unwrap();
///
/// assert_eq!(result, Value::from(vec![Value::Integer(2)]));
/// ```
pub fn rest(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(NULL)
            } else {
                Ok(Value::from(elements[1..].to_vec()))
            }
        }
        value => Err(RuntimeError::UnsupportedArgument {
            function: "rest",
            type_name: value.type_name(),
            line,
        }),
    }
}
