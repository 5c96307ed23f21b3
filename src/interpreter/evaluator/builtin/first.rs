use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{NULL, Value},
    },
};

/// Returns the first element of an array, or null when the array is empty.
///
/// Non-array arguments are unsupported.
pub fn first(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(NULL)),
        value => Err(RuntimeError::UnsupportedArgument {
            function: "first",
            type_name: value.type_name(),
            line,
        }),
    }
}
