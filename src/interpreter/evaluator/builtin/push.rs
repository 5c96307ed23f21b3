use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Returns a fresh array: the first argument extended by the second.
///
/// The original array is left untouched; values are immutable, and the
/// shared-element representation makes the copy shallow.
pub fn push(args: &[Value], line: usize) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(args[1].clone());
            Ok(Value::from(extended))
        }
        value => Err(RuntimeError::UnsupportedArgument {
            function: "push",
            type_name: value.type_name(),
            line,
        }),
    }
}
