use crate::{
    ast::{Block, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_block, eval_expression},
        value::{
            core::{NULL, Value},
            environment::Env,
        },
    },
    util::num::i64_to_usize,
};

/// Whether a value counts as true in a condition.
///
/// Only `false` and `null` are falsy; every other value, including `0`, the
/// empty string, and the empty array, is truthy.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::utils::is_truthy, value::core::Value};
///
/// assert!(is_truthy(&Value::Integer(0)));
/// assert!(is_truthy(&Value::Str(String::new())));
/// assert!(!is_truthy(&Value::Boolean(false)));
/// assert!(!is_truthy(&Value::Null));
/// ```
#[must_use]
pub const fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Boolean(false) | Value::Null)
}

/// Evaluates an `if` expression.
///
/// The condition is evaluated first; a truthy condition selects the
/// consequence. Otherwise the alternative is evaluated when present, and a
/// missing alternative yields null.
pub(in crate::interpreter::evaluator) fn eval_if_expr(
    condition: &Expr,
    consequence: &Block,
    alternative: Option<&Block>,
    env: &Env,
) -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if is_truthy(&condition) {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(NULL)
    }
}

/// Evaluates an array indexing expression.
///
/// The indexed expression evaluates before the index. Indexing is defined
/// only for an array with an integer index; a negative index or one past the
/// end yields null rather than an error.
pub(in crate::interpreter::evaluator) fn eval_array_index(
    array: &Expr,
    index: &Expr,
    line: usize,
    env: &Env,
) -> EvalResult<Value> {
    let array_value = eval_expression(array, env)?;
    let index_value = eval_expression(index, env)?;

    match (&array_value, &index_value) {
        (Value::Array(elements), Value::Integer(index)) => Ok(i64_to_usize(*index)
            .and_then(|index| elements.get(index).cloned())
            .unwrap_or(NULL)),
        _ => Err(RuntimeError::IndexNotSupported {
            type_name: array_value.type_name(),
            line,
        }),
    }
}
