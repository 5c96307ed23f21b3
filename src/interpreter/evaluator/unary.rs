use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, eval_expression},
            utils::is_truthy,
        },
        value::{core::Value, environment::Env},
    },
};

/// Evaluates a unary operator applied to a subexpression.
///
/// The operand is evaluated first; an error in it propagates unchanged.
pub(in crate::interpreter::evaluator) fn eval_unary_op(
    op: UnaryOperator,
    expr: &Expr,
    line: usize,
    env: &Env,
) -> EvalResult<Value> {
    let value = eval_expression(expr, env)?;

    match op {
        UnaryOperator::Not => Ok(eval_not(&value)),
        UnaryOperator::Negate => eval_negate(&value, line),
    }
}

/// The `!` operator: truthiness inversion.
///
/// `!true` is `false`, `!false` and `!null` are `true`, and every other
/// value negates to `false`. This never fails.
fn eval_not(value: &Value) -> Value {
    Value::from(!is_truthy(value))
}

/// The `-` operator. Only integers can be negated; the negation is checked
/// because `i64::MIN` has no positive counterpart.
fn eval_negate(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Integer(value) => value
            .checked_neg()
            .map(Value::Integer)
            .ok_or(RuntimeError::Overflow { line }),
        value => Err(RuntimeError::UnknownUnaryOperator {
            op: UnaryOperator::Negate,
            operand: value.type_name(),
            line,
        }),
    }
}
