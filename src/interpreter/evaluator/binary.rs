use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_expression},
        value::{core::Value, environment::Env},
    },
};

/// Evaluates a binary operator applied to two expressions.
///
/// The right operand evaluates before the left one; the order is observable
/// only through side-effecting calls but is fixed for determinism. An error
/// in either operand propagates unchanged.
pub(in crate::interpreter::evaluator) fn eval_binary_op(
    left: &Expr,
    op: BinaryOperator,
    right: &Expr,
    line: usize,
    env: &Env,
) -> EvalResult<Value> {
    let rval = eval_expression(right, env)?;
    let lval = eval_expression(left, env)?;

    eval_binary(op, &lval, &rval, line)
}

/// Applies a binary operator to two evaluated values.
///
/// Dispatch is on the operand type pair: integers support the full operator
/// set, booleans only equality, strings only concatenation. Operands of
/// different types are a type mismatch; operands of the same type with an
/// operator that type does not support are an unknown operator.
pub(in crate::interpreter::evaluator) fn eval_binary(
    op: BinaryOperator,
    left: &Value,
    right: &Value,
    line: usize,
) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(lval), Value::Integer(rval)) => {
            eval_integer_binary(op, *lval, *rval, line)
        }
        (Value::Boolean(lval), Value::Boolean(rval)) => {
            eval_boolean_binary(op, *lval, *rval, line)
        }
        (Value::Str(lval), Value::Str(rval)) => eval_string_binary(op, lval, rval, line),
        (left, right) if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch {
                left: left.type_name(),
                op,
                right: right.type_name(),
                line,
            })
        }
        (left, right) => Err(RuntimeError::UnknownBinaryOperator {
            left: left.type_name(),
            op,
            right: right.type_name(),
            line,
        }),
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic is checked; division truncates toward zero and rejects a zero
/// divisor.
fn eval_integer_binary(op: BinaryOperator, lval: i64, rval: i64, line: usize) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => lval
            .checked_add(rval)
            .map(Value::Integer)
            .ok_or(RuntimeError::Overflow { line }),
        BinaryOperator::Sub => lval
            .checked_sub(rval)
            .map(Value::Integer)
            .ok_or(RuntimeError::Overflow { line }),
        BinaryOperator::Mul => lval
            .checked_mul(rval)
            .map(Value::Integer)
            .ok_or(RuntimeError::Overflow { line }),
        BinaryOperator::Div => {
            if rval == 0 {
                Err(RuntimeError::DivisionByZero { line })
            } else {
                lval.checked_div(rval)
                    .map(Value::Integer)
                    .ok_or(RuntimeError::Overflow { line })
            }
        }
        BinaryOperator::Less => Ok(Value::from(lval < rval)),
        BinaryOperator::Greater => Ok(Value::from(lval > rval)),
        BinaryOperator::Equal => Ok(Value::from(lval == rval)),
        BinaryOperator::NotEqual => Ok(Value::from(lval != rval)),
    }
}

/// Boolean equality. Because `true` and `false` are shared sentinels,
/// comparing by value coincides with comparing by identity.
fn eval_boolean_binary(op: BinaryOperator, lval: bool, rval: bool, line: usize) -> EvalResult<Value> {
    match op {
        BinaryOperator::Equal => Ok(Value::from(lval == rval)),
        BinaryOperator::NotEqual => Ok(Value::from(lval != rval)),
        _ => Err(RuntimeError::UnknownBinaryOperator {
            left: "BOOLEAN",
            op,
            right: "BOOLEAN",
            line,
        }),
    }
}

/// String concatenation; the only operator strings support.
fn eval_string_binary(op: BinaryOperator, lval: &str, rval: &str, line: usize) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::from(format!("{lval}{rval}"))),
        _ => Err(RuntimeError::UnknownBinaryOperator {
            left: "STRING",
            op,
            right: "STRING",
            line,
        }),
    }
}
