use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_block, eval_expression, eval_expressions},
        value::{
            core::Value,
            environment::{Env, Environment},
        },
    },
};

/// Evaluates a call expression.
///
/// The callee evaluates first, then the arguments left to right; an error in
/// any of them propagates before anything is applied. Application errors
/// report the callee's line.
pub(in crate::interpreter::evaluator) fn eval_call(
    function: &Expr,
    arguments: &[Expr],
    env: &Env,
) -> EvalResult<Value> {
    let callee = eval_expression(function, env)?;
    let args = eval_expressions(arguments, env)?;

    apply_function(&callee, &args, function.line_number())
}

/// Applies a callable value to evaluated arguments.
///
/// User-defined functions get a fresh environment enclosed by the one they
/// captured when the literal was evaluated — the caller's environment plays
/// no part, which is what makes scoping lexical. Parameters bind
/// positionally after an arity check, the body evaluates, and a `Return`
/// wrapper is stripped so it stops propagating at the call boundary.
///
/// Builtins validate their own operand types; their arity is checked by the
/// table. Every other value is not callable.
fn apply_function(callee: &Value, args: &[Value], line: usize) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if args.len() != function.parameters.len() {
                return Err(RuntimeError::WrongNumberOfArguments {
                    got: args.len(),
                    want: function.parameters.len(),
                    line,
                });
            }

            let call_env = Environment::new_enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(args) {
                call_env.borrow_mut().set(parameter, argument.clone());
            }

            match eval_block(&function.body, &call_env)? {
                Value::Return(value) => Ok(*value),
                value => Ok(value),
            }
        }
        Value::Builtin(builtin) => builtin.call(args, line),
        value => Err(RuntimeError::NotAFunction {
            type_name: value.type_name(),
            line,
        }),
    }
}
