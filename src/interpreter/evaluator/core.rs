use std::rc::Rc;

use crate::{
    ast::{Block, Expr, LiteralValue, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::eval_binary_op,
            builtin::core::Builtin,
            function::eval_call,
            unary::eval_unary_op,
            utils::{eval_array_index, eval_if_expr},
        },
        value::{
            core::{Function, NULL, Value},
            environment::Env,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The `?` operator is what makes an
/// error short-circuit every enclosing block, so the first failure surfaces
/// as the result of the whole program.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a parsed program against an environment.
///
/// Statements run in source order; the value of the last one is the value of
/// the program. A `return` encountered at any depth stops execution
/// immediately and its payload, unwrapped, becomes the program's value.
///
/// # Errors
/// Returns the first `RuntimeError` any statement raises.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     evaluator::core::eval_program,
///     lexer::Lexer,
///     parser::core::Parser,
///     value::{core::Value, environment::Environment},
/// };
///
/// let mut parser = Parser::new(Lexer::new("let a = 5; a * 2;"));
/// let program = parser.parse_program();
/// assert!(parser.errors().is_empty());
///
/// let env = Environment::new();
/// assert_eq!(eval_program(&program, &env), Ok(Value::Integer(10)));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Value> {
    let mut result = NULL;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;
        if let Value::Return(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

/// Evaluates a block of statements without unwrapping `return`.
///
/// A `Return` result stops the loop but keeps its wrapper, so it keeps
/// propagating through enclosing blocks until the function (or program)
/// boundary unwraps it.
pub(in crate::interpreter::evaluator) fn eval_block(block: &Block, env: &Env) -> EvalResult<Value> {
    let mut result = NULL;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
        if matches!(result, Value::Return(_)) {
            break;
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` binds into the current environment and yields null; `return` wraps
/// its payload; an expression statement yields the expression's value.
fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            // A `return` escaping through the bound expression aborts the
            // binding; the wrapper is never stored in an environment.
            if matches!(value, Value::Return(_)) {
                return Ok(value);
            }
            env.borrow_mut().set(name, value);
            Ok(NULL)
        }
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        }
        Statement::Expression { expr, .. } => eval_expression(expr, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the evaluator's central dispatch: literals and function literals
/// construct values directly, and every composite form hands off to its
/// dedicated evaluator.
pub(in crate::interpreter::evaluator) fn eval_expression(
    expr: &Expr,
    env: &Env,
) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(eval_literal(value)),
        Expr::Variable { name, line } => eval_variable(name, *line, env),
        Expr::UnaryOp { op, expr, line } => eval_unary_op(*op, expr, *line, env),
        Expr::BinaryOp {
            left,
            op,
            right,
            line,
        } => eval_binary_op(left, *op, right, *line, env),
        Expr::IfExpr {
            condition,
            consequence,
            alternative,
            ..
        } => eval_if_expr(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral {
            parameters, body, ..
        } => Ok(Value::Function(Rc::new(Function {
            parameters: parameters.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        }))),
        Expr::FunctionCall {
            function, arguments, ..
        } => eval_call(function, arguments, env),
        Expr::ArrayLiteral { elements, .. } => Ok(Value::from(eval_expressions(elements, env)?)),
        Expr::ArrayIndex { array, index, line } => eval_array_index(array, index, *line, env),
    }
}

/// Converts a literal AST node into a runtime value. Booleans reuse the two
/// shared sentinels; literals never produce errors.
fn eval_literal(value: &LiteralValue) -> Value {
    match value {
        LiteralValue::Integer(value) => Value::Integer(*value),
        LiteralValue::Bool(value) => Value::from(*value),
        LiteralValue::Str(value) => Value::Str(value.clone()),
    }
}

/// Resolves a name.
///
/// Lookup probes the environment chain first and falls back to the builtin
/// table, so a `let` binding can shadow a builtin. A name found in neither
/// is a runtime error.
fn eval_variable(name: &str, line: usize, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(builtin) = Builtin::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }
    Err(RuntimeError::IdentifierNotFound {
        name: name.to_string(),
        line,
    })
}

/// Evaluates a list of expressions left to right into concrete values,
/// short-circuiting on the first error. Shared by array literals and call
/// arguments.
pub(in crate::interpreter::evaluator) fn eval_expressions(
    exprs: &[Expr],
    env: &Env,
) -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(exprs.len());

    for expr in exprs {
        values.push(eval_expression(expr, env)?);
    }

    Ok(values)
}
