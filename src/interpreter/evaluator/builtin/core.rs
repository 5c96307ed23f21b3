use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            builtin::{first, last, len, push, rest},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated argument values and the line number of
/// the call. It returns a value or a runtime error.
pub type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// A host-provided function callable from the language.
///
/// Builtins are entries of a fixed read-only table; the handle stored in a
/// [`Value::Builtin`] is just a copy of its table row.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    arity: usize,
    func: BuiltinFn,
}

/// Defines the builtin function table.
///
/// Each entry provides a string name, the exact number of arguments the
/// builtin accepts, and the function implementing it.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: 1, func: len::len },
    "first" => { arity: 1, func: first::first },
    "last"  => { arity: 1, func: last::last },
    "rest"  => { arity: 1, func: rest::rest },
    "push"  => { arity: 2, func: push::push },
}

impl Builtin {
    /// Looks up a builtin by name.
    ///
    /// The evaluator consults the table only after the environment chain
    /// failed to resolve the name, so a `let` binding can shadow a builtin.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::evaluator::builtin::core::Builtin;
    ///
    /// assert!(Builtin::lookup("len").is_some());
    /// assert!(Builtin::lookup("map").is_none());
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTIN_TABLE
            .iter()
            .find(|builtin| builtin.name == name)
            .copied()
    }

    /// The builtin's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Validates the argument count and invokes the host function.
    ///
    /// # Errors
    /// Returns `WrongNumberOfArguments` on an arity mismatch, or whatever
    /// error the builtin itself raises.
    pub fn call(&self, args: &[Value], line: usize) -> EvalResult<Value> {
        if args.len() != self.arity {
            return Err(RuntimeError::WrongNumberOfArguments {
                got: args.len(),
                want: self.arity,
                line,
            });
        }
        (self.func)(args, line)
    }
}
