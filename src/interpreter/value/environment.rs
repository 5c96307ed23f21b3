use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// Shared handle to an [`Environment`].
///
/// Environments are co-owned: the evaluator holds the current one, and every
/// closure holds the one it captured. Ancestors stay alive for as long as any
/// descendant or closure can still reach them.
pub type Env = Rc<RefCell<Environment>>;

/// A lexically nested name-to-value binding table.
///
/// Lookup probes the local bindings first and then recurses through the
/// chain of enclosing environments. Binding always installs locally, so an
/// inner scope can shadow an outer name without touching it.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a new global (outermost) environment.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// This is the call-frame constructor: function application encloses the
    /// function's *captured* environment, never the caller's, which is what
    /// makes scoping lexical.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let global = Environment::new();
    /// global.borrow_mut().set("x", Value::Integer(1));
    ///
    /// let local = Environment::new_enclosed(&global);
    /// local.borrow_mut().set("y", Value::Integer(2));
    ///
    /// assert_eq!(local.borrow().get("x"), Some(Value::Integer(1)));
    /// assert_eq!(local.borrow().get("y"), Some(Value::Integer(2)));
    /// assert_eq!(global.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: Some(Rc::clone(outer)),
        }))
    }

    /// Looks up a name, recursing through the enclosing environments.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in this environment.
    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }
}
