//! Lexical environments.
//!
//! 词法环境：每个帧持有自己的绑定，并共享外层帧的引用。

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{Error, Result, Value};

/// A chain of binding frames. Cloning shares the frame; closures keep
/// their defining frame alive by holding a clone.
#[derive(Clone, Debug, Default)]
pub struct Env {
    bindings: Rc<RefCell<HashMap<Rc<str>, Value>>>,
    parent: Option<Rc<Env>>,
}

impl Env {
    /// Create a new empty root frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a root frame pre-populated with `bindings`.
    pub fn with_bindings<'a>(bindings: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        let env = Self::new();
        for (name, value) in bindings {
            env.bind(name, value);
        }
        env
    }

    /// Create an empty child frame.
    pub fn child(&self) -> Self {
        Self {
            bindings: Rc::default(),
            parent: Some(Rc::new(self.clone())),
        }
    }

    /// Create a child frame binding each parameter symbol to the argument
    /// at the same position.
    pub fn with_params(&self, params: &[Value], args: &[Value]) -> Result<Self> {
        if params.len() != args.len() {
            return Err(Error::type_error(format!(
                "expected {} args, but {} were given",
                params.len(),
                args.len()
            )));
        }
        let env = self.child();
        for (param, arg) in params.iter().zip(args) {
            let name = param.as_symbol().ok_or_else(|| {
                Error::type_error(format!("parameter must be a symbol, got {}", param.type_name()))
            })?;
            env.bind(name, arg.clone());
        }
        Ok(env)
    }

    /// Insert or overwrite a binding in this frame only.
    pub fn bind(&self, name: &str, value: Value) {
        self.bindings.borrow_mut().insert(Rc::from(name), value);
    }

    /// Look up a binding, innermost frame first.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut frame = self;
        loop {
            if let Some(value) = frame.bindings.borrow().get(name) {
                return Some(value.clone());
            }
            frame = frame.parent.as_deref()?;
        }
    }

    /// Like [`Env::get`], failing with NotFound for an unbound symbol.
    pub fn lookup(&self, name: &str) -> Result<Value> {
        self.get(name)
            .ok_or_else(|| Error::not_found(format!("'{name}' not found")))
    }

    /// Is `name` bound in this frame (ignoring outer frames)?
    pub fn is_local(&self, name: &str) -> bool {
        self.bindings.borrow().contains_key(name)
    }

    pub fn parent(&self) -> Option<&Env> {
        self.parent.as_deref()
    }

    /// Names bound in this frame, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.bindings.borrow().keys().map(|k| k.to_string()).collect();
        names.sort();
        names
    }
}
