use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::foundation::error::{MixelError, MixelResult};
use crate::script::value::Value;

/// Signature of a registered scripting function.
pub type ScriptFn = fn(&[Value]) -> MixelResult<Value>;

#[derive(Debug, Default)]
/// Instance-owned name-to-function table.
///
/// There is no process-global registration: hosts build a registry, register
/// the function sets they want, and hand it to their evaluator. Independent
/// registries coexist freely.
pub struct FuncRegistry {
    funcs: HashMap<String, ScriptFn>,
}

impl FuncRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` under `name`; a name can only be registered once.
    pub fn register(&mut self, name: impl Into<String>, f: ScriptFn) -> MixelResult<()> {
        match self.funcs.entry(name.into()) {
            Entry::Occupied(e) => Err(MixelError::bad_params(format!(
                "function '{}' is already registered",
                e.key()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(f);
                Ok(())
            }
        }
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<ScriptFn> {
        self.funcs.get(name).copied()
    }

    /// Invoke the function registered under `name`; unknown names are an
    /// error.
    pub fn call(&self, name: &str, args: &[Value]) -> MixelResult<Value> {
        let f = self
            .get(name)
            .ok_or_else(|| MixelError::bad_params(format!("unknown function '{name}'")))?;
        f(args)
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}
