//! The generator handle.

use crate::context::Context;
use crate::error::GeneratorError;
use crate::values::Value;
use std::fmt;
use std::sync::Arc;

type GeneratorFn = dyn Fn(&mut Context) -> Result<Value, GeneratorError> + Send + Sync;

/// A function from a [`Context`] to a [`Value`].
///
/// Generators close over whatever literals and sub-generators they were built
/// from and never hold a context themselves. Cloning is cheap: clones share
/// the same underlying function, so one template can appear in many places of
/// a tree or be handed to several threads, each with its own context.
#[derive(Clone)]
pub struct Generator(Arc<GeneratorFn>);

impl Generator {
    /// Wrap a context-consuming function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Context) -> Result<Value, GeneratorError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Wrap a callback that ignores the context and cannot fail.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::new(move |_| Ok(f()))
    }

    /// A generator that always returns a copy of `value`.
    pub fn constant(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(move |_| Ok(value.clone()))
    }

    /// Invoke the generator against an existing context.
    pub fn call(&self, ctx: &mut Context) -> Result<Value, GeneratorError> {
        (self.0)(ctx)
    }

    /// Invoke the generator against a freshly created, randomly seeded context.
    pub fn generate(&self) -> Result<Value, GeneratorError> {
        let mut ctx = Context::new();
        self.call(&mut ctx)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Generator(..)")
    }
}

/// Two generators are equal when they share the same underlying function.
impl PartialEq for Generator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
