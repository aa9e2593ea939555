//! Expansion and coercion of terms.
//!
//! Every combinator that accepts "a value or a generator of a value" goes
//! through [`expand`] or [`coerce`]. Expansion forces a generator exactly
//! once; it does not walk into the containers a generator returns, since the
//! container combinators have already expanded their own children.

use crate::context::Context;
use crate::error::GeneratorError;
use crate::values::{Array, Object, Term, Value};

/// Resolve a term to a value.
///
/// Generators are invoked with `ctx`; literals are returned unchanged.
pub fn expand(ctx: &mut Context, term: &Term) -> Result<Value, GeneratorError> {
    match term {
        Term::Literal(value) => Ok(value.clone()),
        Term::Generator(generator) => generator.call(ctx),
    }
}

/// Types a term can be coerced to.
pub trait Coerce: Sized {
    /// Kind name reported on mismatch.
    const EXPECTED: &'static str;

    /// Take the value if it has the right kind, otherwise hand it back.
    fn from_value(value: Value) -> Result<Self, Value>;
}

impl Coerce for i64 {
    const EXPECTED: &'static str = "int";

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(other),
        }
    }
}

impl Coerce for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl Coerce for Object {
    const EXPECTED: &'static str = "object";

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(obj) => Ok(obj),
            other => Err(other),
        }
    }
}

impl Coerce for Array {
    const EXPECTED: &'static str = "array";

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Array(arr) => Ok(arr),
            other => Err(other),
        }
    }
}

/// Resolve a term to a value of type `T`.
///
/// A literal of the right kind is returned as-is. A generator is invoked and
/// its result checked. Anything else is a [`GeneratorError::TypeMismatch`].
pub fn coerce<T: Coerce>(ctx: &mut Context, term: &Term) -> Result<T, GeneratorError> {
    let value = expand(ctx, term)?;
    T::from_value(value)
        .map_err(|other| GeneratorError::type_mismatch("coerce", T::EXPECTED, other.kind()))
}
