//! Value representations for generated data.
//!
//! A [`Term`] is what callers hand to combinators: either a concrete
//! [`Value`] or a [`Generator`] that produces one. Containers hold terms, so
//! a template object may carry generators among its values until it is
//! expanded.

use crate::generator::Generator;
use serde::ser::{Error as _, Serializer};
use serde::Serialize;
use std::collections::btree_map;
use std::collections::{BTreeMap, TryReserveError};
use std::fmt;

/// A concrete value: scalar or container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null / absent value
    Null,

    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// String value
    String(String),

    /// Sequence of terms
    Array(Array),

    /// Key/term mapping
    Object(Object),
}

impl Value {
    /// Name of this value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Convert to a `serde_json::Value`.
    ///
    /// Fails if the tree still contains an unexpanded generator.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(e) => write!(f, "could not marshal value: {e}"),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond i64::MAX and all fractional numbers
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Either a concrete value or a generator that produces one.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A value that is used as-is
    Literal(Value),

    /// A generator that is invoked during expansion
    Generator(Generator),
}

impl Term {
    /// Name of this term's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(v) => v.kind(),
            Self::Generator(_) => "generator",
        }
    }

    /// Get the literal value, if this term is not a generator.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Literal(v) => Some(v),
            Self::Generator(_) => None,
        }
    }

    /// Check if this term is a generator.
    pub fn is_generator(&self) -> bool {
        matches!(self, Self::Generator(_))
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(v) => v.serialize(serializer),
            Self::Generator(_) => Err(S::Error::custom(
                "unexpanded generator cannot be serialized",
            )),
        }
    }
}

impl From<Value> for Term {
    fn from(value: Value) -> Self {
        Term::Literal(value)
    }
}

impl From<Generator> for Term {
    fn from(generator: Generator) -> Self {
        Term::Generator(generator)
    }
}

impl From<&Generator> for Term {
    fn from(generator: &Generator) -> Self {
        Term::Generator(generator.clone())
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => |$v:ident| $conv:expr),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from($v: $ty) -> Self {
                    $conv
                }
            }

            impl From<$ty> for Term {
                fn from(v: $ty) -> Self {
                    Term::Literal(Value::from(v))
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => |v| Value::Bool(v),
    i32 => |v| Value::Int(i64::from(v)),
    i64 => |v| Value::Int(v),
    u32 => |v| Value::Int(i64::from(v)),
    f32 => |v| Value::Float(f64::from(v)),
    f64 => |v| Value::Float(v),
    &str => |v| Value::String(v.to_string()),
    String => |v| Value::String(v),
    Object => |v| Value::Object(v),
    Array => |v| Value::Array(v),
}

/// A mapping from string keys to terms.
///
/// Iteration is always in lexicographic key order. Object expansion relies on
/// this to consume randomness in the same order on every run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Object(BTreeMap<String, Term>);

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, returning the previous term if one was present.
    pub fn insert(&mut self, key: impl Into<String>, term: impl Into<Term>) -> Option<Term> {
        self.0.insert(key.into(), term.into())
    }

    /// Get a term by key.
    pub fn get(&self, key: &str) -> Option<&Term> {
        self.0.get(key)
    }

    /// Get a literal value by key.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(Term::as_value)
    }

    /// Copy every entry of `other` into this object; `other` wins on collisions.
    pub fn merge(&mut self, other: Object) {
        self.0.extend(other.0);
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries in lexicographic key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Term> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render an optional object, treating an absent object as `{}`.
    pub fn stringify(object: Option<&Object>) -> String {
        object.map_or_else(|| "{}".to_string(), ToString::to_string)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(e) => write!(f, "could not marshal object: {e}"),
        }
    }
}

impl<K: Into<String>, T: Into<Term>> FromIterator<(K, T)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, t)| (k.into(), t.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Object {
    type Item = (String, Term);
    type IntoIter = btree_map::IntoIter<String, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Term);
    type IntoIter = btree_map::Iter<'a, String, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An ordered sequence of terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Array(Vec<Term>);

impl Array {
    /// Create an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Like [`Array::with_capacity`], but reports an impossible allocation
    /// instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self(items))
    }

    /// Append a term.
    pub fn push(&mut self, term: impl Into<Term>) {
        self.0.push(term.into());
    }

    /// Get a term by index.
    pub fn get(&self, index: usize) -> Option<&Term> {
        self.0.get(index)
    }

    /// Get a literal value by index.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.get(index).and_then(Term::as_value)
    }

    /// Elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.0.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render an optional array, treating an absent array as `[]`.
    pub fn stringify(array: Option<&Array>) -> String {
        array.map_or_else(|| "[]".to_string(), ToString::to_string)
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(e) => write!(f, "could not marshal array: {e}"),
        }
    }
}

impl From<Vec<Term>> for Array {
    fn from(terms: Vec<Term>) -> Self {
        Self(terms)
    }
}

impl<T: Into<Term>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Array {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
