//! Core types for the jfdi fake data framework.
//!
//! This crate provides the foundational types every generator builds on:
//!
//! - [`Value`] - Concrete generated values (scalars, [`Object`], [`Array`])
//! - [`Term`] - Either a literal [`Value`] or a [`Generator`]
//! - [`Generator`] - A shareable function from [`Context`] to [`Value`]
//! - [`Context`] - Depth counter, seeded random source and scratch space
//! - [`expand`] / [`coerce`] - The resolution protocol used by combinators
//!
//! # Architecture
//!
//! ```text
//! jfdi-core (this crate)
//!    │
//!    ├─── jfdi-generators  (combinators and random primitives)
//!    │
//!    └─── jfdi             (facade re-exporting both)
//! ```
//!
//! # Example
//!
//! ```rust
//! use jfdi_core::{expand, template, Context, Generator, Term, Value};
//!
//! let answer = Generator::from_fn(|| Value::Int(42));
//! let object = template! { "answer" => answer.clone(), "name" => "deep thought" };
//!
//! let mut ctx = Context::with_seed(7);
//! let resolved = expand(&mut ctx, &Term::from(answer)).unwrap();
//! assert_eq!(resolved, Value::Int(42));
//! assert_eq!(object.len(), 2);
//! ```

pub mod context;
pub mod error;
pub mod expand;
pub mod generator;
pub mod values;

// Re-exports for convenience
pub use context::{parse_seed, ConfigError, Context, ContextConfig, SEED_ENV_VAR};
pub use error::GeneratorError;
pub use expand::{coerce, expand, Coerce};
pub use generator::Generator;
pub use values::{Array, Object, Term, Value};

/// Build a `Vec<Term>` from heterogeneous items.
///
/// ```rust
/// use jfdi_core::{terms, Generator, Value};
///
/// let items = terms![1, "two", Generator::from_fn(|| Value::Null)];
/// assert_eq!(items.len(), 3);
/// ```
#[macro_export]
macro_rules! terms {
    () => {
        ::std::vec::Vec::<$crate::Term>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Term::from($item)),+]
    };
}

/// Build an [`Object`] literal from `key => term` pairs.
///
/// Later pairs overwrite earlier ones with the same key.
#[macro_export]
macro_rules! template {
    () => {
        $crate::Object::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::Object::new();
        $(
            object.insert($key, $value);
        )+
        object
    }};
}
