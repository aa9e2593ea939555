//! jfdi: JSON fake data inventor
//!
//! A library of declarative combinators for producing randomized,
//! heterogeneous, nested data for test fixtures and fake JSON payloads.
//!
//! # Features
//!
//! - Composition: objects, arrays and sequences nest freely, and any argument
//!   that takes a value also takes a generator of that value
//! - Reproducibility: a seeded [`Context`] yields identical output on every
//!   run, because object keys are always expanded in sorted order
//! - Depth limits: [`max_depth_object`] and [`max_depth_array`] cut off to
//!   null once the run has entered too many containers
//! - Schemas: generator trees can be described in YAML or JSON
//!   ([`TemplateSchema`])
//!
//! # Crates
//!
//! - `jfdi_core` - Value model, context, expansion protocol
//! - `jfdi_generators` - Combinators, random primitives, text, schemas
//!
//! # Example
//!
//! ```rust
//! use jfdi::{array, digits, int, object, pick, template, Context};
//!
//! let factory = object([template! {
//!     "name" => pick(["Alice", "Bob", "Carol"]),
//!     "age" => int(18, 65).unwrap(),
//!     "ssn" => digits("###-##-####"),
//!     "friends" => array(int(1, 3).unwrap(), pick(["Dan", "Eve", "Frank"])),
//! }]);
//!
//! let mut ctx = Context::with_seed(42);
//! let object = factory.call(&mut ctx).unwrap();
//! println!("{object}");
//! // e.g. {"age":42,"friends":["Eve"],"name":"Carol","ssn":"314-15-9265"}
//! ```
//!
//! Write custom generators with [`Generator::new`] when the built-in
//! combinators are not enough; the context they receive is the same one the
//! rest of the tree uses, so their draws stay reproducible.

pub use jfdi_core::{
    coerce, expand, parse_seed, template, terms, Array, Coerce, ConfigError, Context,
    ContextConfig, Generator, GeneratorError, Object, Term, Value, SEED_ENV_VAR,
};
pub use jfdi_generators::{
    array, digits, float, hex_digits, int, join, max_depth_array, max_depth_object, object,
    pick, rune_map, sentence, sentences, sequence, word, words, Corpus, DocumentGenerator,
    DocumentIterator, GeneratorConfig, LatinCorpus, Lexicon, SchemaError, TemplateSchema,
    TermConfig,
};
