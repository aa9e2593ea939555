//! Generators for the jfdi fake data framework.
//!
//! This crate provides the combinators that turn small building blocks into
//! nested, randomized documents, plus a [`DocumentGenerator`] for producing
//! many reproducible documents from one template.
//!
//! # Architecture
//!
//! ```text
//! object / array / sequence ──┐
//! pick / int / float         ─┼──► Generator ──► call(&mut Context) ──► Value
//! digits / hex_digits / text ─┘                      │
//!                                                    ├─ depth (monotonic)
//!                                                    ├─ rng (StdRng, seeded)
//!                                                    └─ scratch
//! ```
//!
//! # Example
//!
//! ```rust
//! use jfdi_core::{template, Context};
//! use jfdi_generators::{array, digits, int, object, pick};
//!
//! let factory = object([template! {
//!     "name" => pick(["Alice", "Bob", "Carol"]),
//!     "age" => int(18, 65).unwrap(),
//!     "ssn" => digits("###-##-####"),
//!     "friends" => array(int(1, 3).unwrap(), pick(["Dan", "Eve", "Frank"])),
//! }]);
//!
//! let mut ctx = Context::with_seed(42);
//! let person = factory.call(&mut ctx).unwrap();
//! println!("{person}");
//! ```
//!
//! # Generators
//!
//! - `object` / `max_depth_object` - Merge templates, expand values in key order
//! - `array` / `max_depth_array` - Repeat one element model
//! - `sequence` - One model per position
//! - `pick` - Uniform choice among terms
//! - `int` / `float` - Uniform numeric ranges
//! - `digits` / `hex_digits` / `rune_map` - Templated strings
//! - `word` / `words` / `sentence` / `sentences` / `join` - Text

pub mod corpus;
pub mod generator;
pub mod generators;
pub mod schema;

// Re-exports for convenience
pub use corpus::{Corpus, LatinCorpus};
pub use generator::{DocumentGenerator, DocumentIterator};
pub use generators::{
    array, digits, float, hex_digits, int, join, max_depth_array, max_depth_object, object,
    pick, rune_map, sentence, sentences, sequence, word, words, Lexicon,
};
pub use schema::{GeneratorConfig, SchemaError, TemplateSchema, TermConfig};
