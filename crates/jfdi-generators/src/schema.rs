//! Declarative generator schemas.
//!
//! A schema describes a generator tree in YAML (or JSON) so fixtures can be
//! defined without writing Rust:
//!
//! ```yaml
//! version: 1
//! seed: 42
//! root:
//!   type: object
//!   fields:
//!     name:
//!       type: pick
//!       values: [Alice, Bob, Carol]
//!     age:
//!       type: int
//!       low: 18
//!       high: 65
//!     ssn:
//!       type: digits
//!       pattern: "###-##-####"
//!     active: true
//! ```
//!
//! Any mapping with a `type` key describes a generator; every other value is
//! a literal. Use `type: static` for a literal mapping that has its own
//! `type` key.

use crate::generators::static_value::yaml_to_value;
use crate::generators::{
    digits, float, hex_digits, int, join, max_depth_array, max_depth_object, pick, sequence,
    sentence, sentences, word, words,
};
use crate::DocumentGenerator;
use jfdi_core::{ContextConfig, Generator, GeneratorError, Object, Term};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Highest schema version this crate understands.
pub const SCHEMA_VERSION: u32 = 1;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Schema version newer than this crate
    #[error("Unsupported schema version: {0} (max {max})", max = SCHEMA_VERSION)]
    UnsupportedVersion(u32),

    /// A generator could not be constructed from its parameters
    #[error("Invalid generator: {0}")]
    Generator(#[from] GeneratorError),
}

/// Generator configuration.
///
/// One variant per combinator, selected by the `type` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Merge templates and expand every value
    Object {
        /// Depth cutoff, 0 for unlimited
        #[serde(default)]
        max_depth: usize,
        /// Templates merged first, in order
        #[serde(default)]
        templates: Vec<TermConfig>,
        /// Fields merged last
        #[serde(default)]
        fields: BTreeMap<String, TermConfig>,
    },

    /// Repeat one element model
    Array {
        /// Depth cutoff, 0 for unlimited
        #[serde(default)]
        max_depth: usize,
        /// Number of elements
        length: TermConfig,
        /// Model expanded for every element
        element: TermConfig,
    },

    /// One model per position
    Sequence {
        /// Element models in order
        elements: Vec<TermConfig>,
    },

    /// Uniform choice among values
    Pick {
        /// Candidates
        values: Vec<TermConfig>,
    },

    /// Random integer in an inclusive range
    Int {
        /// Minimum value (inclusive)
        low: i64,
        /// Maximum value (inclusive)
        high: i64,
    },

    /// Random float in a half-open range
    Float {
        /// Minimum value (inclusive)
        low: f64,
        /// Maximum value (exclusive)
        high: f64,
    },

    /// Template with `#` replaced by decimal digits
    Digits {
        /// Template string
        pattern: String,
    },

    /// Template with `#` replaced by hexadecimal digits
    HexDigits {
        /// Template string
        pattern: String,
    },

    /// A single latin word
    Word,

    /// An array of latin words
    Words {
        /// Number of words
        count: TermConfig,
    },

    /// A single latin sentence
    Sentence,

    /// An array of latin sentences
    Sentences {
        /// Number of sentences
        count: TermConfig,
    },

    /// Strings joined with a separator
    Join {
        /// Array of strings, or a generator of one
        inputs: TermConfig,
        /// Separator, defaults to a single space
        #[serde(default = "default_separator")]
        separator: TermConfig,
    },

    /// A literal value, including mappings that carry a `type` key
    Static {
        /// The value
        value: YamlValue,
    },
}

fn default_separator() -> TermConfig {
    TermConfig::Literal(YamlValue::String(" ".to_string()))
}

impl GeneratorConfig {
    /// Construct the generator this configuration describes.
    pub fn build(&self) -> Result<Generator, GeneratorError> {
        let generator = match self {
            Self::Object {
                max_depth,
                templates,
                fields,
            } => {
                let mut terms = build_all(templates)?;
                if !fields.is_empty() {
                    let mut object = Object::new();
                    for (key, field) in fields {
                        object.insert(key.clone(), field.build()?);
                    }
                    terms.push(Term::from(object));
                }
                max_depth_object(*max_depth, terms)
            }

            Self::Array {
                max_depth,
                length,
                element,
            } => max_depth_array(*max_depth, length.build()?, element.build()?),

            Self::Sequence { elements } => sequence(build_all(elements)?),

            Self::Pick { values } => pick(build_all(values)?),

            Self::Int { low, high } => int(*low, *high)?,

            Self::Float { low, high } => float(*low, *high)?,

            Self::Digits { pattern } => digits(pattern.as_str()),

            Self::HexDigits { pattern } => hex_digits(pattern.as_str()),

            Self::Word => word(),

            Self::Words { count } => words(count.build()?),

            Self::Sentence => sentence(),

            Self::Sentences { count } => sentences(count.build()?),

            Self::Join { inputs, separator } => join(inputs.build()?, separator.build()?),

            Self::Static { value } => Generator::constant(yaml_to_value(value)),
        };
        Ok(generator)
    }
}

fn build_all(configs: &[TermConfig]) -> Result<Vec<Term>, GeneratorError> {
    configs.iter().map(TermConfig::build).collect()
}

/// A term in a schema: a generator description or a literal.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TermConfig {
    /// A mapping with a `type` key
    Generator(Box<GeneratorConfig>),

    /// Any other value
    Literal(YamlValue),
}

impl TermConfig {
    /// Construct the term this configuration describes.
    pub fn build(&self) -> Result<Term, GeneratorError> {
        match self {
            Self::Generator(config) => config.build().map(Term::from),
            Self::Literal(value) => Ok(Term::from(yaml_to_value(value))),
        }
    }
}

impl<'de> Deserialize<'de> for TermConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = YamlValue::deserialize(deserializer)?;
        let is_generator = matches!(&value, YamlValue::Mapping(map) if map.contains_key("type"));
        if !is_generator {
            return Ok(Self::Literal(value));
        }
        serde_yaml::from_value(value)
            .map(|config| Self::Generator(Box::new(config)))
            .map_err(D::Error::custom)
    }
}

fn default_version() -> u32 {
    1
}

/// Full schema: optional seed plus the root generator description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,

    /// Root term
    pub root: TermConfig,
}

impl TemplateSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let schema: TemplateSchema = serde_yaml::from_str(yaml)?;
        schema.validate()
    }

    /// Parse schema from JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: TemplateSchema = serde_json::from_str(json)?;
        schema.validate()
    }

    fn validate(self) -> Result<Self, SchemaError> {
        if self.version > SCHEMA_VERSION {
            return Err(SchemaError::UnsupportedVersion(self.version));
        }
        debug!(version = self.version, seed = ?self.seed, "Loaded template schema");
        Ok(self)
    }

    /// Construct the root generator.
    pub fn build(&self) -> Result<Generator, SchemaError> {
        let generator = match self.root.build()? {
            Term::Generator(generator) => generator,
            Term::Literal(value) => Generator::constant(value),
        };
        Ok(generator)
    }

    /// Context configuration carrying the schema's seed.
    pub fn context_config(&self) -> ContextConfig {
        ContextConfig { seed: self.seed }
    }

    /// Build a document generator seeded from the schema, or from
    /// `fallback_seed` when the schema has none.
    pub fn document_generator(&self, fallback_seed: u64) -> Result<DocumentGenerator, SchemaError> {
        let seed = self.seed.unwrap_or(fallback_seed);
        Ok(DocumentGenerator::new(self.build()?, seed))
    }
}
