//! Per-invocation generation state.

use crate::values::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env::VarError;
use std::ffi::OsString;
use tracing::debug;

/// Environment variable consulted by [`ContextConfig::from_env`].
pub const SEED_ENV_VAR: &str = "JFDI_SEED";

/// Error type for context configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Seed could not be parsed as an unsigned 64-bit integer
    #[error("Invalid seed {value:?}: {source}")]
    InvalidSeed {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Seed variable is set but is not valid unicode
    #[error("Seed variable is not valid unicode: {0:?}")]
    NotUnicode(OsString),
}

/// Configuration for creating a [`Context`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Seed for the random source. `None` means a random seed per context.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ContextConfig {
    /// Create a config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Read the seed from the `JFDI_SEED` environment variable.
    ///
    /// An unset variable yields an unseeded config; a malformed one is an
    /// error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(std::env::var(SEED_ENV_VAR))
    }

    fn from_var(var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(value) => Ok(Self::seeded(parse_seed(&value)?)),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::NotUnicode(raw)),
        }
    }
}

/// Parse a seed string as written in `JFDI_SEED`.
pub fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|source| ConfigError::InvalidSeed {
            value: value.to_string(),
            source,
        })
}

/// Mutable state threaded through one generation run.
///
/// Holds a depth counter, a seeded random source and a scratch map for
/// custom generators. A context is owned by exactly one run and passed by
/// `&mut` to every generator in the tree.
///
/// The depth counter only ever grows: each depth-tracking container bumps it
/// when it starts expanding and never gives it back. It therefore counts the
/// containers entered so far in the whole run, not the nesting level of the
/// current node, and two sibling containers see different depths.
#[derive(Debug)]
pub struct Context {
    depth: usize,
    seed: u64,
    rng: StdRng,
    scratch: HashMap<String, Value>,
}

impl Context {
    /// Create a context with a random seed.
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Create a context with a fixed seed for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        debug!(seed, "Created generation context");
        Self {
            depth: 0,
            seed,
            rng: StdRng::seed_from_u64(seed),
            scratch: HashMap::new(),
        }
    }

    /// Create a context from configuration.
    pub fn from_config(config: &ContextConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Seed this context was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of depth-tracking containers entered so far.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Record entry into a depth-tracking container and return the new depth.
    pub fn enter_container(&mut self) -> usize {
        self.depth += 1;
        self.depth
    }

    /// The random source.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// User scratch space.
    pub fn scratch(&self) -> &HashMap<String, Value> {
        &self.scratch
    }

    /// Mutable user scratch space.
    pub fn scratch_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.scratch
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
