//! Combinators and random primitives.
//!
//! Every constructor here returns a [`jfdi_core::Generator`]; nothing is
//! evaluated until the generator is called with a context.

pub mod array;
pub mod numeric;
pub mod object;
pub mod pattern;
pub mod pick;
pub mod static_value;
pub mod text;

pub use array::{array, max_depth_array, sequence};
pub use numeric::{float, int};
pub use object::{max_depth_object, object};
pub use pattern::{digits, hex_digits, rune_map};
pub use pick::pick;
pub use text::{join, sentence, sentences, word, words, Lexicon};

use jfdi_core::{Array, Context, GeneratorError};
use tracing::{debug, trace};

/// Record entry into a depth-tracking container.
///
/// Returns `false` when the new depth is past `max_depth`, in which case the
/// container must return null without doing any further work. A `max_depth`
/// of 0 never cuts off.
pub(crate) fn enter_container(ctx: &mut Context, max_depth: usize, kind: &'static str) -> bool {
    let depth = ctx.enter_container();
    if max_depth > 0 && depth > max_depth {
        debug!(kind, depth, max_depth, "Depth limit exceeded, returning null");
        return false;
    }
    trace!(kind, depth, "Expanding container");
    true
}

/// Reserve room for `len` elements, failing instead of aborting when the
/// allocation cannot be made.
pub(crate) fn reserve_array(len: usize, what: &str) -> Result<Array, GeneratorError> {
    Array::try_with_capacity(len).map_err(|e| {
        GeneratorError::invalid_argument(format!("{what} {len} cannot be allocated: {e}"))
    })
}
