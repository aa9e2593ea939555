//! Uniform selection from a list of terms.

use jfdi_core::{expand, Generator, Term, Value};
use rand::Rng;

/// Choose one of `values` with uniform probability.
///
/// A chosen generator is invoked, so `pick` over generators selects among
/// their outputs. With no values the generator returns null without touching
/// the random source.
pub fn pick<I>(values: I) -> Generator
where
    I: IntoIterator,
    I::Item: Into<Term>,
{
    let values: Vec<Term> = values.into_iter().map(Into::into).collect();
    Generator::new(move |ctx| {
        if values.is_empty() {
            return Ok(Value::Null);
        }
        let idx = ctx.rng().random_range(0..values.len());
        expand(ctx, &values[idx])
    })
}
