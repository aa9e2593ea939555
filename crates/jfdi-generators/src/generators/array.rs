//! Array value generators.

use super::{enter_container, reserve_array};
use jfdi_core::{coerce, expand, Array, Generator, GeneratorError, Term, Value};

/// Generate an array of `length` elements, each expanded from `element`.
///
/// Equivalent to [`max_depth_array`] with no depth limit.
pub fn array(length: impl Into<Term>, element: impl Into<Term>) -> Generator {
    max_depth_array(0, length, element)
}

/// Generate an array, or null once the context depth exceeds `max_depth`.
///
/// `length` must be a non-negative integer or a generator of one. The element
/// model is expanded independently for every index, so a random model yields
/// independently drawn elements. A `max_depth` of 0 means unlimited.
pub fn max_depth_array(
    max_depth: usize,
    length: impl Into<Term>,
    element: impl Into<Term>,
) -> Generator {
    let length = length.into();
    let element = element.into();
    Generator::new(move |ctx| {
        if !enter_container(ctx, max_depth, "array") {
            return Ok(Value::Null);
        }

        let n = coerce::<i64>(ctx, &length).map_err(|e| e.within("array length"))?;
        let n = usize::try_from(n).map_err(|_| {
            GeneratorError::invalid_argument(format!(
                "array length must be non-negative, got {n}"
            ))
        })?;

        let mut output = reserve_array(n, "array length")?;
        for _ in 0..n {
            output.push(expand(ctx, &element)?);
        }
        Ok(Value::Array(output))
    })
}

/// Generate an array with one independently modelled element per position.
///
/// Counts as one container for the context depth but has no cutoff of its
/// own.
pub fn sequence<I>(elements: I) -> Generator
where
    I: IntoIterator,
    I::Item: Into<Term>,
{
    let elements: Vec<Term> = elements.into_iter().map(Into::into).collect();
    Generator::new(move |ctx| {
        enter_container(ctx, 0, "sequence");

        let mut output = Array::with_capacity(elements.len());
        for element in &elements {
            output.push(expand(ctx, element)?);
        }
        Ok(Value::Array(output))
    })
}
