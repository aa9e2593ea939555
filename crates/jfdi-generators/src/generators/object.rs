//! Object generators.

use super::enter_container;
use jfdi_core::{coerce, expand, Generator, Object, Term, Value};

const ARGUMENTS_CONTEXT: &str = "arguments must be objects or generators of objects";

/// Generate an object by merging `templates` and expanding each value.
///
/// Equivalent to [`max_depth_object`] with no depth limit.
pub fn object<I>(templates: I) -> Generator
where
    I: IntoIterator,
    I::Item: Into<Term>,
{
    max_depth_object(0, templates)
}

/// Generate an object, or null once the context depth exceeds `max_depth`.
///
/// Each template must be an [`Object`] or a generator of one. Templates are
/// merged in order with later keys winning, then every value is expanded in
/// lexicographic key order so a seeded context always draws randomness in
/// the same sequence. A `max_depth` of 0 means unlimited.
pub fn max_depth_object<I>(max_depth: usize, templates: I) -> Generator
where
    I: IntoIterator,
    I::Item: Into<Term>,
{
    let templates: Vec<Term> = templates.into_iter().map(Into::into).collect();
    Generator::new(move |ctx| {
        if !enter_container(ctx, max_depth, "object") {
            return Ok(Value::Null);
        }

        let mut model = Object::new();
        for template in &templates {
            let resolved = coerce::<Object>(ctx, template)
                .map_err(|e| e.within(ARGUMENTS_CONTEXT))?;
            model.merge(resolved);
        }

        let mut output = Object::new();
        for (key, term) in &model {
            output.insert(key.clone(), expand(ctx, term)?);
        }
        Ok(Value::Object(output))
    })
}
