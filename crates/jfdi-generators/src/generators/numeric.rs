//! Numeric value generators.

use jfdi_core::{Generator, GeneratorError, Value};
use rand::Rng;

/// Generate a random integer in `[low, high]`.
///
/// Fails immediately if `low > high`. Equal bounds give a constant generator
/// that never draws from the random source.
pub fn int(low: i64, high: i64) -> Result<Generator, GeneratorError> {
    if low > high {
        return Err(GeneratorError::invalid_argument(format!(
            "int range low ({low}) must be <= high ({high})"
        )));
    }
    if low == high {
        return Ok(Generator::constant(low));
    }
    Ok(Generator::new(move |ctx| {
        Ok(Value::Int(ctx.rng().random_range(low..=high)))
    }))
}

/// Generate a random float in `[low, high)`.
///
/// Fails immediately if `low > high`, either bound is NaN, or `high - low` is
/// not finite. Equal bounds give a constant generator that never draws from
/// the random source.
pub fn float(low: f64, high: f64) -> Result<Generator, GeneratorError> {
    if low.is_nan() || high.is_nan() || low > high {
        return Err(GeneratorError::invalid_argument(format!(
            "float range low ({low}) must be <= high ({high})"
        )));
    }
    if low == high {
        return Ok(Generator::constant(low));
    }
    let span = high - low;
    if !span.is_finite() {
        return Err(GeneratorError::invalid_argument(format!(
            "float range [{low}, {high}) is too wide"
        )));
    }
    Ok(Generator::new(move |ctx| {
        let unit: f64 = ctx.rng().random();
        Ok(Value::Float(low + span * unit))
    }))
}
