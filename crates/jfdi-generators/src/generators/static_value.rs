//! YAML to `Value` conversion for literal terms in schemas.

use jfdi_core::{Array, Object, Value};
use serde_yaml::Value as YamlValue;

/// Convert a YAML value to a `Value`.
///
/// Mapping keys that are scalars are stringified; other keys are dropped.
pub fn yaml_to_value(yaml: &YamlValue) -> Value {
    match yaml {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::String(n.to_string())
            }
        }
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => {
            let values: Array = items.iter().map(yaml_to_value).collect();
            Value::Array(values)
        }
        YamlValue::Mapping(map) => {
            let values: Object = map
                .iter()
                .filter_map(|(k, v)| Some((yaml_key(k)?, yaml_to_value(v))))
                .collect();
            Value::Object(values)
        }
        YamlValue::Tagged(tagged) => yaml_to_value(&tagged.value),
    }
}

fn yaml_key(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
