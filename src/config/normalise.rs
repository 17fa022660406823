//! String and dataset normalisation.
//!
//! Dataset values are always strings. [`normalise_string`] turns them into
//! booleans or numbers where they unambiguously look like one, and leaves
//! everything else alone. [`normalise_dataset_with_schema`] is the typed
//! variant used when a component resolves its config.

use super::dataset::Dataset;
use super::extract::extract_config_by_namespace;
use super::number::parse_numeric_literal;
use super::schema::{Schema, SchemaType};
use super::value::{ConfigObject, ConfigValue};

/// Trim whitespace the way the web platform does, byte order mark included.
fn trim_web(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Coerce a raw string into a boolean, a number, or the original string.
///
/// - trimmed `"true"` / `"false"` become booleans;
/// - a trimmed, non-empty, finite numeric literal becomes a number;
/// - anything else is returned untrimmed.
pub fn normalise_string(value: &str) -> ConfigValue {
    let trimmed = trim_web(value);
    match trimmed {
        "true" => ConfigValue::Bool(true),
        "false" => ConfigValue::Bool(false),
        _ => match parse_numeric_literal(trimmed) {
            Some(n) => ConfigValue::Number(n),
            None => ConfigValue::String(value.to_owned()),
        },
    }
}

/// Normalise a value that may or may not be a string.
///
/// Non-string values pass through unchanged, so normalising twice is a no-op.
pub fn normalise(value: ConfigValue) -> ConfigValue {
    match value {
        ConfigValue::String(s) => normalise_string(&s),
        other => other,
    }
}

/// Coerce a raw string to a declared schema type.
///
/// `String` keeps the raw value, `Boolean` is true only for trimmed `"true"`,
/// `Number` yields `Undefined` when the value is not a finite numeric
/// literal. `Object` values cannot come from a single attribute and fall back
/// to [`normalise_string`].
pub fn coerce_string(value: &str, ty: SchemaType) -> ConfigValue {
    let trimmed = trim_web(value);
    match ty {
        SchemaType::String => ConfigValue::String(value.to_owned()),
        SchemaType::Boolean => ConfigValue::Bool(trimmed == "true"),
        SchemaType::Number => {
            parse_numeric_literal(trimmed).map_or(ConfigValue::Undefined, ConfigValue::Number)
        }
        SchemaType::Object => normalise_string(value),
    }
}

/// Normalise every value of a dataset. Keys, including dotted ones, are kept
/// flat and in order.
pub fn normalise_dataset(dataset: &Dataset) -> ConfigObject {
    dataset
        .iter()
        .map(|(key, value)| (key, normalise_string(value)))
        .collect()
}

/// Normalise a dataset against a component schema.
///
/// Only declared properties are read. `Object` properties are extracted as
/// namespaces (always present, possibly empty); other properties are coerced
/// to their declared type when the dataset has them.
pub fn normalise_dataset_with_schema(schema: &Schema, dataset: &Dataset) -> ConfigObject {
    let mut out = ConfigObject::new();
    for property in schema.properties {
        if property.ty == SchemaType::Object {
            if let Some(namespace) = extract_config_by_namespace(schema, dataset, property.name) {
                out.insert(property.name, namespace);
            }
        } else if let Some(raw) = dataset.get(property.name) {
            out.insert(property.name, coerce_string(raw, property.ty));
        }
    }
    out
}
