//! Namespace extraction: pull one nested slice out of a flat dataset.

use super::dataset::Dataset;
use super::normalise::normalise_string;
use super::schema::{Schema, SchemaType};
use super::value::ConfigObject;

/// Extract the nested config for `namespace` from a flat dataset.
///
/// Returns `None` when the schema does not declare `namespace` as an
/// object, whatever the dataset holds. Otherwise every `namespace.`-prefixed
/// key contributes its normalised value at the path given by its remaining
/// dots (`"i18n.key2.one"` lands at `key2.one`). The shallow key equal to
/// `namespace` itself is ignored.
///
/// Keys are applied in dataset order; a later key replaces whatever an
/// earlier key left at the same path, including a leaf replacing an object
/// and the reverse.
pub fn extract_config_by_namespace(
    schema: &Schema,
    dataset: &Dataset,
    namespace: &str,
) -> Option<ConfigObject> {
    if schema.property_type(namespace) != Some(SchemaType::Object) {
        return None;
    }

    let mut extracted = ConfigObject::new();
    for (key, value) in dataset.iter() {
        let Some(path) = key
            .strip_prefix(namespace)
            .and_then(|rest| rest.strip_prefix('.'))
        else {
            continue;
        };
        let segments: Vec<&str> = path.split('.').collect();
        extracted.insert_path(&segments, normalise_string(value));
    }
    Some(extracted)
}
