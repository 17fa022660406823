//! Config merging: flatten each source to dotted key paths and layer them.

use indexmap::IndexMap;

use super::value::{ConfigObject, ConfigValue};

/// A flat config: dot-joined key paths mapped to leaf values.
///
/// No path in a `FlatConfig` built by [`merge_configs`] is a prefix of
/// another, so [`FlatConfig::unflatten`] is unambiguous.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatConfig(IndexMap<String, ConfigValue>);

impl FlatConfig {
    /// Create an empty flat config.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&ConfigValue> {
        self.0.get(path)
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Set `path` to `value`, dropping any entry that is an ancestor or a
    /// descendant of `path`. An existing entry at `path` keeps its position.
    pub fn insert(&mut self, path: String, value: ConfigValue) {
        if !self.0.contains_key(&path) {
            self.0.retain(|existing, _| {
                !is_path_prefix(existing, &path) && !is_path_prefix(&path, existing)
            });
        }
        self.0.insert(path, value);
    }

    /// Re-nest the dotted paths into a [`ConfigObject`].
    pub fn unflatten(&self) -> ConfigObject {
        let mut nested = ConfigObject::new();
        for (path, value) in &self.0 {
            let segments: Vec<&str> = path.split('.').collect();
            nested.insert_path(&segments, value.clone());
        }
        nested
    }
}

/// Whether `prefix` is a strict ancestor of `path` (`"a"` of `"a.b"`).
fn is_path_prefix(prefix: &str, path: &str) -> bool {
    path.len() > prefix.len()
        && path.starts_with(prefix)
        && path.as_bytes()[prefix.len()] == b'.'
}

/// Flatten a nested config into dot-joined key paths.
///
/// Objects are walked; every other value, arrays and `Null` included, is a
/// leaf. Empty objects contribute nothing.
pub fn flatten(config: &ConfigObject) -> FlatConfig {
    let mut flat = FlatConfig::new();
    flatten_into(&mut flat, config, None);
    flat
}

fn flatten_into(flat: &mut FlatConfig, config: &ConfigObject, prefix: Option<&str>) {
    for (key, value) in config.iter() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.to_owned(),
        };
        match value {
            ConfigValue::Object(child) => flatten_into(flat, child, Some(path.as_str())),
            leaf => flat.insert(path, leaf.clone()),
        }
    }
}

/// Merge configs in order; the last source to set a path wins.
///
/// Sources are never modified. Zero sources give an empty result, and empty
/// sources are identities.
pub fn merge_configs<'a>(configs: impl IntoIterator<Item = &'a ConfigObject>) -> FlatConfig {
    let mut merged = FlatConfig::new();
    for config in configs {
        for (path, value) in flatten(config).0 {
            merged.insert(path, value);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: serde_json::Value) -> ConfigObject {
        ConfigObject::from_json(value)
    }

    #[test]
    fn flatten_nested() {
        let flat = flatten(&object(json!({"a": "x", "c": {"a": "camel", "d": {"e": 1}}})));
        let keys: Vec<_> = flat.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c.a", "c.d.e"]);
        assert_eq!(flat.get("c.d.e"), Some(&ConfigValue::Number(1.0)));
    }

    #[test]
    fn flatten_treats_arrays_and_null_as_leaves() {
        let flat = flatten(&object(json!({"list": [1, {"x": 2}], "none": null})));
        assert_eq!(flat.len(), 2);
        assert!(matches!(flat.get("list"), Some(ConfigValue::Array(items)) if items.len() == 2));
        assert_eq!(flat.get("none"), Some(&ConfigValue::Null));
    }

    #[test]
    fn flatten_skips_empty_objects() {
        let flat = flatten(&object(json!({"i18n": {}, "a": 1})));
        let keys: Vec<_> = flat.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a"]);
    }

    #[test]
    fn last_source_wins() {
        let a = object(json!({"a": "x", "c": {"a": "camel"}}));
        let b = object(json!({"a": "y", "c": {"a": "cat", "o": "cobra"}}));
        let merged = merge_configs([&a, &b]);
        assert_eq!(merged.get("a"), Some(&ConfigValue::from("y")));
        assert_eq!(merged.get("c.a"), Some(&ConfigValue::from("cat")));
        assert_eq!(merged.get("c.o"), Some(&ConfigValue::from("cobra")));
        assert_eq!(
            merged.unflatten(),
            object(json!({"a": "y", "c": {"a": "cat", "o": "cobra"}}))
        );
    }

    #[test]
    fn sources_not_mutated() {
        let a = object(json!({"a": "x"}));
        let b = object(json!({"a": "y"}));
        let _ = merge_configs([&a, &b]);
        assert_eq!(a, object(json!({"a": "x"})));
        assert_eq!(b, object(json!({"a": "y"})));
    }

    #[test]
    fn empty_object_is_identity() {
        let a = object(json!({"a": 1, "b": {"c": true}}));
        let empty = ConfigObject::new();
        let alone = merge_configs([&a]);
        assert_eq!(merge_configs([&a, &empty]), alone);
        assert_eq!(merge_configs([&empty, &a]), alone);
    }

    #[test]
    fn no_sources_is_empty() {
        assert!(merge_configs(std::iter::empty::<&ConfigObject>()).is_empty());
    }

    #[test]
    fn undefined_overrides_earlier_value() {
        let a = object(json!({"maxlength": 10}));
        let mut b = ConfigObject::new();
        b.insert("maxlength", ConfigValue::Undefined);
        let merged = merge_configs([&a, &b]);
        assert_eq!(merged.get("maxlength"), Some(&ConfigValue::Undefined));
    }

    #[test]
    fn later_object_replaces_earlier_leaf() {
        let a = object(json!({"i18n": "plain"}));
        let b = object(json!({"i18n": {"one": "One"}}));
        let merged = merge_configs([&a, &b]);
        assert!(!merged.contains_key("i18n"));
        assert_eq!(merged.unflatten(), object(json!({"i18n": {"one": "One"}})));
    }

    #[test]
    fn later_leaf_replaces_earlier_object() {
        let a = object(json!({"i18n": {"one": "One", "other": "Other"}}));
        let b = object(json!({"i18n": "plain"}));
        let merged = merge_configs([&a, &b]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.unflatten(), object(json!({"i18n": "plain"})));
    }

    #[test]
    fn dotted_keys_merge_with_nested_keys() {
        let a = object(json!({"i18n": {"one": "One"}}));
        let b = object(json!({"i18n.one": "Uno"}));
        let merged = merge_configs([&a, &b]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("i18n.one"), Some(&ConfigValue::from("Uno")));
    }

    #[test]
    fn overwrite_keeps_first_position() {
        let a = object(json!({"a": 1, "b": 2}));
        let b = object(json!({"a": 3}));
        let keys: Vec<_> = merge_configs([&a, &b]).iter().map(|(k, _)| k.to_owned()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn path_prefix_requires_dot_boundary() {
        assert!(is_path_prefix("a", "a.b"));
        assert!(!is_path_prefix("a", "ab"));
        assert!(!is_path_prefix("a.b", "a.b"));
        assert!(!is_path_prefix("a.b", "a"));
    }
}
