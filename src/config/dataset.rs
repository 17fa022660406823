//! Dataset: the flat, ordered key/value view of an element's `data-*` attributes.

use indexmap::IndexMap;

/// Attribute prefix that marks an attribute as part of the dataset.
const DATA_PREFIX: &str = "data-";

/// Flat mapping from attribute-derived key to raw string value.
///
/// Keys may contain dots (`"i18n.showSection"`) to express nesting; the
/// dataset itself never splits them. Iteration order is attribute
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset(IndexMap<String, String>);

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Build a dataset from raw attribute `(name, value)` pairs.
    ///
    /// Attributes without the `data-` prefix are ignored. Names are converted
    /// with [`attribute_to_key`].
    pub fn from_attributes<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut dataset = Self::new();
        for (name, value) in attributes {
            if let Some(key) = attribute_to_key(name) {
                dataset.insert(key, value);
            }
        }
        dataset
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Convert a `data-*` attribute name into its dataset key.
///
/// Strips the `data-` prefix, then removes every `-` that is followed by an
/// ASCII lowercase letter and uppercases that letter:
/// `data-prevent-double-click` becomes `preventDoubleClick`,
/// `data-i18n.show-all-sections` becomes `i18n.showAllSections`.
///
/// Returns `None` for names that are not dataset attributes.
pub fn attribute_to_key(name: &str) -> Option<String> {
    let rest = name.strip_prefix(DATA_PREFIX)?;
    let mut key = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(ch) = chars.next() {
        match (ch, chars.peek()) {
            ('-', Some(next)) if next.is_ascii_lowercase() => {
                key.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => key.push(ch),
        }
    }
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_to_key_camel_cases() {
        assert_eq!(
            attribute_to_key("data-prevent-double-click").as_deref(),
            Some("preventDoubleClick")
        );
    }

    #[test]
    fn attribute_to_key_keeps_dots() {
        assert_eq!(
            attribute_to_key("data-i18n.show-all-sections").as_deref(),
            Some("i18n.showAllSections")
        );
    }

    #[test]
    fn attribute_to_key_leaves_dash_before_non_lowercase() {
        assert_eq!(attribute_to_key("data-foo--bar").as_deref(), Some("foo-Bar"));
        assert_eq!(attribute_to_key("data-item-1").as_deref(), Some("item-1"));
        assert_eq!(attribute_to_key("data-trailing-").as_deref(), Some("trailing-"));
    }

    #[test]
    fn attribute_to_key_rejects_non_data() {
        assert_eq!(attribute_to_key("aria-label"), None);
        assert_eq!(attribute_to_key("class"), None);
    }

    #[test]
    fn from_attributes_filters_and_orders() {
        let dataset = Dataset::from_attributes([
            ("class", "kit-button"),
            ("data-module", "kit-button"),
            ("data-prevent-double-click", "true"),
        ]);
        let keys: Vec<_> = dataset.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["module", "preventDoubleClick"]);
        assert_eq!(dataset.get("preventDoubleClick"), Some("true"));
    }

    #[test]
    fn later_insert_overwrites_in_place() {
        let mut dataset: Dataset = [("a", "1"), ("b", "2")].into_iter().collect();
        dataset.insert("a", "3");
        let entries: Vec<_> = dataset.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }
}
