//! Config values: ConfigValue (tagged union) and ConfigObject (ordered nested map).

use std::fmt;

use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// ConfigValue
// ---------------------------------------------------------------------------

/// A single configuration value.
///
/// Values coerced from a dataset are only ever `Bool`, `Number`, `String` or
/// `Undefined`. `Null`, `Array` and `Object` arrive from caller-supplied config.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfigValue {
    /// Explicitly unset. Still occupies its key when merged.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Arrays are leaves: never walked when flattening.
    Array(Vec<ConfigValue>),
    Object(ConfigObject),
}

impl ConfigValue {
    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ConfigObject> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Build a value from a JSON document.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Undefined, Self::Number),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for ConfigValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<ConfigObject> for ConfigValue {
    fn from(obj: ConfigObject) -> Self {
        Self::Object(obj)
    }
}

impl From<serde_json::Value> for ConfigValue {
    fn from(value: serde_json::Value) -> Self {
        Self::from_json(value)
    }
}

/// Format a number the way the web platform prints it: integral values
/// without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(obj) => write!(f, "{obj}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigObject
// ---------------------------------------------------------------------------

/// An insertion-ordered, possibly nested configuration object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigObject(IndexMap<String, ConfigValue>);

impl ConfigObject {
    /// Create an empty object.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Build an object from a JSON document. Anything other than a JSON
    /// object yields an empty config.
    pub fn from_json(value: serde_json::Value) -> Self {
        match ConfigValue::from_json(value) {
            ConfigValue::Object(obj) => obj,
            _ => Self::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    /// Look up a dot-separated path through nested objects.
    pub fn get_path(&self, path: &str) -> Option<&ConfigValue> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = current.as_object()?.0.get(segment)?;
        }
        Some(current)
    }

    /// Insert a value, replacing any existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert `value` at a nested path, creating intermediate objects.
    ///
    /// Any non-object value found along the way is replaced by an empty
    /// object. An existing value at the final segment is overwritten.
    pub fn insert_path(&mut self, path: &[&str], value: ConfigValue) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut current = self;
        for segment in parents {
            let slot = current
                .0
                .entry((*segment).to_owned())
                .or_insert(ConfigValue::Undefined);
            if !slot.is_object() {
                *slot = ConfigValue::Object(ConfigObject::new());
            }
            let ConfigValue::Object(next) = slot else {
                return;
            };
            current = next;
        }
        current.0.insert((*last).to_owned(), value);
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Boolean at `key`, or `default` when absent or not a boolean.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(ConfigValue::as_bool).unwrap_or(default)
    }

    /// Number at `key`, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ConfigValue::as_f64)
    }

    /// Nested object at `key`, if present.
    pub fn object(&self, key: &str) -> Option<&ConfigObject> {
        self.get(key).and_then(ConfigValue::as_object)
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for ConfigObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}
