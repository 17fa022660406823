//! Component schemas: declared property types and `anyOf` requirement sets.

use std::fmt;

use super::error::ConfigError;
use super::value::{ConfigObject, ConfigValue};

/// The declared type of a top-level config property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    String,
    Boolean,
    Number,
    /// A namespace: configurable through dotted dataset keys.
    Object,
}

impl SchemaType {
    /// Whether `value` is an acceptable value for this type.
    ///
    /// `Undefined` is always accepted; absence is checked by conditions.
    pub fn accepts(self, value: &ConfigValue) -> bool {
        matches!(
            (self, value),
            (_, ConfigValue::Undefined)
                | (Self::String, ConfigValue::String(_))
                | (Self::Boolean, ConfigValue::Bool(_))
                | (Self::Number, ConfigValue::Number(_))
                | (Self::Object, ConfigValue::Object(_))
        )
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Object => "object",
        })
    }
}

/// One declared top-level property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaProperty {
    pub name: &'static str,
    pub ty: SchemaType,
}

impl SchemaProperty {
    pub const fn new(name: &'static str, ty: SchemaType) -> Self {
        Self { name, ty }
    }
}

/// A set of keys that must all be present, with the message reported when
/// no condition in the schema's `any_of` list is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaCondition {
    pub required: &'static [&'static str],
    pub error_message: &'static str,
}

impl SchemaCondition {
    fn is_satisfied(&self, config: &ConfigObject) -> bool {
        self.required.iter().all(|key| {
            config
                .get(key)
                .is_some_and(|v| !matches!(v, ConfigValue::Undefined | ConfigValue::Null))
        })
    }
}

/// Static description of a component's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub properties: &'static [SchemaProperty],
    /// At least one of these must hold. Empty means no requirement.
    pub any_of: &'static [SchemaCondition],
}

impl Schema {
    /// A schema with no properties and no conditions.
    pub const EMPTY: Schema = Schema::new(&[]);

    pub const fn new(properties: &'static [SchemaProperty]) -> Self {
        Self {
            properties,
            any_of: &[],
        }
    }

    pub const fn with_any_of(self, any_of: &'static [SchemaCondition]) -> Self {
        Self {
            properties: self.properties,
            any_of,
        }
    }

    /// Declared type of a top-level property.
    pub fn property_type(&self, name: &str) -> Option<SchemaType> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.ty)
    }

    /// Check declared types and `any_of` conditions against a resolved config.
    ///
    /// Undeclared keys are not checked.
    pub fn validate(&self, config: &ConfigObject) -> Result<(), ConfigError> {
        for property in self.properties {
            if let Some(value) = config.get(property.name) {
                if !property.ty.accepts(value) {
                    return Err(ConfigError::InvalidType {
                        property: property.name,
                        expected: property.ty,
                        found: value.type_name(),
                    });
                }
            }
        }

        if self.any_of.is_empty() || self.any_of.iter().any(|c| c.is_satisfied(config)) {
            return Ok(());
        }

        Err(ConfigError::MissingRequired {
            message: self.any_of[0].error_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COUNT_SCHEMA: Schema = Schema::new(&[
        SchemaProperty::new("i18n", SchemaType::Object),
        SchemaProperty::new("maxwords", SchemaType::Number),
        SchemaProperty::new("maxlength", SchemaType::Number),
    ])
    .with_any_of(&[
        SchemaCondition {
            required: &["maxwords"],
            error_message: "Either \"maxlength\" or \"maxwords\" must be provided",
        },
        SchemaCondition {
            required: &["maxlength"],
            error_message: "Either \"maxlength\" or \"maxwords\" must be provided",
        },
    ]);

    #[test]
    fn property_type_lookup() {
        assert_eq!(COUNT_SCHEMA.property_type("i18n"), Some(SchemaType::Object));
        assert_eq!(COUNT_SCHEMA.property_type("maxwords"), Some(SchemaType::Number));
        assert_eq!(COUNT_SCHEMA.property_type("nope"), None);
    }

    #[test]
    fn any_of_satisfied_by_either() {
        let words = ConfigObject::from_json(json!({"maxwords": 10}));
        let chars = ConfigObject::from_json(json!({"maxlength": 10}));
        assert!(COUNT_SCHEMA.validate(&words).is_ok());
        assert!(COUNT_SCHEMA.validate(&chars).is_ok());
    }

    #[test]
    fn any_of_unsatisfied() {
        let config = ConfigObject::from_json(json!({"i18n": {}}));
        let err = COUNT_SCHEMA.validate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Either \"maxlength\" or \"maxwords\" must be provided"
        );
    }

    #[test]
    fn undefined_does_not_satisfy() {
        let mut config = ConfigObject::new();
        config.insert("maxlength", ConfigValue::Undefined);
        assert!(matches!(
            COUNT_SCHEMA.validate(&config),
            Err(ConfigError::MissingRequired { .. })
        ));
    }

    #[test]
    fn type_mismatch_reported() {
        let config = ConfigObject::from_json(json!({"maxlength": "ten"}));
        let err = COUNT_SCHEMA.validate(&config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidType {
                property: "maxlength",
                expected: SchemaType::Number,
                found: "string",
            }
        );
    }

    #[test]
    fn empty_schema_accepts_anything() {
        let config = ConfigObject::from_json(json!({"anything": [1, 2]}));
        assert!(Schema::EMPTY.validate(&config).is_ok());
    }
}
