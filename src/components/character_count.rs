//! Character count: live feedback on how much of a length limit is used.
//!
//! The limit is either `maxlength` (characters) or `maxwords` (whitespace
//! separated words); `maxwords` wins when both are set. Limits given in
//! markup replace both caller-supplied limits.

use serde_json::json;

use crate::component::setup::{dataset_config, merge_validated, mount_root};
use crate::component::{Component, ComponentError};
use crate::config::{ConfigObject, ConfigValue, Schema, SchemaCondition, SchemaProperty, SchemaType};
use crate::dom::{Dom, NodeData, NodeId};
use crate::i18n::I18n;

pub const FIELD_CLASS: &str = "kit-js-character-count";
pub const FIELD_ERROR_CLASS: &str = "kit-textarea--error";
pub const STATUS_CLASS: &str = "kit-character-count__status";
pub const STATUS_DISABLED_CLASS: &str = "kit-character-count__status--disabled";
pub const STATUS_ERROR_CLASS: &str = "kit-error-message";
pub const STATUS_HINT_CLASS: &str = "kit-hint";

static SCHEMA: Schema = Schema::new(&[
    SchemaProperty::new("i18n", SchemaType::Object),
    SchemaProperty::new("maxwords", SchemaType::Number),
    SchemaProperty::new("maxlength", SchemaType::Number),
    SchemaProperty::new("threshold", SchemaType::Number),
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

/// What is being counted, and the limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountLimit {
    Characters(f64),
    Words(f64),
}

impl CountLimit {
    pub fn max(self) -> f64 {
        match self {
            Self::Characters(max) | Self::Words(max) => max,
        }
    }

    /// Count `text` in this limit's unit.
    pub fn count(self, text: &str) -> usize {
        match self {
            Self::Characters(_) => text.chars().count(),
            Self::Words(_) => text.split_whitespace().count(),
        }
    }

    fn message_prefix(self) -> &'static str {
        match self {
            Self::Characters(_) => "characters",
            Self::Words(_) => "words",
        }
    }
}

/// Result of recounting the field.
#[derive(Debug, Clone, PartialEq)]
pub struct CountStatus {
    pub count: usize,
    /// Negative when over the limit.
    pub remaining: f64,
    pub over_limit: bool,
    /// Whether the status message is shown (the threshold has been reached).
    pub visible: bool,
    pub message: String,
}

#[derive(Debug)]
pub struct CharacterCount {
    root: NodeId,
    field: NodeId,
    status: NodeId,
    limit: CountLimit,
    threshold: f64,
    i18n: I18n,
}

impl CharacterCount {
    pub fn limit(&self) -> CountLimit {
        self.limit
    }

    /// Threshold as a percentage of the limit.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn field(&self) -> NodeId {
        self.field
    }

    pub fn status_element(&self) -> NodeId {
        self.status
    }

    /// Whether a count reaches the visibility threshold.
    pub fn is_over_threshold(&self, count: usize) -> bool {
        self.limit.max() * self.threshold / 100.0 <= count as f64
    }

    /// The message for `remaining` units left.
    pub fn format_count_message(&self, remaining: f64) -> Result<String, ComponentError> {
        let prefix = self.limit.message_prefix();
        let message = if remaining == 0.0 {
            self.i18n.t(&format!("{prefix}AtLimit"), None)?
        } else if remaining < 0.0 {
            self.i18n.t_count(&format!("{prefix}OverLimit"), remaining.abs())?
        } else {
            self.i18n.t_count(&format!("{prefix}UnderLimit"), remaining)?
        };
        Ok(message)
    }

    /// Set the field's value to `text` and refresh the status element.
    pub fn update(&self, dom: &mut Dom, text: &str) -> Result<CountStatus, ComponentError> {
        let count = self.limit.count(text);
        let remaining = self.limit.max() - count as f64;
        let over_limit = remaining < 0.0;
        let visible = self.is_over_threshold(count);
        let message = self.format_count_message(remaining)?;

        if let Some(field) = dom.get_mut(self.field) {
            field.text = text.to_owned();
            field.set_class(FIELD_ERROR_CLASS, over_limit);
        }
        if let Some(status) = dom.get_mut(self.status) {
            status.text = message.clone();
            status.set_class(STATUS_ERROR_CLASS, over_limit);
            status.set_class(STATUS_HINT_CLASS, !over_limit);
            status.set_class(STATUS_DISABLED_CLASS, !visible);
        }

        Ok(CountStatus {
            count,
            remaining,
            over_limit,
            visible,
            message,
        })
    }
}

impl Component for CharacterCount {
    const MODULE: &'static str = "kit-character-count";
    const CONFIG_KEY: &'static str = "characterCount";

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn defaults() -> ConfigObject {
        ConfigObject::from_json(json!({
            "threshold": 0,
            "i18n": {
                "charactersUnderLimit": {
                    "one": "You have %{count} character remaining",
                    "other": "You have %{count} characters remaining",
                },
                "charactersAtLimit": "You have 0 characters remaining",
                "charactersOverLimit": {
                    "one": "You have %{count} character too many",
                    "other": "You have %{count} characters too many",
                },
                "wordsUnderLimit": {
                    "one": "You have %{count} word remaining",
                    "other": "You have %{count} words remaining",
                },
                "wordsAtLimit": "You have 0 words remaining",
                "wordsOverLimit": {
                    "one": "You have %{count} word too many",
                    "other": "You have %{count} words too many",
                },
            },
        }))
    }

    fn new(dom: &mut Dom, root: NodeId, config: Option<&ConfigObject>) -> Result<Self, ComponentError> {
        mount_root::<Self>(dom, root)?;

        let dataset = dataset_config::<Self>(dom, root)?;
        let mut caller = config.cloned().unwrap_or_default();
        let markup_limit = ["maxwords", "maxlength"]
            .iter()
            .any(|key| dataset.contains_key(key));
        if markup_limit {
            caller.insert("maxwords", ConfigValue::Undefined);
            caller.insert("maxlength", ConfigValue::Undefined);
        }
        let config = merge_validated::<Self>(&[&Self::defaults(), &caller, &dataset])?;

        let field = dom
            .query_first_within(root, |data| data.has_class(FIELD_CLASS))
            .ok_or_else(|| ComponentError::missing(Self::MODULE, format!("Form field (`.{FIELD_CLASS}`)")))?;
        let tag = dom.get(field).map(|data| data.tag.as_str()).unwrap_or_default();
        if tag != "textarea" && tag != "input" {
            return Err(ComponentError::Element {
                module: Self::MODULE,
                message: format!("Form field (`.{FIELD_CLASS}`) is not of type <textarea> or <input>"),
            });
        }

        let limit = match (config.number("maxwords"), config.number("maxlength")) {
            (Some(words), _) => CountLimit::Words(words),
            (None, Some(chars)) => CountLimit::Characters(chars),
            // Validation guarantees one of them.
            (None, None) => {
                return Err(ComponentError::Element {
                    module: Self::MODULE,
                    message: "no usable limit".into(),
                })
            }
        };
        let i18n = I18n::new(
            config.object("i18n").unwrap_or(&ConfigObject::new()),
            dom.closest_attribute(root, "lang"),
        );

        // The native limit would stop input before the count can go negative.
        if let Some(data) = dom.get_mut(field) {
            data.remove_attribute("maxlength");
        }
        let status = dom.insert_child(
            root,
            NodeData::new("div")
                .with_classes([STATUS_CLASS, STATUS_HINT_CLASS])
                .with_attr("aria-live", "polite"),
        );

        let component = Self {
            root,
            field,
            status,
            limit,
            threshold: config.number("threshold").unwrap_or(0.0),
            i18n,
        };
        let initial = dom.get(field).map(|data| data.text.clone()).unwrap_or_default();
        component.update(dom, &initial)?;
        Ok(component)
    }

    fn root(&self) -> NodeId {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::SUPPORTED_CLASS;
    use crate::config::ConfigError;
    use pretty_assertions::assert_eq;

    fn page(root_attrs: &[(&str, &str)], field_tag: &str) -> (Dom, NodeId) {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body").with_class(SUPPORTED_CLASS));
        let mut root_data = NodeData::new("div").with_attr("data-module", CharacterCount::MODULE);
        for (name, value) in root_attrs {
            root_data = root_data.with_attr(*name, *value);
        }
        let root = dom.insert_child(body, root_data);
        dom.insert_child(
            root,
            NodeData::new(field_tag)
                .with_id("more-detail")
                .with_class(FIELD_CLASS)
                .with_attr("maxlength", "10"),
        );
        (dom, root)
    }

    #[test]
    fn counts_characters_from_markup_limit() {
        let (mut dom, root) = page(&[("data-maxlength", "10")], "textarea");
        let counter = CharacterCount::new(&mut dom, root, None).unwrap();
        assert_eq!(counter.limit(), CountLimit::Characters(10.0));
        assert!(!dom.get(counter.field()).unwrap().has_attribute("maxlength"));

        let status = counter.update(&mut dom, "hello").unwrap();
        assert_eq!(status.count, 5);
        assert_eq!(status.message, "You have 5 characters remaining");
        assert!(status.visible);
        assert!(!status.over_limit);
    }

    #[test]
    fn singular_and_at_limit_messages() {
        let (mut dom, root) = page(&[("data-maxlength", "5")], "textarea");
        let counter = CharacterCount::new(&mut dom, root, None).unwrap();
        assert_eq!(counter.update(&mut dom, "abcd").unwrap().message, "You have 1 character remaining");
        assert_eq!(counter.update(&mut dom, "abcde").unwrap().message, "You have 0 characters remaining");
    }

    #[test]
    fn over_limit_marks_field_and_status() {
        let (mut dom, root) = page(&[("data-maxlength", "3")], "textarea");
        let counter = CharacterCount::new(&mut dom, root, None).unwrap();
        let status = counter.update(&mut dom, "abcde").unwrap();
        assert!(status.over_limit);
        assert_eq!(status.remaining, -2.0);
        assert_eq!(status.message, "You have 2 characters too many");
        assert!(dom.get(counter.field()).unwrap().has_class(FIELD_ERROR_CLASS));
        let status_node = dom.get(counter.status_element()).unwrap();
        assert!(status_node.has_class(STATUS_ERROR_CLASS));
        assert!(!status_node.has_class(STATUS_HINT_CLASS));
    }

    #[test]
    fn maxwords_wins_over_maxlength() {
        let (mut dom, root) = page(&[("data-maxlength", "100"), ("data-maxwords", "3")], "textarea");
        let counter = CharacterCount::new(&mut dom, root, None).unwrap();
        let status = counter.update(&mut dom, "  one two\nthree four ").unwrap();
        assert_eq!(status.count, 4);
        assert_eq!(status.message, "You have 1 word too many");
    }

    #[test]
    fn threshold_hides_status_until_reached() {
        let (mut dom, root) = page(&[("data-maxlength", "10"), ("data-threshold", "50")], "textarea");
        let counter = CharacterCount::new(&mut dom, root, None).unwrap();
        assert!(!counter.update(&mut dom, "abcd").unwrap().visible);
        assert!(dom
            .get(counter.status_element())
            .unwrap()
            .has_class(STATUS_DISABLED_CLASS));
        assert!(counter.update(&mut dom, "abcde").unwrap().visible);
    }

    #[test]
    fn markup_limit_replaces_caller_limits() {
        let (mut dom, root) = page(&[("data-maxlength", "20")], "textarea");
        let caller = ConfigObject::from_json(json!({"maxwords": 2}));
        let counter = CharacterCount::new(&mut dom, root, Some(&caller)).unwrap();
        assert_eq!(counter.limit(), CountLimit::Characters(20.0));
    }

    #[test]
    fn unparseable_markup_limit_still_clears_caller_limits() {
        let (mut dom, root) = page(&[("data-maxlength", "ten")], "textarea");
        let caller = ConfigObject::from_json(json!({"maxwords": 5}));
        let err = CharacterCount::new(&mut dom, root, Some(&caller)).unwrap_err();
        assert!(matches!(
            err,
            ComponentError::Config {
                source: ConfigError::MissingRequired { .. },
                ..
            }
        ));
    }

    #[test]
    fn caller_limit_used_without_markup_limit() {
        let (mut dom, root) = page(&[], "textarea");
        let caller = ConfigObject::from_json(json!({"maxwords": 2}));
        let counter = CharacterCount::new(&mut dom, root, Some(&caller)).unwrap();
        assert_eq!(counter.limit(), CountLimit::Words(2.0));
    }

    #[test]
    fn caller_i18n_overrides_messages() {
        let (mut dom, root) = page(&[("data-maxlength", "10")], "textarea");
        let caller = ConfigObject::from_json(json!({
            "i18n": {"charactersUnderLimit": {"other": "%{count} left"}},
        }));
        let counter = CharacterCount::new(&mut dom, root, Some(&caller)).unwrap();
        assert_eq!(counter.update(&mut dom, "").unwrap().message, "10 left");
        // `one` still comes from the defaults.
        assert_eq!(
            counter.update(&mut dom, "123456789").unwrap().message,
            "You have 1 character remaining"
        );
    }

    #[test]
    fn missing_limit_is_config_error() {
        let (mut dom, root) = page(&[], "textarea");
        let err = CharacterCount::new(&mut dom, root, None).unwrap_err();
        assert_eq!(
            err,
            ComponentError::Config {
                module: "kit-character-count",
                source: ConfigError::MissingRequired {
                    message: "Either \"maxlength\" or \"maxwords\" must be provided",
                },
            }
        );
    }

    #[test]
    fn unparseable_markup_limit_is_config_error() {
        let (mut dom, root) = page(&[("data-maxlength", "ten")], "textarea");
        let caller = ConfigObject::from_json(json!({"maxlength": 10}));
        let err = CharacterCount::new(&mut dom, root, Some(&caller)).unwrap_err();
        assert!(matches!(err, ComponentError::Config { .. }));
    }

    #[test]
    fn field_must_be_textarea_or_input() {
        let (mut dom, root) = page(&[("data-maxlength", "10")], "div");
        let err = CharacterCount::new(&mut dom, root, None).unwrap_err();
        assert!(err.to_string().contains("is not of type <textarea> or <input>"));
    }
}
