//! Button: optional double-click prevention and space-key activation for
//! links styled as buttons.

use std::time::{Duration, Instant};

use crate::component::setup::{mount_root, resolve_config};
use crate::component::{Component, ComponentError};
use crate::config::{ConfigObject, Schema, SchemaProperty, SchemaType};
use crate::dom::{Dom, NodeId};

/// Clicks within this window of an accepted click are ignored when
/// `preventDoubleClick` is on.
pub const DEBOUNCE_TIMEOUT: Duration = Duration::from_secs(1);

static SCHEMA: Schema = Schema::new(&[SchemaProperty::new(
    "preventDoubleClick",
    SchemaType::Boolean,
)]);

/// Resolved button config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    pub prevent_double_click: bool,
}

/// What happened to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Accepted,
    /// Swallowed: a previous click is still within [`DEBOUNCE_TIMEOUT`].
    Debounced,
}

#[derive(Debug)]
pub struct Button {
    root: NodeId,
    config: ButtonConfig,
    debounce_until: Option<Instant>,
}

impl Button {
    pub fn config(&self) -> ButtonConfig {
        self.config
    }

    /// Register a click at `now`.
    pub fn click(&mut self, now: Instant) -> ClickOutcome {
        if !self.config.prevent_double_click {
            return ClickOutcome::Accepted;
        }
        if self.debounce_until.is_some_and(|until| now < until) {
            return ClickOutcome::Debounced;
        }
        self.debounce_until = Some(now + DEBOUNCE_TIMEOUT);
        ClickOutcome::Accepted
    }

    /// Whether a key press should be turned into a click.
    ///
    /// Only a space on an element with `role="button"` qualifies; native
    /// buttons already handle it.
    pub fn activates_on_key(&self, dom: &Dom, key: &str) -> bool {
        key == " "
            && dom
                .get(self.root)
                .is_some_and(|data| data.attribute("role") == Some("button"))
    }
}

impl Component for Button {
    const MODULE: &'static str = "kit-button";
    const CONFIG_KEY: &'static str = "button";

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn defaults() -> ConfigObject {
        [("preventDoubleClick", false)].into_iter().collect()
    }

    fn new(dom: &mut Dom, root: NodeId, config: Option<&ConfigObject>) -> Result<Self, ComponentError> {
        mount_root::<Self>(dom, root)?;
        let config = resolve_config::<Self>(dom, root, config)?;
        Ok(Self {
            root,
            config: ButtonConfig {
                prevent_double_click: config.bool_or("preventDoubleClick", false),
            },
            debounce_until: None,
        })
    }

    fn root(&self) -> NodeId {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::SUPPORTED_CLASS;
    use crate::dom::NodeData;
    use serde_json::json;

    fn page(button: NodeData) -> (Dom, NodeId) {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body").with_class(SUPPORTED_CLASS));
        let id = dom.insert_child(body, button.with_attr("data-module", Button::MODULE));
        (dom, id)
    }

    #[test]
    fn defaults_accept_every_click() {
        let (mut dom, root) = page(NodeData::new("button"));
        let mut button = Button::new(&mut dom, root, None).unwrap();
        let now = Instant::now();
        assert_eq!(button.click(now), ClickOutcome::Accepted);
        assert_eq!(button.click(now), ClickOutcome::Accepted);
    }

    #[test]
    fn markup_enables_debounce() {
        let (mut dom, root) = page(NodeData::new("button").with_attr("data-prevent-double-click", "true"));
        let mut button = Button::new(&mut dom, root, None).unwrap();
        assert!(button.config().prevent_double_click);

        let start = Instant::now();
        assert_eq!(button.click(start), ClickOutcome::Accepted);
        assert_eq!(button.click(start + Duration::from_millis(500)), ClickOutcome::Debounced);
        assert_eq!(button.click(start + DEBOUNCE_TIMEOUT), ClickOutcome::Accepted);
    }

    #[test]
    fn caller_config_enables_debounce() {
        let (mut dom, root) = page(NodeData::new("button"));
        let config = ConfigObject::from_json(json!({"preventDoubleClick": true}));
        let button = Button::new(&mut dom, root, Some(&config)).unwrap();
        assert!(button.config().prevent_double_click);
    }

    #[test]
    fn markup_overrides_caller_config() {
        let (mut dom, root) = page(NodeData::new("button").with_attr("data-prevent-double-click", "false"));
        let config = ConfigObject::from_json(json!({"preventDoubleClick": true}));
        let button = Button::new(&mut dom, root, Some(&config)).unwrap();
        assert!(!button.config().prevent_double_click);
    }

    #[test]
    fn space_activates_link_buttons_only() {
        let (mut dom, link) = page(NodeData::new("a").with_attr("role", "button"));
        let button = Button::new(&mut dom, link, None).unwrap();
        assert!(button.activates_on_key(&dom, " "));
        assert!(!button.activates_on_key(&dom, "Enter"));

        let (mut dom, native) = page(NodeData::new("button"));
        let button = Button::new(&mut dom, native, None).unwrap();
        assert!(!button.activates_on_key(&dom, " "));
    }
}
