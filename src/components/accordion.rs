//! Accordion: collapsible sections with a show/hide-all control.
//!
//! Each `.kit-accordion__section` needs a `.kit-accordion__section-content`
//! element. The component appends a toggle label to every section and a
//! show-all button to the root. With `rememberExpanded`, the state of each
//! section is kept in session storage under its content element's id.

use serde_json::json;

use crate::component::setup::{mount_root, resolve_config};
use crate::component::{Component, ComponentError};
use crate::config::{ConfigObject, Schema, SchemaProperty, SchemaType};
use crate::dom::{Dom, NodeData, NodeId};
use crate::i18n::I18n;

pub const SECTION_CLASS: &str = "kit-accordion__section";
pub const SECTION_EXPANDED_CLASS: &str = "kit-accordion__section--expanded";
pub const SECTION_CONTENT_CLASS: &str = "kit-accordion__section-content";
pub const SECTION_TOGGLE_CLASS: &str = "kit-accordion__section-toggle-text";
pub const SHOW_ALL_CLASS: &str = "kit-accordion__show-all";

static SCHEMA: Schema = Schema::new(&[
    SchemaProperty::new("i18n", SchemaType::Object),
    SchemaProperty::new("rememberExpanded", SchemaType::Boolean),
]);

/// Translated labels, resolved once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionLabels {
    pub hide_all_sections: String,
    pub hide_section: String,
    pub hide_section_aria_label: String,
    pub show_all_sections: String,
    pub show_section: String,
    pub show_section_aria_label: String,
}

impl AccordionLabels {
    fn translate(i18n: &I18n) -> Result<Self, ComponentError> {
        Ok(Self {
            hide_all_sections: i18n.t("hideAllSections", None)?,
            hide_section: i18n.t("hideSection", None)?,
            hide_section_aria_label: i18n.t("hideSectionAriaLabel", None)?,
            show_all_sections: i18n.t("showAllSections", None)?,
            show_section: i18n.t("showSection", None)?,
            show_section_aria_label: i18n.t("showSectionAriaLabel", None)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Section {
    node: NodeId,
    content: NodeId,
    toggle: NodeId,
}

#[derive(Debug)]
pub struct Accordion {
    root: NodeId,
    remember_expanded: bool,
    labels: AccordionLabels,
    sections: Vec<Section>,
    show_all: NodeId,
}

impl Accordion {
    pub fn labels(&self) -> &AccordionLabels {
        &self.labels
    }

    pub fn remember_expanded(&self) -> bool {
        self.remember_expanded
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// The show/hide-all button element.
    pub fn show_all_button(&self) -> NodeId {
        self.show_all
    }

    pub fn is_expanded(&self, dom: &Dom, index: usize) -> bool {
        self.sections
            .get(index)
            .and_then(|s| dom.get(s.node))
            .is_some_and(|data| data.has_class(SECTION_EXPANDED_CLASS))
    }

    pub fn all_expanded(&self, dom: &Dom) -> bool {
        (0..self.sections.len()).all(|i| self.is_expanded(dom, i))
    }

    /// Expand or collapse one section. Returns `false` for an unknown index.
    pub fn set_expanded(&self, dom: &mut Dom, index: usize, expanded: bool) -> bool {
        let Some(section) = self.sections.get(index).copied() else {
            return false;
        };
        self.apply_section_state(dom, section, expanded);
        self.store_state(dom, section, expanded);
        self.update_show_all(dom);
        true
    }

    /// Flip one section. Returns the new state, or `None` for an unknown index.
    pub fn toggle_section(&self, dom: &mut Dom, index: usize) -> Option<bool> {
        let expanded = !self.is_expanded(dom, index);
        self.set_expanded(dom, index, expanded).then_some(expanded)
    }

    /// The show-all control: expand everything unless everything is already
    /// expanded, in which case collapse everything.
    pub fn toggle_all(&self, dom: &mut Dom) {
        let expand = !self.all_expanded(dom);
        for section in &self.sections {
            self.apply_section_state(dom, *section, expand);
            self.store_state(dom, *section, expand);
        }
        self.update_show_all(dom);
    }

    fn apply_section_state(&self, dom: &mut Dom, section: Section, expanded: bool) {
        if let Some(data) = dom.get_mut(section.node) {
            data.set_class(SECTION_EXPANDED_CLASS, expanded);
        }
        if let Some(content) = dom.get_mut(section.content) {
            if expanded {
                content.remove_attribute("hidden");
            } else {
                content.set_attribute("hidden", "until-found");
            }
        }
        if let Some(toggle) = dom.get_mut(section.toggle) {
            let (text, aria) = if expanded {
                (&self.labels.hide_section, &self.labels.hide_section_aria_label)
            } else {
                (&self.labels.show_section, &self.labels.show_section_aria_label)
            };
            toggle.text = text.clone();
            toggle.set_attribute("aria-label", aria.as_str());
            toggle.set_attribute("aria-expanded", expanded.to_string());
        }
    }

    fn store_state(&self, dom: &mut Dom, section: Section, expanded: bool) {
        if !self.remember_expanded {
            return;
        }
        if let Some(id) = dom.get(section.content).and_then(|c| c.id.clone()) {
            dom.session_storage_mut().insert(id, expanded.to_string());
        }
    }

    fn stored_state(dom: &Dom, content: NodeId) -> Option<bool> {
        let id = dom.get(content)?.id.as_deref()?;
        match dom.session_storage().get(id)?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn update_show_all(&self, dom: &mut Dom) {
        let all = self.all_expanded(dom);
        if let Some(button) = dom.get_mut(self.show_all) {
            button.text = if all {
                self.labels.hide_all_sections.clone()
            } else {
                self.labels.show_all_sections.clone()
            };
            button.set_attribute("aria-expanded", all.to_string());
        }
    }
}

impl Component for Accordion {
    const MODULE: &'static str = "kit-accordion";
    const CONFIG_KEY: &'static str = "accordion";

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn defaults() -> ConfigObject {
        ConfigObject::from_json(json!({
            "i18n": {
                "hideAllSections": "Hide all sections",
                "hideSection": "Hide",
                "hideSectionAriaLabel": "Hide this section",
                "showAllSections": "Show all sections",
                "showSection": "Show",
                "showSectionAriaLabel": "Show this section",
            },
            "rememberExpanded": true,
        }))
    }

    fn new(dom: &mut Dom, root: NodeId, config: Option<&ConfigObject>) -> Result<Self, ComponentError> {
        mount_root::<Self>(dom, root)?;
        let config = resolve_config::<Self>(dom, root, config)?;

        let section_nodes = dom.query_within(root, |data| data.has_class(SECTION_CLASS));
        if section_nodes.is_empty() {
            return Err(ComponentError::missing(
                Self::MODULE,
                format!("Sections (`.{SECTION_CLASS}`)"),
            ));
        }

        let i18n = I18n::new(
            config.object("i18n").unwrap_or(&ConfigObject::new()),
            dom.closest_attribute(root, "lang"),
        );
        let labels = AccordionLabels::translate(&i18n)?;
        let remember_expanded = config.bool_or("rememberExpanded", true);

        let mut sections = Vec::with_capacity(section_nodes.len());
        let mut initial = Vec::with_capacity(section_nodes.len());
        for node in section_nodes {
            let content = dom
                .query_first_within(node, |data| data.has_class(SECTION_CONTENT_CLASS))
                .ok_or_else(|| {
                    ComponentError::missing(
                        Self::MODULE,
                        format!("Section content (`.{SECTION_CONTENT_CLASS}`)"),
                    )
                })?;
            let remembered = remember_expanded
                .then(|| Self::stored_state(dom, content))
                .flatten();
            let marked = dom
                .get(node)
                .is_some_and(|data| data.has_class(SECTION_EXPANDED_CLASS));
            initial.push(remembered.unwrap_or(marked));

            let toggle = dom.insert_child(node, NodeData::new("span").with_class(SECTION_TOGGLE_CLASS));
            sections.push(Section {
                node,
                content,
                toggle,
            });
        }

        let show_all = dom.insert_child(
            root,
            NodeData::new("button")
                .with_class(SHOW_ALL_CLASS)
                .with_attr("type", "button"),
        );

        let accordion = Self {
            root,
            remember_expanded,
            labels,
            sections,
            show_all,
        };
        for (section, expanded) in accordion.sections.iter().zip(initial) {
            accordion.apply_section_state(dom, *section, expanded);
        }
        accordion.update_show_all(dom);
        Ok(accordion)
    }

    fn root(&self) -> NodeId {
        self.root
    }
}
