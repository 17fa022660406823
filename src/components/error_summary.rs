//! Error summary: takes focus on load and moves focus to the field a
//! summary link points at.

use crate::component::setup::{mount_root, resolve_config};
use crate::component::{Component, ComponentError};
use crate::config::{ConfigObject, Schema, SchemaProperty, SchemaType};
use crate::dom::{Dom, NodeId};

static SCHEMA: Schema = Schema::new(&[SchemaProperty::new("disableAutoFocus", SchemaType::Boolean)]);

/// Where a summary link sends the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTarget {
    /// The form control that receives focus.
    pub input: NodeId,
    /// The legend or label to bring into view with it.
    pub caption: Option<NodeId>,
}

#[derive(Debug)]
pub struct ErrorSummary {
    root: NodeId,
    disable_auto_focus: bool,
}

impl ErrorSummary {
    pub fn disable_auto_focus(&self) -> bool {
        self.disable_auto_focus
    }

    /// Links inside the summary, in document order.
    pub fn links(&self, dom: &Dom) -> Vec<NodeId> {
        dom.query_within(self.root, |data| data.tag == "a" && data.has_attribute("href"))
    }

    /// The input a link's `href` refers to, if its fragment names an element.
    pub fn link_target(&self, dom: &Dom, href: &str) -> Option<NodeId> {
        let (_, fragment) = href.split_once('#')?;
        if fragment.is_empty() {
            return None;
        }
        dom.query_by_id(fragment)
    }

    /// Follow a summary link: focus its input and report the caption to show.
    ///
    /// Returns `None` (and leaves focus alone) when the link does not point
    /// at an element on the page.
    pub fn focus_target(&self, dom: &mut Dom, href: &str) -> Option<LinkTarget> {
        let input = self.link_target(dom, href)?;
        let caption = associated_caption(dom, input);
        dom.focus(input);
        Some(LinkTarget { input, caption })
    }

    /// Undo the temporary `tabindex` once the summary loses focus.
    pub fn blur(&self, dom: &mut Dom) {
        if let Some(data) = dom.get_mut(self.root) {
            data.remove_attribute("tabindex");
        }
    }
}

/// Checkboxes and radios are captioned by their fieldset's legend; other
/// controls by their label, falling back to the legend.
fn associated_caption(dom: &Dom, input: NodeId) -> Option<NodeId> {
    let legend = dom
        .ancestors(input)
        .into_iter()
        .find(|&id| dom.get(id).is_some_and(|data| data.tag == "fieldset"))
        .and_then(|fieldset| dom.query_first_within(fieldset, |data| data.tag == "legend"));

    let input_data = dom.get(input)?;
    let grouped = matches!(input_data.attribute("type"), Some("checkbox" | "radio"));
    if grouped && legend.is_some() {
        return legend;
    }

    let for_label = input_data.id.as_deref().zip(dom.root()).and_then(|(id, root)| {
        dom.query_first_within(root, |data| data.tag == "label" && data.attribute("for") == Some(id))
    });
    for_label
        .or_else(|| {
            dom.ancestors(input)
                .into_iter()
                .find(|&id| dom.get(id).is_some_and(|data| data.tag == "label"))
        })
        .or(legend)
}

impl Component for ErrorSummary {
    const MODULE: &'static str = "kit-error-summary";
    const CONFIG_KEY: &'static str = "errorSummary";

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn defaults() -> ConfigObject {
        [("disableAutoFocus", false)].into_iter().collect()
    }

    fn new(dom: &mut Dom, root: NodeId, config: Option<&ConfigObject>) -> Result<Self, ComponentError> {
        mount_root::<Self>(dom, root)?;
        let config = resolve_config::<Self>(dom, root, config)?;
        let disable_auto_focus = config.bool_or("disableAutoFocus", false);

        if !disable_auto_focus {
            if let Some(data) = dom.get_mut(root) {
                data.set_attribute("tabindex", "-1");
            }
            dom.focus(root);
        }

        Ok(Self {
            root,
            disable_auto_focus,
        })
    }

    fn root(&self) -> NodeId {
        self.root
    }
}
