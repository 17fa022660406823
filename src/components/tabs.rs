//! Tabs: a list of links where each link shows one panel and hides the rest.
//!
//! ```text
//! .kit-tabs                      data-module="kit-tabs"
//!   .kit-tabs__list
//!     .kit-tabs__list-item
//!       a.kit-tabs__tab          href="#panel-id"
//!   .kit-tabs__panel#panel-id
//! ```
//!
//! On narrow screens the enhancement is torn down and every panel is shown;
//! [`Tabs::set_mobile`] switches between the two.

use crate::component::setup::{mount_root, resolve_config};
use crate::component::{Component, ComponentError};
use crate::config::{ConfigObject, Schema};
use crate::dom::{Dom, NodeId};

pub const LIST_CLASS: &str = "kit-tabs__list";
pub const LIST_ITEM_CLASS: &str = "kit-tabs__list-item";
pub const LIST_ITEM_SELECTED_CLASS: &str = "kit-tabs__list-item--selected";
pub const TAB_CLASS: &str = "kit-tabs__tab";
pub const PANEL_CLASS: &str = "kit-tabs__panel";
pub const PANEL_HIDDEN_CLASS: &str = "kit-tabs__panel--hidden";

#[derive(Debug, Clone)]
struct Tab {
    link: NodeId,
    item: Option<NodeId>,
    panel: NodeId,
    panel_id: String,
}

#[derive(Debug)]
pub struct Tabs {
    root: NodeId,
    list: NodeId,
    tabs: Vec<Tab>,
    selected: Option<usize>,
    mobile: bool,
}

impl Tabs {
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Panel ids in tab order.
    pub fn panel_ids(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|tab| tab.panel_id.as_str())
    }

    /// Id of the currently shown panel. `None` in mobile mode.
    pub fn selected_panel(&self) -> Option<&str> {
        self.selected.map(|i| self.tabs[i].panel_id.as_str())
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Show the panel with id `panel_id`. Returns `false` if no tab links to
    /// it or the tabs are torn down for mobile.
    pub fn select(&mut self, dom: &mut Dom, panel_id: &str) -> bool {
        let Some(index) = self.tabs.iter().position(|tab| tab.panel_id == panel_id) else {
            return false;
        };
        self.select_index(dom, index)
    }

    /// Select the next tab, wrapping to the first.
    pub fn select_next(&mut self, dom: &mut Dom) -> Option<&str> {
        let current = self.selected?;
        let next = (current + 1) % self.tabs.len();
        self.select_index(dom, next);
        self.selected_panel()
    }

    /// Select the previous tab, wrapping to the last.
    pub fn select_previous(&mut self, dom: &mut Dom) -> Option<&str> {
        let current = self.selected?;
        let previous = current.checked_sub(1).unwrap_or(self.tabs.len() - 1);
        self.select_index(dom, previous);
        self.selected_panel()
    }

    /// Switch between the tabbed (desktop) and flat (mobile) presentation.
    pub fn set_mobile(&mut self, dom: &mut Dom, mobile: bool) {
        if mobile == self.mobile {
            return;
        }
        self.mobile = mobile;
        if mobile {
            self.teardown(dom);
        } else {
            self.setup(dom);
        }
    }

    fn select_index(&mut self, dom: &mut Dom, index: usize) -> bool {
        if self.mobile || index >= self.tabs.len() {
            return false;
        }
        if let Some(previous) = self.selected {
            self.set_tab_state(dom, previous, false);
        }
        self.set_tab_state(dom, index, true);
        self.selected = Some(index);
        dom.set_location_hash(self.tabs[index].panel_id.clone());
        true
    }

    fn set_tab_state(&self, dom: &mut Dom, index: usize, selected: bool) {
        let tab = &self.tabs[index];
        if let Some(item) = tab.item.and_then(|item| dom.get_mut(item)) {
            item.set_class(LIST_ITEM_SELECTED_CLASS, selected);
        }
        if let Some(link) = dom.get_mut(tab.link) {
            link.set_attribute("aria-selected", selected.to_string());
            link.set_attribute("tabindex", if selected { "0" } else { "-1" });
        }
        if let Some(panel) = dom.get_mut(tab.panel) {
            panel.set_class(PANEL_HIDDEN_CLASS, !selected);
        }
    }

    fn setup(&mut self, dom: &mut Dom) {
        if let Some(list) = dom.get_mut(self.list) {
            list.set_attribute("role", "tablist");
        }
        for tab in &self.tabs {
            let tab_id = format!("tab_{}", tab.panel_id);
            if let Some(item) = tab.item.and_then(|item| dom.get_mut(item)) {
                item.set_attribute("role", "presentation");
                item.remove_class(LIST_ITEM_SELECTED_CLASS);
            }
            if let Some(link) = dom.get_mut(tab.link) {
                link.id = Some(tab_id.clone());
                link.set_attribute("role", "tab");
                link.set_attribute("aria-controls", tab.panel_id.as_str());
                link.set_attribute("aria-selected", "false");
                link.set_attribute("tabindex", "-1");
            }
            if let Some(panel) = dom.get_mut(tab.panel) {
                panel.set_attribute("role", "tabpanel");
                panel.set_attribute("aria-labelledby", tab_id);
                panel.add_class(PANEL_HIDDEN_CLASS);
            }
        }

        let initial = dom
            .location_hash()
            .and_then(|hash| self.tabs.iter().position(|tab| tab.panel_id == hash))
            .unwrap_or(0);
        self.selected = None;
        self.select_index(dom, initial);
    }

    fn teardown(&mut self, dom: &mut Dom) {
        if let Some(list) = dom.get_mut(self.list) {
            list.remove_attribute("role");
        }
        for tab in &self.tabs {
            if let Some(item) = tab.item.and_then(|item| dom.get_mut(item)) {
                item.remove_attribute("role");
                item.remove_class(LIST_ITEM_SELECTED_CLASS);
            }
            if let Some(link) = dom.get_mut(tab.link) {
                for name in ["role", "aria-controls", "aria-selected", "tabindex"] {
                    link.remove_attribute(name);
                }
            }
            if let Some(panel) = dom.get_mut(tab.panel) {
                panel.remove_attribute("role");
                panel.remove_attribute("aria-labelledby");
                panel.remove_class(PANEL_HIDDEN_CLASS);
            }
        }
        self.selected = None;
    }
}

impl Component for Tabs {
    const MODULE: &'static str = "kit-tabs";
    const CONFIG_KEY: &'static str = "tabs";

    fn schema() -> &'static Schema {
        &Schema::EMPTY
    }

    fn new(dom: &mut Dom, root: NodeId, config: Option<&ConfigObject>) -> Result<Self, ComponentError> {
        mount_root::<Self>(dom, root)?;
        resolve_config::<Self>(dom, root, config)?;

        let links = dom.query_within(root, |data| data.tag == "a" && data.has_class(TAB_CLASS));
        if links.is_empty() {
            return Err(ComponentError::missing(Self::MODULE, format!("Links (`a.{TAB_CLASS}`)")));
        }
        let list = dom
            .query_first_within(root, |data| data.has_class(LIST_CLASS))
            .ok_or_else(|| ComponentError::missing(Self::MODULE, format!("List (`.{LIST_CLASS}`)")))?;

        let mut tabs = Vec::with_capacity(links.len());
        for link in links {
            let panel_id = dom
                .get(link)
                .and_then(|data| data.attribute("href"))
                .and_then(|href| href.split_once('#'))
                .map(|(_, fragment)| fragment.to_owned())
                .filter(|fragment| !fragment.is_empty())
                .ok_or_else(|| ComponentError::Element {
                    module: Self::MODULE,
                    message: format!("Tab link (`a.{TAB_CLASS}`) has no `#panel` href"),
                })?;
            let panel = dom
                .query_by_id(&panel_id)
                .filter(|&panel| dom.get(panel).is_some_and(|data| data.has_class(PANEL_CLASS)))
                .ok_or_else(|| ComponentError::missing(Self::MODULE, format!("Panel (`#{panel_id}`)")))?;
            let item = dom
                .ancestors(link)
                .into_iter()
                .find(|&id| dom.get(id).is_some_and(|data| data.has_class(LIST_ITEM_CLASS)));
            tabs.push(Tab {
                link,
                item,
                panel,
                panel_id,
            });
        }

        let mut component = Self {
            root,
            list,
            tabs,
            selected: None,
            mobile: false,
        };
        component.setup(dom);
        Ok(component)
    }

    fn root(&self) -> NodeId {
        self.root
    }
}
