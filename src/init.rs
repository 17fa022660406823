//! Page initialisation: find every `data-module` root and create its component.
//!
//! A failing element never stops the others. [`create_all`] logs and skips
//! failures; [`init_all`] also hands them back in its [`InitReport`].

use tracing::{debug, error};

use crate::component::{is_supported, Component, ComponentError, Mounted};
use crate::components::{Accordion, Button, CharacterCount, ErrorSummary, Tabs};
use crate::config::ConfigObject;
use crate::dom::{Dom, NodeId};

// ---------------------------------------------------------------------------
// KitConfig
// ---------------------------------------------------------------------------

/// Page-wide config: one section per component, keyed by
/// [`Component::CONFIG_KEY`].
///
/// ```text
/// { "button": { "preventDoubleClick": true },
///   "characterCount": { "maxlength": 200 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KitConfig(ConfigObject);

impl KitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON document; sections that are not objects are ignored
    /// when looked up.
    pub fn from_json(value: serde_json::Value) -> Self {
        Self(ConfigObject::from_json(value))
    }

    /// Set the section for `C` (builder).
    pub fn with<C: Component>(mut self, config: ConfigObject) -> Self {
        self.0.insert(C::CONFIG_KEY, config);
        self
    }

    /// The section for `C`, if present and an object.
    pub fn section<C: Component>(&self) -> Option<&ConfigObject> {
        self.0.object(C::CONFIG_KEY)
    }
}

impl From<ConfigObject> for KitConfig {
    fn from(config: ConfigObject) -> Self {
        Self(config)
    }
}

// ---------------------------------------------------------------------------
// create_all
// ---------------------------------------------------------------------------

/// Root elements for `C` under `scope` (the document root when `None`), in
/// document order.
pub fn module_roots<C: Component>(dom: &Dom, scope: Option<NodeId>) -> Vec<NodeId> {
    match scope.or_else(|| dom.root()) {
        Some(scope) => dom.query_within(scope, |data| data.attribute("data-module") == Some(C::MODULE)),
        None => Vec::new(),
    }
}

/// Create `C` on every matching root under `scope`.
///
/// Fails only when the page is unsupported; elements that fail are logged
/// and left out of the result.
pub fn create_all<C: Component>(
    dom: &mut Dom,
    config: Option<&ConfigObject>,
    scope: Option<NodeId>,
) -> Result<Vec<C>, ComponentError> {
    if !is_supported(dom) {
        error!(module = C::MODULE, "{}", ComponentError::Support);
        return Err(ComponentError::Support);
    }

    let mut created = Vec::new();
    for root in module_roots::<C>(dom, scope) {
        match C::new(dom, root, config) {
            Ok(component) => created.push(component),
            Err(err) => error!(module = C::MODULE, ?root, "{err}"),
        }
    }
    Ok(created)
}

// ---------------------------------------------------------------------------
// init_all
// ---------------------------------------------------------------------------

/// A component that could not be created.
#[derive(Debug, Clone, PartialEq)]
pub struct InitFailure {
    /// The root element, or `None` when the whole page was rejected.
    pub node: Option<NodeId>,
    pub module: &'static str,
    pub error: ComponentError,
}

/// Outcome of [`init_all`].
#[derive(Debug, Default)]
pub struct InitReport {
    pub components: Vec<Box<dyn Mounted>>,
    pub errors: Vec<InitFailure>,
}

impl InitReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Created components of type `C`, in creation order.
    pub fn components_of<C: Component>(&self) -> impl Iterator<Item = &C> {
        self.components
            .iter()
            .filter_map(|component| component.as_any().downcast_ref::<C>())
    }

    /// Mutable access to the component created on `root`, if it is a `C`.
    pub fn component_mut<C: Component>(&mut self, root: NodeId) -> Option<&mut C> {
        self.components
            .iter_mut()
            .filter(|component| component.root_element() == root)
            .find_map(|component| component.as_any_mut().downcast_mut::<C>())
    }

    fn create<C: Component>(&mut self, dom: &mut Dom, config: &KitConfig, scope: Option<NodeId>) {
        for root in module_roots::<C>(dom, scope) {
            match C::new(dom, root, config.section::<C>()) {
                Ok(component) => self.components.push(Box::new(component)),
                Err(err) => {
                    error!(module = C::MODULE, ?root, "{err}");
                    self.errors.push(InitFailure {
                        node: Some(root),
                        module: C::MODULE,
                        error: err,
                    });
                }
            }
        }
    }
}

/// Create every built-in component under `scope`.
///
/// On an unsupported page nothing is touched and the report holds a single
/// [`ComponentError::Support`] failure.
pub fn init_all(dom: &mut Dom, config: &KitConfig, scope: Option<NodeId>) -> InitReport {
    let mut report = InitReport::default();
    if !is_supported(dom) {
        error!("{}", ComponentError::Support);
        report.errors.push(InitFailure {
            node: None,
            module: "kit-frontend",
            error: ComponentError::Support,
        });
        return report;
    }

    report.create::<Accordion>(dom, config, scope);
    report.create::<Button>(dom, config, scope);
    report.create::<CharacterCount>(dom, config, scope);
    report.create::<ErrorSummary>(dom, config, scope);
    report.create::<Tabs>(dom, config, scope);

    debug!(
        created = report.components.len(),
        failed = report.errors.len(),
        "initialised page"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::SUPPORTED_CLASS;
    use crate::dom::NodeData;
    use serde_json::json;

    fn page() -> (Dom, NodeId) {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body").with_class(SUPPORTED_CLASS));
        (dom, body)
    }

    fn button(dom: &mut Dom, parent: NodeId) -> NodeId {
        dom.insert_child(parent, NodeData::new("button").with_attr("data-module", "kit-button"))
    }

    #[test]
    fn create_all_finds_every_root() {
        let (mut dom, body) = page();
        let first = button(&mut dom, body);
        let section = dom.insert_child(body, NodeData::new("section"));
        let second = button(&mut dom, section);

        let buttons = create_all::<Button>(&mut dom, None, None).unwrap();
        let roots: Vec<_> = buttons.iter().map(|b| b.root()).collect();
        assert_eq!(roots, vec![first, second]);
    }

    #[test]
    fn create_all_respects_scope() {
        let (mut dom, body) = page();
        button(&mut dom, body);
        let section = dom.insert_child(body, NodeData::new("section"));
        let inner = button(&mut dom, section);

        let buttons = create_all::<Button>(&mut dom, None, Some(section)).unwrap();
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].root(), inner);
    }

    #[test]
    fn create_all_skips_failures() {
        let (mut dom, body) = page();
        let first = button(&mut dom, body);
        button(&mut dom, body);
        // Already initialised elements fail and are skipped.
        Button::new(&mut dom, first, None).unwrap();

        let buttons = create_all::<Button>(&mut dom, None, None).unwrap();
        assert_eq!(buttons.len(), 1);
        assert_ne!(buttons[0].root(), first);
    }

    #[test]
    fn create_all_passes_config() {
        let (mut dom, body) = page();
        button(&mut dom, body);
        let config = ConfigObject::from_json(json!({"preventDoubleClick": true}));
        let buttons = create_all::<Button>(&mut dom, Some(&config), None).unwrap();
        assert!(buttons[0].config().prevent_double_click);
    }

    #[test]
    fn create_all_on_unsupported_page() {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        button(&mut dom, body);
        let err = create_all::<Button>(&mut dom, None, None).unwrap_err();
        assert_eq!(err, ComponentError::Support);
    }

    #[test]
    fn kit_config_sections() {
        let config = KitConfig::from_json(json!({
            "button": {"preventDoubleClick": true},
            "tabs": "not an object",
        }));
        assert_eq!(
            config.section::<Button>().and_then(|c| c.get("preventDoubleClick")),
            Some(&crate::config::ConfigValue::Bool(true))
        );
        assert!(config.section::<Tabs>().is_none());
        assert!(config.section::<Accordion>().is_none());

        let built = KitConfig::new().with::<Button>(ConfigObject::from_json(json!({"preventDoubleClick": true})));
        assert_eq!(built.section::<Button>(), config.section::<Button>());
    }

    #[test]
    fn init_all_collects_components_and_failures() {
        let (mut dom, body) = page();
        let ok = button(&mut dom, body);
        let counter = dom.insert_child(
            body,
            NodeData::new("div").with_attr("data-module", "kit-character-count"),
        );

        let mut report = init_all(&mut dom, &KitConfig::new(), None);
        assert_eq!(report.components.len(), 1);
        assert_eq!(report.components[0].module_name(), "kit-button");
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].node, Some(counter));
        assert_eq!(report.errors[0].module, "kit-character-count");
        assert!(!report.is_clean());

        assert!(report.component_mut::<Button>(ok).is_some());
        assert!(report.component_mut::<Tabs>(ok).is_none());
        assert_eq!(report.components_of::<Button>().count(), 1);
    }

    #[test]
    fn init_all_on_unsupported_page_touches_nothing() {
        let mut dom = Dom::new();
        let body = dom.insert(NodeData::new("body"));
        let root = button(&mut dom, body);

        let report = init_all(&mut dom, &KitConfig::new(), None);
        assert!(report.components.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].error, ComponentError::Support);
        assert_eq!(report.errors[0].node, None);
        assert!(!dom.get(root).unwrap().has_attribute("data-kit-button-init"));
    }
}
