//! Shared construction steps: support check, init marker, config resolution.

use tracing::debug;

use crate::config::{merge_configs, normalise_dataset_with_schema, ConfigObject};
use crate::dom::{Dom, NodeData, NodeId};

use super::error::ComponentError;
use super::traits::Component;

/// Class on the document root that marks the page as able to run components.
pub const SUPPORTED_CLASS: &str = "kit-frontend-supported";

/// Whether the document root carries [`SUPPORTED_CLASS`].
pub fn is_supported(dom: &Dom) -> bool {
    dom.root()
        .and_then(|root| dom.get(root))
        .is_some_and(|data| data.has_class(SUPPORTED_CLASS))
}

/// Attribute set on a root element once a component has been created on it.
pub fn init_marker(module: &str) -> String {
    format!("data-{module}-init")
}

/// Claim `root` for component `C`.
///
/// Fails if the page is unsupported, the element is missing, or `C` has
/// already been initialised on it. On success the init marker is set.
pub fn mount_root<C: Component>(dom: &mut Dom, root: NodeId) -> Result<(), ComponentError> {
    if !is_supported(dom) {
        return Err(ComponentError::Support);
    }
    let marker = init_marker(C::MODULE);
    let data = dom
        .get_mut(root)
        .ok_or_else(|| ComponentError::missing(C::MODULE, "Root element"))?;
    if data.has_attribute(&marker) {
        return Err(ComponentError::Init { module: C::MODULE });
    }
    data.set_attribute(marker, "");
    debug!(module = C::MODULE, "mounted");
    Ok(())
}

/// Root element data, or an element error naming `C`.
pub fn root_data<C: Component>(dom: &Dom, root: NodeId) -> Result<&NodeData, ComponentError> {
    dom.get(root)
        .ok_or_else(|| ComponentError::missing(C::MODULE, "Root element"))
}

/// The root's dataset, normalised against `C`'s schema.
pub fn dataset_config<C: Component>(dom: &Dom, root: NodeId) -> Result<ConfigObject, ComponentError> {
    let data = root_data::<C>(dom, root)?;
    Ok(normalise_dataset_with_schema(C::schema(), &data.dataset()))
}

/// Merge config layers (lowest priority first), re-nest, and validate
/// against `C`'s schema.
pub fn merge_validated<C: Component>(layers: &[&ConfigObject]) -> Result<ConfigObject, ComponentError> {
    let config = merge_configs(layers.iter().copied()).unflatten();
    C::schema()
        .validate(&config)
        .map_err(|source| ComponentError::Config {
            module: C::MODULE,
            source,
        })?;
    debug!(module = C::MODULE, config = %config, "resolved config");
    Ok(config)
}

/// Resolve `C`'s config: defaults, then caller config, then the root's dataset.
pub fn resolve_config<C: Component>(
    dom: &Dom,
    root: NodeId,
    config: Option<&ConfigObject>,
) -> Result<ConfigObject, ComponentError> {
    let dataset = dataset_config::<C>(dom, root)?;
    let defaults = C::defaults();
    let empty = ConfigObject::new();
    merge_validated::<C>(&[&defaults, config.unwrap_or(&empty), &dataset])
}
