//! Component trait: schema, defaults, construction against a root element.
//!
//! Every component is an independent struct implementing [`Component`]. The
//! object-safe [`Mounted`] view lets mixed components be held together after
//! initialisation, with `as_any` for downcasting back to the concrete type.

use std::any::Any;
use std::fmt;

use crate::config::{ConfigObject, Schema};
use crate::dom::{Dom, NodeId};

use super::error::ComponentError;

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// Shared initialisation interface implemented by every component.
pub trait Component: fmt::Debug + Sized + 'static {
    /// The `data-module` value that marks a root element (e.g. `"kit-button"`).
    const MODULE: &'static str;

    /// Key of this component's section in a page-wide config object.
    const CONFIG_KEY: &'static str;

    /// Declared config properties, used to read the root's dataset.
    fn schema() -> &'static Schema;

    /// Config applied below caller-supplied and dataset config.
    fn defaults() -> ConfigObject {
        ConfigObject::new()
    }

    /// Enhance the element at `root`.
    ///
    /// `config` is the caller-supplied config; dataset config on the root
    /// element takes precedence over it.
    fn new(dom: &mut Dom, root: NodeId, config: Option<&ConfigObject>) -> Result<Self, ComponentError>;

    /// The element this component was created on.
    fn root(&self) -> NodeId;
}

// ---------------------------------------------------------------------------
// Mounted
// ---------------------------------------------------------------------------

/// Object-safe view of an initialised component.
pub trait Mounted: fmt::Debug {
    fn module_name(&self) -> &'static str;

    fn root_element(&self) -> NodeId;

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<C: Component> Mounted for C {
    fn module_name(&self) -> &'static str {
        C::MODULE
    }

    fn root_element(&self) -> NodeId {
        self.root()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
