//! # frontkit
//!
//! Progressive-enhancement components driven by `data-*` attribute config.
//!
//! Components read their configuration from three layers: built-in defaults,
//! config supplied by the caller, and the `data-*` attributes on their root
//! element, with the markup winning. Attribute values are plain strings, so
//! they are normalised (`"true"` becomes a boolean, `"42"` a number), and
//! dotted attribute names (`data-i18n.show-section`) are gathered into nested
//! namespaces before the layers are merged.
//!
//! ## Core Systems
//!
//! - **[`config`]**: Normalisation, namespace extraction, merging, schema validation
//! - **[`dom`]**: Slotmap-backed element tree with class, attribute and scoped queries
//! - **[`i18n`]**: Translations with plural rules and `%{name}` placeholders
//! - **[`component`]**: Component trait, errors, support check and config resolution
//! - **[`components`]**: Built-in components: Button, Accordion, CharacterCount, ErrorSummary, Tabs
//! - **[`init`]**: Page-wide initialisation of every `data-module` root

// Foundation
pub mod config;
pub mod dom;
pub mod i18n;

// Component system
pub mod component;
pub mod components;

// Page setup
pub mod init;

pub use component::{Component, ComponentError, Mounted};
pub use config::{ConfigObject, ConfigValue};
pub use dom::{Dom, NodeData, NodeId};
pub use init::{create_all, init_all, InitReport, KitConfig};
