//! Errors raised while constructing a component.

use crate::config::ConfigError;
use crate::i18n::I18nError;

/// Why a component could not be created.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComponentError {
    /// The page is not marked as supporting the kit.
    #[error("kit-frontend is not supported in this page")]
    Support,
    /// The root or a required child element is missing or unusable.
    #[error("{module}: {message}")]
    Element {
        module: &'static str,
        message: String,
    },
    /// The root element already has a component of this type.
    #[error("{module}: root element is already initialised")]
    Init { module: &'static str },
    /// The resolved config failed schema validation.
    #[error("{module}: {source}")]
    Config {
        module: &'static str,
        #[source]
        source: ConfigError,
    },
    #[error(transparent)]
    I18n(#[from] I18nError),
}

impl ComponentError {
    /// An element error for a required element that was not found.
    pub fn missing(module: &'static str, what: impl std::fmt::Display) -> Self {
        Self::Element {
            module,
            message: format!("{what} not found"),
        }
    }
}
