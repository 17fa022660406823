//! Component system: trait, errors, shared construction steps.

pub mod error;
pub mod setup;
pub mod traits;

pub use error::ComponentError;
pub use setup::{is_supported, mount_root, resolve_config, SUPPORTED_CLASS};
pub use traits::{Component, Mounted};
