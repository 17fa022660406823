//! Dataset configuration resolver: normalisation, namespace extraction, merging.

pub mod dataset;
pub mod error;
pub mod extract;
pub mod merge;
pub mod normalise;
pub mod number;
pub mod schema;
pub mod value;

pub use dataset::Dataset;
pub use error::ConfigError;
pub use extract::extract_config_by_namespace;
pub use merge::{flatten, merge_configs, FlatConfig};
pub use normalise::{normalise, normalise_dataset, normalise_dataset_with_schema, normalise_string};
pub use schema::{Schema, SchemaCondition, SchemaProperty, SchemaType};
pub use value::{ConfigObject, ConfigValue};
