//! Document model: slotmap-backed element tree with attribute and class queries.

pub mod node;
pub mod tree;
pub mod query;

pub use node::{NodeId, NodeData};
pub use tree::Dom;
