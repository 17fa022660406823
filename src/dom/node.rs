//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::config::Dataset;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single element.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Tag name (e.g. "div", "button").
    pub tag: String,
    /// Optional unique id (`#id` fragment target).
    pub id: Option<String>,
    /// CSS classes.
    pub classes: Vec<String>,
    /// Attributes other than `id` and `class`, in declaration order.
    pub attributes: Vec<(String, String)>,
    /// Text content.
    pub text: String,
}

impl NodeData {
    /// Create a new element with the given tag name and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            text: String::new(),
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single CSS class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add multiple CSS classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            let class = class.into();
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }
        self
    }

    /// Set an attribute (builder).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Check whether this node has a given CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a CSS class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add or remove a CSS class depending on `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }

    /// Set an attribute. An existing attribute keeps its declaration position.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Remove an attribute. No-op if not present.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(n, _)| n != name);
    }

    /// The element's dataset, built from its `data-*` attributes.
    pub fn dataset(&self) -> Dataset {
        Dataset::from_attributes(
            self.attributes
                .iter()
                .map(|(n, v)| (n.as_str(), v.as_str())),
        )
    }
}
