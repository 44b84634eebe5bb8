//! Owned XML fragment tree.

/// A node inside an [`XmlElement`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with ordered attributes and children.
///
/// Attribute and child order is preserved exactly as pushed, which keeps the
/// rendered output deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// An element holding a single text node
    #[must_use]
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.push_text(text);
        element
    }

    /// A container element, or `None` when there is nothing to put in it
    #[must_use]
    pub fn container(name: impl Into<String>, children: Vec<Self>) -> Option<Self> {
        if children.is_empty() {
            return None;
        }
        let mut element = Self::new(name);
        element.extend(children);
        Some(element)
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(name, value);
        self
    }

    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    pub fn push_child(&mut self, child: Self) {
        self.children.push(XmlNode::Element(child));
    }

    /// Push a child if present
    pub fn push_optional(&mut self, child: Option<Self>) {
        if let Some(child) = child {
            self.push_child(child);
        }
    }

    /// Push `<name>text</name>` if `text` is present
    pub fn push_text_child(&mut self, name: &str, text: Option<&str>) {
        if let Some(text) = text {
            self.push_child(Self::text_element(name, text));
        }
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(XmlNode::Text(text.into()));
    }

    pub fn extend(&mut self, children: impl IntoIterator<Item = Self>) {
        self.children
            .extend(children.into_iter().map(XmlNode::Element));
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn nodes(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements, skipping text nodes
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// First child element with the given name
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().find(|c| c.name == name)
    }

    /// Names of the child elements, in order
    #[must_use]
    pub fn child_names(&self) -> Vec<&str> {
        self.children().map(Self::name).collect()
    }

    /// Concatenated text content of this element's direct text nodes
    #[must_use]
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(t) => Some(t.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
