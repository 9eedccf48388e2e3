//! Element tree produced by the block pipeline.
//!
//! Deliberately close to an XML element: a tag, ordered attributes, an
//! optional text payload and child elements. Renderers in [`crate::render`]
//! walk this tree; processors only ever append to it.

/// A node in the parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets an attribute, replacing any previous value but keeping its position.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Appends `child` and hands back a mutable reference to it.
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn last_child(&self) -> Option<&Element> {
        self.children.last()
    }

    /// Returns the last child if it has `tag`, otherwise appends a fresh one.
    pub fn reuse_last_or_append(&mut self, tag: &str) -> &mut Element {
        if !self.last_child().is_some_and(|c| c.tag == tag) {
            self.children.push(Element::new(tag));
        }
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Depth-first search (self included) for the first element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// All descendants (self excluded) carrying `class`, in document order.
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        for child in &self.children {
            if child.has_class(class) {
                found.push(child);
            }
            found.extend(child.find_all_by_class(class));
        }
        found
    }
}
