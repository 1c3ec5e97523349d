//! Minimal element model for page bindings.
//!
//! An [`Element`] stands in for one node the hydrator writes to: it has a
//! class list, attributes, text content and inner markup. Builders only ever
//! touch these four things, so nothing more of the DOM is modelled.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    inner_html: String,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add a class.
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    /// Builder-style: set an attribute.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style: set text content.
    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Flip `class` and return whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    /// Text content. Stored unescaped, as a text node would be.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace text content; clears any inner markup.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.inner_html.clear();
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replace inner markup; clears any text content.
    pub fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
        self.text.clear();
    }
}
