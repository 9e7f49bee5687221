use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display, Write};

/// A node in the headless tree: either an element built by the adapter or page content the
/// adapter only moves around.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<T> {
    Element(Element<T>),
    Content(T),
}

impl<T> Node<T> {
    pub fn as_element(&self) -> Option<&Element<T>> {
        match self {
            Self::Element(e) => Some(e),
            Self::Content(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element<T>> {
        match self {
            Self::Element(e) => Some(e),
            Self::Content(_) => None,
        }
    }

    pub fn as_content(&self) -> Option<&T> {
        match self {
            Self::Element(_) => None,
            Self::Content(c) => Some(c),
        }
    }
}

impl<T> From<Element<T>> for Node<T> {
    fn from(e: Element<T>) -> Self {
        Self::Element(e)
    }
}

/// A minimal element: tag, class list, attributes, inline style and ordered children.
///
/// Attributes and styles are kept sorted by name so rendering is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct Element<T> {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    children: Vec<Node<T>>,
}

impl<T> Element<T> {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn div_with_class(class: &str) -> Self {
        let mut div = Self::new("div");
        div.add_class(class);
        div
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node<T>>) -> Self {
        self.append_child(child);
        self
    }

    pub fn with_content(mut self, content: T) -> Self {
        self.children.push(Node::Content(content));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: String) {
        self.style.insert(property.to_string(), value);
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node<T>] {
        &mut self.children
    }

    pub fn append_child(&mut self, child: impl Into<Node<T>>) {
        self.children.push(child.into());
    }

    /// Detaches and returns every child, leaving the element empty.
    pub fn take_children(&mut self) -> Vec<Node<T>> {
        core::mem::take(&mut self.children)
    }

    /// Child elements, skipping content nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element<T>> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element<T>> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }

    /// Depth-first search (self included) for the first element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element<T>> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_elements().find_map(|e| e.find_by_class(class))
    }

    pub fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Element<T>> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_elements_mut()
            .find_map(|e| e.find_by_class_mut(class))
    }

    pub fn count_by_class(&self, class: &str) -> usize {
        let own = usize::from(self.has_class(class));
        own + self
            .child_elements()
            .map(|e| e.count_by_class(class))
            .sum::<usize>()
    }
}

impl<T: Display> Element<T> {
    /// Renders the subtree as HTML. Content nodes are written with their `Display` impl.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            write!(out, " class=\"{}\"", self.classes.join(" "))?;
        }
        for (name, value) in &self.attributes {
            write!(out, " {name}=\"{value}\"")?;
        }
        if !self.style.is_empty() {
            out.push_str(" style=\"");
            for (property, value) in &self.style {
                write!(out, "{property}: {value};")?;
            }
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_html(out)?,
                Node::Content(c) => write!(out, "{c}")?,
            }
        }
        write!(out, "</{}>", self.tag)
    }
}
