//! Tagged node tree.
//!
//! An [`Element`] has a name, ordered attributes, ordered children and an
//! optional text value. `None` text and no children means a placeholder
//! (`<x/>`); `Some("")` is an element with explicitly empty content
//! (`<x></x>`).
//!
//! ```
//! use siren::xml::Element;
//!
//! let titles = Element::new("artTitles")
//!   .with_child(Element::new("artTitle").with_attr("lang", "ENG").with_text("Title"))
//!   .with_child(Element::new("artTitle").with_attr("lang", "RUS").with_text(""));
//!
//! assert_eq!(titles.find("artTitle").and_then(Element::text), Some("Title"));
//! assert_eq!(titles.children_named("artTitle").count(), 2);
//! ```

use super::*;

/// An XML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
  /// Element name
  pub name:       String,
  /// Attributes in emission order
  pub attributes: Vec<(String, String)>,
  /// Child elements in emission order
  pub children:   Vec<Element>,
  /// Text content
  pub text:       Option<String>,
}

impl Element {
  /// A childless element without text.
  pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), ..Default::default() } }

  /// Shorthand for an element holding only `text`.
  pub fn text_node(name: impl Into<String>, text: impl Into<String>) -> Self {
    Self::new(name).with_text(text)
  }

  /// Sets an attribute, replacing an existing one of the same name in place.
  pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.set_attr(name, value);
    self
  }

  /// Sets the text content.
  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  /// Appends a child.
  pub fn with_child(mut self, child: Element) -> Self {
    self.children.push(child);
    self
  }

  /// Appends a child when present.
  pub fn with_optional(mut self, child: Option<Element>) -> Self {
    self.children.extend(child);
    self
  }

  /// Appends several children.
  pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
    self.children.extend(children);
    self
  }

  /// Appends a child.
  pub fn push(&mut self, child: Element) { self.children.push(child); }

  /// Sets an attribute, replacing an existing one of the same name in place.
  pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
    let name = name.into();
    let value = value.into();
    match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
      Some((_, existing)) => *existing = value,
      None => self.attributes.push((name, value)),
    }
  }

  /// Value of an attribute.
  pub fn attr(&self, name: &str) -> Option<&str> {
    self.attributes.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
  }

  /// Text content.
  pub fn text(&self) -> Option<&str> { self.text.as_deref() }

  /// First direct child with the given name.
  pub fn child(&self, name: &str) -> Option<&Element> {
    self.children.iter().find(|child| child.name == name)
  }

  /// Mutable access to the first direct child with the given name.
  pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
    self.children.iter_mut().find(|child| child.name == name)
  }

  /// All direct children with the given name.
  pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    self.children.iter().filter(move |child| child.name == name)
  }

  /// Names of the direct children, in order.
  pub fn child_names(&self) -> Vec<&str> {
    self.children.iter().map(|child| child.name.as_str()).collect()
  }

  /// First element reached by following a `/`-separated path of child names.
  pub fn find(&self, path: &str) -> Option<&Element> {
    path.split('/').filter(|step| !step.is_empty()).try_fold(self, |node, step| node.child(step))
  }

  /// Whether the element has neither children nor text.
  pub fn is_placeholder(&self) -> bool { self.children.is_empty() && self.text.is_none() }
}

/// Document type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocType {
  /// Name of the root element the declaration announces
  pub root_name: String,
  /// System identifier
  pub system_id: String,
}

impl Display for DocType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} SYSTEM \"{}\"", self.root_name, self.system_id)
  }
}

/// A complete Siren document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SirenDocument {
  /// Document type declaration
  pub doctype: DocType,
  /// The `journal` root element
  pub root:    Element,
}

impl SirenDocument {
  /// Serializes the document with the given indentation width.
  pub fn to_xml(&self, indent: usize) -> Result<String> { XmlFormatter::new(indent).to_string(self) }
}
