//! Indenting formatter turning a [`SirenDocument`] into text.
//!
//! Output rules:
//! - `<?xml version="1.0" encoding="UTF-8"?>` followed by the DOCTYPE line
//! - one element per line, nested elements indented by the configured width
//! - placeholders (no children, no text) as `<x/>`
//! - text content inline: `<x>text</x>`, including empty text as `<x></x>`
//! - text and attribute values escaped for markup
//! - a trailing newline
//!
//! Output depends only on the tree, so equal trees always give byte-identical text.

use std::io::Write;

use quick_xml::{
  events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
  Writer,
};

use super::*;

/// Serializes documents with a fixed indentation width.
#[derive(Debug, Clone, Copy)]
pub struct XmlFormatter {
  indent: usize,
}

impl Default for XmlFormatter {
  fn default() -> Self { Self::new(2) }
}

impl XmlFormatter {
  /// A formatter indenting nested elements by `indent` spaces; `0` disables line breaks.
  pub fn new(indent: usize) -> Self { Self { indent } }

  /// Writes the document into `sink`.
  pub fn write<W: Write>(&self, document: &SirenDocument, sink: W) -> Result<()> {
    let mut writer = if self.indent > 0 {
      Writer::new_with_indent(sink, b' ', self.indent)
    } else {
      Writer::new(sink)
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(document.doctype.to_string())))?;
    write_element(&mut writer, &document.root)?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
  }

  /// Serializes the document into a string.
  pub fn to_string(&self, document: &SirenDocument) -> Result<String> {
    let mut buffer = Vec::new();
    self.write(document, &mut buffer)?;
    let xml = String::from_utf8(buffer)?;
    trace!("Serialized document to {} bytes", xml.len());
    Ok(xml)
  }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
  let mut start = BytesStart::new(element.name.as_str());
  for (name, value) in &element.attributes {
    start.push_attribute((name.as_str(), value.as_str()));
  }

  if element.is_placeholder() {
    writer.write_event(Event::Empty(start))?;
    return Ok(());
  }

  writer.write_event(Event::Start(start))?;
  if let Some(text) = &element.text {
    writer.write_event(Event::Text(BytesText::new(text)))?;
  }
  for child in &element.children {
    write_element(writer, child)?;
  }
  writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
  Ok(())
}
