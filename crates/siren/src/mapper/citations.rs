//! Reference list.

use super::*;

/// `references` with one `reference/refInfo[lang=RUS]/text` per citation, or
/// `None` without citations.
///
/// Citation text is kept raw; markup escaping happens once, at serialization.
pub fn references(citations: &[Citation]) -> Option<Element> {
  if citations.is_empty() {
    return None;
  }
  let references = citations.iter().map(|citation| {
    Element::new("reference").with_child(
      Element::new("refInfo")
        .with_attr("lang", LANG_RUS)
        .with_child(Element::text_node("text", citation.raw_citation.as_str())),
    )
  });
  Some(Element::new("references").with_children(references))
}
