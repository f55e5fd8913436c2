//! Keyword groups.

use super::*;

/// `keywords` with an `ENG` and a `RUS` group.
///
/// A group whose locale has no keywords still carries one empty `keyword`.
pub fn keywords(publication: &Publication) -> Element {
  Element::new("keywords").with_children(BRANCHES.iter().map(|(lang, locale)| {
    let group = Element::new("kwdGroup").with_attr("lang", *lang);
    match publication.keywords.get(*locale).filter(|list| !list.is_empty()) {
      Some(list) => group.with_children(list.iter().map(|word| Element::text_node("keyword", word.as_str()))),
      None => group.with_child(Element::text_node("keyword", "")),
    }
  }))
}
