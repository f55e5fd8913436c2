//! Bilingual titles and abstracts, and the article language marker.

use super::*;

fn branch_text<'a>(map: &'a LocaleMap, locale: &str) -> &'a str {
  map.get(locale).map(String::as_str).unwrap_or_default()
}

/// `artTitles` with an `ENG` and a `RUS` title; a missing locale gives empty text.
pub fn titles(publication: &Publication) -> Element {
  Element::new("artTitles").with_children(BRANCHES.iter().map(|(lang, locale)| {
    Element::new("artTitle").with_attr("lang", *lang).with_text(branch_text(&publication.title, locale))
  }))
}

/// `abstracts` with an `ENG` and a `RUS` abstract, each normalized to plain text.
pub fn abstracts(publication: &Publication, html: &dyn HtmlToText) -> Element {
  Element::new("abstracts").with_children(BRANCHES.iter().map(|(lang, locale)| {
    let text = html.html_to_text(branch_text(&publication.abstract_text, locale));
    Element::new("abstract").with_attr("lang", *lang).with_text(text)
  }))
}

/// Empty `text` node whose `lang` is the 3-letter code of the publication language.
pub fn language_marker(publication: &Publication, codes: &dyn LanguageCodes) -> Element {
  Element::new("text").with_attr("lang", codes.lang_attribute(publication.language()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::host::{Iso639, PlainText};

  fn publication() -> Publication {
    let mut publication = Publication { locale: "ru_RU".into(), ..Default::default() };
    publication.title.insert(LOCALE_EN.into(), "Heat transfer".into());
    publication.abstract_text.insert(LOCALE_RU.into(), "<p>Теплообмен &amp; массообмен</p>".into());
    publication
  }

  #[test]
  fn titles_keep_both_branches() {
    let node = titles(&publication());
    let branches: Vec<_> =
      node.children.iter().map(|title| (title.attr("lang").unwrap(), title.text().unwrap())).collect();
    assert_eq!(branches, [("ENG", "Heat transfer"), ("RUS", "")]);
  }

  #[test]
  fn abstracts_are_plain_text() {
    let node = abstracts(&publication(), &PlainText);
    assert_eq!(node.children[0].text(), Some(""));
    assert_eq!(node.children[1].attr("lang"), Some("RUS"));
    assert_eq!(node.children[1].text(), Some("Теплообмен & массообмен"));
  }

  #[test]
  fn language_marker_uses_three_letter_code() {
    let node = language_marker(&publication(), &Iso639);
    assert_eq!(node.attr("lang"), Some("RUS"));
    assert!(node.is_placeholder());

    let unknown = Publication { locale: "xx_XX".into(), ..Default::default() };
    assert_eq!(language_marker(&unknown, &Iso639).attr("lang"), Some(""));
  }
}
