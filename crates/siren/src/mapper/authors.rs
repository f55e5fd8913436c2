//! Author list.
//!
//! Each author becomes an `author[num]` node with empty identifier
//! placeholders and one `individInfo` block. Names, the affiliation and the
//! email are localized to the publication locale, falling back to the
//! journal's primary locale and then to any non-empty value.
//!
//! ```
//! use siren::{mapper::authors::PersonName, model::Author};
//!
//! let author = Author::new("maria", "", "maria@example.org");
//! let name = PersonName::of(&author, "ru_RU", "ru_RU");
//! assert_eq!(name, PersonName::FamilyMissing { given: "Maria".to_string() });
//! ```

use super::*;

/// Identifier schemes with an empty placeholder in `authorCodes`.
const AUTHOR_CODES: [&str; 4] = ["researcherid", "spin", "scopusid", "orcid"];

/// Contact fields that are always emitted empty.
const EMPTY_CONTACT_FIELDS: [&str; 5] = ["address", "town", "otherInfo", "comment", "commentDate"];

/// How an author's name is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonName {
  /// Both parts are known.
  Full {
    /// Given name, first letter uppercased
    given:  String,
    /// Family name, first letter uppercased
    family: String,
  },
  /// No family name: the given name stands in as the surname and the
  /// initials are flagged empty.
  FamilyMissing {
    /// Given name, first letter uppercased
    given: String,
  },
}

impl PersonName {
  /// Name of `author` in `locale`, else `fallback_locale`, else any non-empty value.
  pub fn of(author: &Author, locale: &str, fallback_locale: &str) -> Self {
    let given = localized(&author.given_name, locale, fallback_locale).unwrap_or_default();
    let given = capitalize_first(given.trim());
    match localized(&author.family_name, locale, fallback_locale) {
      Some(family) => Self::Full { given, family: capitalize_first(family.trim()) },
      None => Self::FamilyMissing { given },
    }
  }

  /// `initials` then `surname`.
  fn nodes(self) -> [Element; 2] {
    match self {
      Self::Full { given, family } =>
        [Element::text_node("initials", given), Element::text_node("surname", family)],
      Self::FamilyMissing { given } =>
        [Element::new("initials").with_attr("EmptyYN", "Y"), Element::text_node("surname", given)],
    }
  }
}

/// Locale settings shared by every author of one article.
#[derive(Debug, Clone, Copy)]
pub struct AuthorLocale<'a> {
  /// `lang` attribute of `individInfo`
  pub lang:     &'a str,
  /// Locale names are picked in first
  pub locale:   &'a str,
  /// Locale used when `locale` has no value
  pub fallback: &'a str,
}

/// `authors` with one numbered `author` per entry, or `None` without authors.
pub fn authors(list: &[Author], locale: AuthorLocale<'_>) -> Option<Element> {
  if list.is_empty() {
    return None;
  }
  let nodes = list.iter().enumerate().map(|(index, author)| self::author(author, index + 1, locale));
  Some(Element::new("authors").with_children(nodes))
}

/// A single `author[num]` node.
pub fn author(author: &Author, num: usize, locale: AuthorLocale<'_>) -> Element {
  let codes = Element::new("authorCodes").with_children(AUTHOR_CODES.into_iter().map(Element::new));

  let affiliation = localized(&author.affiliation, locale.locale, locale.fallback).unwrap_or_default();
  let info = Element::new("individInfo")
    .with_attr("lang", locale.lang)
    .with_children(PersonName::of(author, locale.locale, locale.fallback).nodes())
    .with_children(EMPTY_CONTACT_FIELDS.into_iter().map(Element::new))
    .with_child(Element::text_node("orgName", format!("{affiliation}. {}", author.email)))
    .with_child(Element::text_node("email", author.email.as_str()));

  Element::new("author").with_attr("num", num.to_string()).with_child(codes).with_child(info)
}
