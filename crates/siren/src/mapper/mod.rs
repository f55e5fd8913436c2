//! Field rules, one per Siren subtree.
//!
//! Each rule takes the slice of metadata it needs and returns the finished
//! subtree, or `None` when the subtree does not apply (no authors, no
//! citations). Rules never fail: absent metadata becomes an omitted node, an
//! empty node, or the documented fallback of that rule.
//!
//! | Rule                        | Subtree                                  |
//! |-----------------------------|------------------------------------------|
//! | [`journal::header`]         | `titleid`, `issn`, `eissn`, `journalInfo`|
//! | [`issue::header`]           | leading `issue` children                 |
//! | [`authors::authors`]        | `authors/author[num]`                    |
//! | [`text::titles`]            | `artTitles`                              |
//! | [`text::abstracts`]         | `abstracts`                              |
//! | [`text::language_marker`]   | `text[lang]`                             |
//! | [`codes::codes`]            | `codes`                                  |
//! | [`keywords::keywords`]      | `keywords/kwdGroup`                      |
//! | [`citations::references`]   | `references`                             |
//! | [`placeholders`]            | `files`, `rubrics`, `fundings`           |
//! | [`dates::dates`]            | `dates`                                  |

use super::*;
use crate::{
  config::ExportConfig,
  host::{HtmlToText, LanguageCodes},
  xml::Element,
};

pub mod authors;
pub mod citations;
pub mod codes;
pub mod dates;
pub mod issue;
pub mod journal;
pub mod keywords;
pub mod placeholders;
pub mod text;

/// `lang` attribute value of English branches.
pub const LANG_ENG: &str = "ENG";

/// `lang` attribute value of Russian branches.
pub const LANG_RUS: &str = "RUS";

/// The two language branches every bilingual subtree carries, in emission order.
pub(crate) const BRANCHES: [(&str, &str); 2] = [(LANG_ENG, LOCALE_EN), (LANG_RUS, LOCALE_RU)];

/// Uppercases the first character, leaving the rest untouched.
///
/// ```
/// use siren::mapper::capitalize_first;
///
/// assert_eq!(capitalize_first("ivanov"), "Ivanov");
/// assert_eq!(capitalize_first("мария"), "Мария");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
