//! Read-only domain records supplied by the host application.
//!
//! The exporter never mutates these. They mirror what a journal management
//! system keeps for a journal context: the journal itself, its issues, the
//! submissions with their current publication, authors and citations.
//!
//! Localized values are stored as [`LocaleMap`]s keyed by locale code
//! (`en_US`, `ru_RU`, ...). Any key may be missing.
//!
//! # Examples
//!
//! ```
//! use siren::model::{Author, LocaleMap, Publication};
//!
//! let mut publication = Publication::default();
//! publication.locale = "ru_RU".to_string();
//! publication.title.insert("en_US".to_string(), "Heat transfer in thin films".to_string());
//! publication.authors.push(Author::new("Ivan", "Ivanov", "ivanov@example.org"));
//!
//! assert_eq!(publication.title.get("ru_RU"), None);
//! ```

use serde::Deserializer;

use super::*;

/// Localized text keyed by locale code.
pub type LocaleMap = BTreeMap<String, String>;

/// Localized keyword lists keyed by locale code.
pub type KeywordMap = BTreeMap<String, Vec<String>>;

/// English locale key used for `ENG` branches.
pub const LOCALE_EN: &str = "en_US";

/// Russian locale key used for `RUS` branches.
pub const LOCALE_RU: &str = "ru_RU";

/// A journal context.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Journal {
  /// Context identifier
  pub id:                    u64,
  /// URL path of the journal, used to select it from the command line
  #[serde(default)]
  pub path:                  String,
  /// Journal name per locale
  #[serde(default)]
  pub name:                  LocaleMap,
  /// Print ISSN
  #[serde(default)]
  pub print_issn:            Option<String>,
  /// Generic ISSN, used when no print ISSN is set
  #[serde(default)]
  pub issn:                  Option<String>,
  /// Online ISSN
  #[serde(default)]
  pub online_issn:           Option<String>,
  /// Publishing institution
  #[serde(default)]
  pub publisher_institution: Option<String>,
  /// Primary locale of the journal
  #[serde(default)]
  pub primary_locale:        String,
}

impl Journal {
  /// The ISSN exported in the `issn` node: the print ISSN, else the generic one.
  pub fn preferred_issn(&self) -> Option<&str> {
    non_empty(self.print_issn.as_deref()).or_else(|| non_empty(self.issn.as_deref()))
  }

  /// The online ISSN, if set to something non-empty.
  pub fn electronic_issn(&self) -> Option<&str> { non_empty(self.online_issn.as_deref()) }

  /// Journal name in its primary locale.
  pub fn localized_name(&self) -> Option<&str> {
    localized(&self.name, &self.primary_locale, &self.primary_locale)
  }
}

/// A journal issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Issue {
  /// Issue identifier
  pub id:             u64,
  /// Journal the issue belongs to
  pub journal_id:     u64,
  /// Optional URL path, an alternative way to address the issue
  #[serde(default)]
  pub url_path:       Option<String>,
  /// Volume label
  #[serde(default)]
  pub volume:         String,
  /// Number label
  #[serde(default)]
  pub number:         String,
  /// Whether the volume is part of the issue identification
  #[serde(default)]
  pub show_volume:    bool,
  /// Whether the number is part of the issue identification
  #[serde(default)]
  pub show_number:    bool,
  /// Publication date of the issue
  #[serde(default, deserialize_with = "deserialize_host_date")]
  pub date_published: Option<NaiveDate>,
  /// Submissions published in this issue, in table-of-contents order
  #[serde(default)]
  pub submission_ids: Vec<u64>,
}

/// A submission with its current publication.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Submission {
  /// Submission identifier
  pub id:                  u64,
  /// Journal context the submission belongs to
  pub context_id:          u64,
  /// The publication considered authoritative at export time
  pub current_publication: Publication,
}

/// One version of a submission's metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Publication {
  /// Publication identifier, used to look up citations
  pub id:             u64,
  /// Locale the article is written in, e.g. `ru_RU`
  #[serde(default)]
  pub locale:         String,
  /// Title per locale
  #[serde(default)]
  pub title:          LocaleMap,
  /// Abstract per locale; values may contain HTML
  #[serde(default, rename = "abstract")]
  pub abstract_text:  LocaleMap,
  /// Keyword lists per locale
  #[serde(default)]
  pub keywords:       KeywordMap,
  /// Authors in display order
  #[serde(default)]
  pub authors:        Vec<Author>,
  /// Starting page
  #[serde(default)]
  pub pages:          Option<String>,
  /// Stored persistent identifiers keyed by type (`doi`, `publisher-id`, ...)
  #[serde(default)]
  pub pub_ids:        BTreeMap<String, String>,
  /// Publication date of this version
  #[serde(default, deserialize_with = "deserialize_host_date")]
  pub date_published: Option<NaiveDate>,
}

impl Publication {
  /// Stored persistent identifier of the given type, ignoring empty values.
  pub fn stored_pub_id(&self, pub_id_type: &str) -> Option<&str> {
    non_empty(self.pub_ids.get(pub_id_type).map(String::as_str))
  }

  /// The starting page, if set to something non-empty.
  pub fn starting_page(&self) -> Option<&str> { non_empty(self.pages.as_deref()) }

  /// Two-letter language prefix of the publication locale (`ru` for `ru_RU`).
  pub fn language(&self) -> &str { self.locale.split(['_', '-']).next().unwrap_or_default() }
}

/// Author of a publication.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Author {
  /// Given name per locale
  #[serde(default)]
  pub given_name:  LocaleMap,
  /// Family name per locale
  #[serde(default)]
  pub family_name: LocaleMap,
  /// Affiliation per locale
  #[serde(default)]
  pub affiliation: LocaleMap,
  /// Contact email
  #[serde(default)]
  pub email:       String,
  /// Ordinal position in the author list as stored by the host
  #[serde(default)]
  pub seq:         u32,
}

impl Author {
  /// Convenience constructor with names in the `ru_RU` locale.
  pub fn new(given: &str, family: &str, email: &str) -> Self {
    Self {
      given_name: LocaleMap::from([(LOCALE_RU.to_string(), given.to_string())]),
      family_name: LocaleMap::from([(LOCALE_RU.to_string(), family.to_string())]),
      email: email.to_string(),
      ..Default::default()
    }
  }
}

/// A bibliographic reference attached to a publication.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Citation {
  /// Publication the citation belongs to
  pub publication_id: u64,
  /// Raw reference text as entered by the author
  pub raw_citation:   String,
  /// Position in the reference list
  #[serde(default)]
  pub seq:            u32,
}

/// Picks a localized value: `locale` first, then `fallback`, then the first non-empty one.
pub fn localized<'a>(map: &'a LocaleMap, locale: &str, fallback: &str) -> Option<&'a str> {
  non_empty(map.get(locale).map(String::as_str))
    .or_else(|| non_empty(map.get(fallback).map(String::as_str)))
    .or_else(|| map.values().map(String::as_str).find(|value| !value.is_empty()))
}

fn non_empty(value: Option<&str>) -> Option<&str> { value.filter(|value| !value.trim().is_empty()) }

/// Parses a date the way hosts store them: `YYYY-MM-DD`, optionally followed by a time.
///
/// ```
/// use chrono::NaiveDate;
/// use siren::model::parse_host_date;
///
/// let expected = NaiveDate::from_ymd_opt(2020, 5, 1);
/// assert_eq!(parse_host_date("2020-05-01"), expected);
/// assert_eq!(parse_host_date("2020-05-01 10:30:00"), expected);
/// assert_eq!(parse_host_date("2020-05-01T10:30:00Z"), expected);
/// assert_eq!(parse_host_date("not a date"), None);
/// ```
pub fn parse_host_date(value: &str) -> Option<NaiveDate> {
  let value = value.trim();
  let date_part = value.get(..10)?;
  NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Deserializes an optional host date, treating unparseable values as absent.
fn deserialize_host_date<'de, D>(deserializer: D) -> core::result::Result<Option<NaiveDate>, D::Error>
where D: Deserializer<'de> {
  let raw: Option<String> = Option::deserialize(deserializer)?;
  Ok(raw.as_deref().and_then(|value| {
    let date = parse_host_date(value);
    if date.is_none() && !value.is_empty() {
      warn!("Ignoring unparseable host date {value:?}");
    }
    date
  }))
}
