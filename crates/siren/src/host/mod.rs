//! Collaborators supplied by the host application.
//!
//! The builder only ever reads through these traits:
//!
//! - [`Catalog`]: lookups for journals, issues, submissions and citations
//! - [`LanguageCodes`]: 2-letter to 3-letter ISO 639 language codes
//! - [`HtmlToText`]: plain-text normalization of rich-text fields
//!
//! [`MemoryCatalog`], [`Iso639`] and [`PlainText`] are the stock
//! implementations; a host embedding the library can supply its own.

use super::*;

mod html;
mod language;
mod memory;

pub use html::PlainText;
pub use language::Iso639;
pub use memory::{HostSnapshot, MemoryCatalog};

/// Read access to the host's stored records.
///
/// All lookups return owned records; a `None` means the host has no such
/// record, which the callers decide how to treat.
pub trait Catalog {
  /// Journal by context identifier.
  fn journal(&self, id: u64) -> Option<Journal>;

  /// Journal by URL path.
  fn journal_by_path(&self, path: &str) -> Option<Journal>;

  /// Submission by identifier.
  fn submission(&self, id: u64) -> Option<Submission>;

  /// Issue by identifier.
  fn issue(&self, id: u64) -> Option<Issue>;

  /// Issue a submission is published in, restricted to the given journal.
  fn issue_for_submission(&self, submission_id: u64, journal_id: u64) -> Option<Issue>;

  /// Citations of a publication, in reference-list order.
  fn citations(&self, publication_id: u64) -> Vec<Citation>;

  /// Issue addressed either by its numeric id or by its URL path, within a journal.
  fn issue_by_best_id(&self, best_id: &str, journal_id: u64) -> Option<Issue> {
    let by_id = best_id.parse::<u64>().ok().and_then(|id| self.issue(id));
    by_id.filter(|issue| issue.journal_id == journal_id).or_else(|| {
      self.issues_of(journal_id).into_iter().find(|issue| issue.url_path.as_deref() == Some(best_id))
    })
  }

  /// All issues of a journal. Used by [`Catalog::issue_by_best_id`] for path lookups.
  fn issues_of(&self, journal_id: u64) -> Vec<Issue>;
}

/// Maps a 2-letter ISO 639-1 language code to its 3-letter ISO 639-2 code.
pub trait LanguageCodes {
  /// Lowercase 3-letter code for `two_letter`, if known.
  fn three_letter(&self, two_letter: &str) -> Option<&'static str>;

  /// The uppercased 3-letter code used in `lang` attributes; unknown codes give an empty string.
  fn lang_attribute(&self, two_letter: &str) -> String {
    self.three_letter(two_letter).map(str::to_uppercase).unwrap_or_default()
  }
}

/// Converts rich-text (HTML) values into plain text.
pub trait HtmlToText {
  /// Plain-text rendition of `html`.
  fn html_to_text(&self, html: &str) -> String;
}
