//! Batch selection, serialization and the validation report.
//!
//! The [`Exporter`] is the entry point a host calls: it picks the submissions
//! of a journal context, builds the document, serializes it and runs the
//! advisory validation pass over the produced text.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use super::*;
use crate::{
  builder::DocumentBuilder,
  config::ExportConfig,
  host::Catalog,
  xml::{validate, Validation},
};

/// A serialized Siren document with its validation findings.
#[derive(Debug, Clone)]
pub struct Export {
  /// The serialized document, returned even when validation found problems
  pub xml:         String,
  /// Everything the validation pass reported
  pub diagnostics: Validation,
}

/// Exports submissions of a journal context through a [`Catalog`].
pub struct Exporter<'a, C: Catalog + ?Sized> {
  catalog: &'a C,
  config:  &'a ExportConfig,
}

impl<'a, C: Catalog + ?Sized> Exporter<'a, C> {
  /// An exporter reading from `catalog`.
  pub fn new(catalog: &'a C, config: &'a ExportConfig) -> Self { Self { catalog, config } }

  /// Exports the given submissions of journal `context_id`, in the requested order.
  ///
  /// Unknown ids and submissions of other journals are skipped.
  pub fn export_submissions(&self, submission_ids: &[u64], context_id: u64) -> Result<Export> {
    let journal = self.journal(context_id)?;
    let submissions: Vec<Submission> = submission_ids
      .iter()
      .filter_map(|&id| {
        let submission = self.catalog.submission(id).filter(|submission| submission.context_id == context_id);
        if submission.is_none() {
          debug!("Skipping submission {id}: not found in journal {context_id}");
        }
        submission
      })
      .collect();
    self.export(&journal, &submissions)
  }

  /// Exports every submission published in the given issues of journal `context_id`.
  ///
  /// Submissions follow issue order, then each issue's table of contents. A
  /// submission linked to several issues is exported once.
  pub fn export_issues(&self, issue_ids: &[u64], context_id: u64) -> Result<Export> {
    let journal = self.journal(context_id)?;
    let mut seen = HashSet::new();
    let mut submissions = Vec::new();
    for &issue_id in issue_ids {
      let Some(issue) = self.catalog.issue(issue_id).filter(|issue| issue.journal_id == context_id) else {
        debug!("Skipping issue {issue_id}: not found in journal {context_id}");
        continue;
      };
      for &submission_id in &issue.submission_ids {
        if !seen.insert(submission_id) {
          continue;
        }
        match self.catalog.submission(submission_id) {
          Some(submission) if submission.context_id == context_id => submissions.push(submission),
          _ => debug!("Skipping submission {submission_id} of issue {issue_id}"),
        }
      }
    }
    self.export(&journal, &submissions)
  }

  fn journal(&self, context_id: u64) -> Result<Journal> {
    self.catalog.journal(context_id).ok_or(SirenError::JournalNotFound(context_id))
  }

  fn export(&self, journal: &Journal, submissions: &[Submission]) -> Result<Export> {
    let document = DocumentBuilder::new(self.catalog, self.config).build(journal, submissions)?;
    let xml = document.to_xml(self.config.indent)?;
    let diagnostics = validate(&xml);
    for diagnostic in diagnostics.errors() {
      warn!("Siren validation: {diagnostic}");
    }
    debug!(
      "Exported {} submission(s) of journal {} with {} diagnostic(s)",
      submissions.len(),
      journal.id,
      diagnostics.diagnostics().len()
    );
    Ok(Export { xml, diagnostics })
  }
}

/// File name for an export: `siren-YYYYMMDD-HHMMSS-<objects>-<context>.xml`.
///
/// ```
/// use chrono::NaiveDate;
/// use siren::export::export_file_name;
///
/// let at = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().and_hms_opt(8, 5, 0).unwrap();
/// assert_eq!(export_file_name("articles", 1, at), "siren-20240229-080500-articles-1.xml");
/// ```
pub fn export_file_name(objects: &str, context_id: u64, timestamp: NaiveDateTime) -> String {
  format!("siren-{}-{objects}-{context_id}.xml", timestamp.format("%Y%m%d-%H%M%S"))
}
