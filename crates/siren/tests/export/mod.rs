use siren::{
  export::export_file_name,
  xml::{render_report, validate, Severity},
};

use super::*;

#[traced_test]
#[test]
fn exports_an_issue_addressed_by_path() -> TestResult<()> {
  let catalog = fixture_catalog();
  let config = ExportConfig::default();
  let journal = catalog.journal_by_path("amph").ok_or("no journal")?;
  let issue = catalog.issue_by_best_id("2021-3", journal.id).ok_or("no issue")?;

  let export = Exporter::new(&catalog, &config).export_issues(&[issue.id], journal.id)?;
  assert!(!export.diagnostics.has_errors());
  assert!(export.xml.contains("<artTitle lang=\"ENG\">Heat transfer in thin films</artTitle>"));
  assert!(export.xml.contains("<artTitle lang=\"ENG\">Spectral methods</artTitle>"));
  assert!(export.xml.contains("<text>Petrov &amp; Sidorov &lt;2019&gt;</text>"));
  Ok(())
}

#[test]
fn foreign_submissions_are_not_exported() -> TestResult<()> {
  let catalog = fixture_catalog();
  let config = ExportConfig::default();
  let export = Exporter::new(&catalog, &config).export_submissions(&[20, 12], 1)?;
  assert!(!export.xml.contains("Plain ISSN"));
  assert_eq!(export.xml.matches("<article>").count(), 1);
  Ok(())
}

#[test]
fn writes_export_to_generated_file_name() -> TestResult<()> {
  let catalog = fixture_catalog();
  let config = ExportConfig::default();
  let export = Exporter::new(&catalog, &config).export_submissions(&[12, 13], 1)?;

  let dir = tempdir()?;
  let timestamp = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
    .and_then(|date| date.and_hms_opt(3, 4, 5))
    .ok_or("bad timestamp")?;
  let path = dir.path().join(export_file_name("articles", 1, timestamp));
  std::fs::write(&path, &export.xml)?;

  assert!(path.ends_with("siren-20240102-030405-articles-1.xml"));
  let written = std::fs::read_to_string(&path)?;
  assert_eq!(written, export.xml);
  assert!(validate(&written).is_empty());
  Ok(())
}

#[test]
fn malformed_markup_is_reported_with_context() {
  let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE journal SYSTEM \
             \"http://www.w3.org/2001/XMLSchema\">\n<journal>\n  <issue>\n  </articles>\n</journal>\n";
  let validation = validate(xml);
  assert!(validation.has_errors());
  let first = validation.errors().next().unwrap();
  assert_eq!(first.severity, Severity::Fatal);
  assert_eq!(first.line, 5);

  let report = render_report(validation.errors(), xml);
  assert!(report.contains("</articles>"));
  assert!(report.contains('^'));
}
