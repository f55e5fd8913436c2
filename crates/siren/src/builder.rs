//! Assembles the Siren document for a batch of submissions.
//!
//! The document has one journal header, one `issue` subtree and one `article`
//! per submission, in caller order:
//!
//! ```text
//! journal
//! ├── titleid, issn?, eissn?, journalInfo
//! └── issue
//!     ├── volume?, number?, altNumber, pages, dateUni?, issTitle, codes
//!     ├── articles
//!     │   ├── section
//!     │   │   └── secTitle
//!     │   └── article*
//!     └── files
//! ```
//!
//! The journal header and the issue subtree describe the journal and issue of
//! the first submission, which may differ from the journal passed in. Journal and
//! issue records are resolved once per journal context and reused for every
//! further submission of that context.

use std::collections::hash_map::Entry;

use super::*;
use crate::{
  config::ExportConfig,
  host::{Catalog, HtmlToText, Iso639, LanguageCodes, PlainText},
  mapper::{
    authors::{self, AuthorLocale},
    citations, codes, dates, issue, journal, keywords, placeholders, text,
  },
  xml::{DocType, Element, SirenDocument},
};

/// Name of the document root, announced by the DOCTYPE.
pub const ROOT_ELEMENT: &str = "journal";

/// Journal and issue records of one journal context.
#[derive(Debug, Clone)]
struct ContextRecords {
  journal: Journal,
  issue:   Option<Issue>,
}

/// Builds [`SirenDocument`]s from host records.
pub struct DocumentBuilder<'a, C: Catalog + ?Sized> {
  catalog:   &'a C,
  config:    &'a ExportConfig,
  languages: &'a dyn LanguageCodes,
  html:      &'a dyn HtmlToText,
}

impl<'a, C: Catalog + ?Sized> DocumentBuilder<'a, C> {
  /// A builder using the stock [`Iso639`] table and [`PlainText`] normalizer.
  pub fn new(catalog: &'a C, config: &'a ExportConfig) -> Self {
    Self { catalog, config, languages: &Iso639, html: &PlainText }
  }

  /// Replaces the language code table.
  pub fn with_language_codes(mut self, languages: &'a dyn LanguageCodes) -> Self {
    self.languages = languages;
    self
  }

  /// Replaces the HTML normalizer.
  pub fn with_html(mut self, html: &'a dyn HtmlToText) -> Self {
    self.html = html;
    self
  }

  /// Builds the document for `submissions` of `journal`.
  ///
  /// # Errors
  ///
  /// - [`SirenError::EmptyBatch`] when `submissions` is empty
  /// - [`SirenError::JournalNotFound`] when a submission belongs to a journal
  ///   context the catalog cannot resolve
  pub fn build(&self, journal: &Journal, submissions: &[Submission]) -> Result<SirenDocument> {
    let first = submissions.first().ok_or(SirenError::EmptyBatch)?;
    debug!("Building Siren document for {} submission(s) of journal {}", submissions.len(), journal.id);

    let seed = if first.context_id == journal.id {
      ContextRecords { journal: journal.clone(), issue: self.catalog.issue_for_submission(first.id, journal.id) }
    } else {
      debug!("Submission {} belongs to journal {}, not {}", first.id, first.context_id, journal.id);
      self.resolve(first)?
    };
    if seed.issue.is_none() {
      warn!("Submission {} is not published in an issue of journal {}", first.id, seed.journal.id);
    }
    let journal_header = journal::header(&seed.journal, self.config);
    let issue_header = issue::header(seed.issue.as_ref());

    let mut contexts = HashMap::from([(first.context_id, seed)]);
    let mut articles = Vec::with_capacity(submissions.len());
    for submission in submissions {
      let records = match contexts.entry(submission.context_id) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => entry.insert(self.resolve(submission)?),
      };
      articles.push(self.article(submission, records));
    }

    let section = Element::new("section").with_child(
      Element::new("secTitle")
        .with_attr("lang", self.config.section_lang.as_str())
        .with_text(self.config.section_title.as_str()),
    );
    let issue = Element::new("issue")
      .with_children(issue_header)
      .with_child(Element::new("articles").with_child(section).with_children(articles))
      .with_child(placeholders::issue_files(self.config));

    let root = Element::new(ROOT_ELEMENT).with_children(journal_header).with_child(issue);
    Ok(SirenDocument {
      doctype: DocType {
        root_name: ROOT_ELEMENT.to_string(),
        system_id: self.config.doctype_system_id.clone(),
      },
      root,
    })
  }

  /// Looks up the journal and issue of a context not seen yet.
  fn resolve(&self, submission: &Submission) -> Result<ContextRecords> {
    let context_id = submission.context_id;
    trace!("Resolving journal context {context_id} for submission {}", submission.id);
    let journal = self.catalog.journal(context_id).ok_or(SirenError::JournalNotFound(context_id))?;
    let issue = self.catalog.issue_for_submission(submission.id, context_id);
    Ok(ContextRecords { journal, issue })
  }

  fn article(&self, submission: &Submission, records: &ContextRecords) -> Element {
    let publication = &submission.current_publication;
    trace!("Mapping submission {} (publication {})", submission.id, publication.id);

    let lang = self.languages.lang_attribute(publication.language());
    let author_locale = AuthorLocale {
      lang:     &lang,
      locale:   &publication.locale,
      fallback: &records.journal.primary_locale,
    };
    let citations = self.catalog.citations(publication.id);

    Element::new("article")
      .with_child(Element::text_node("artType", self.config.article_type.as_str()))
      .with_child(Element::text_node("langPubl", self.config.publication_language.as_str()))
      .with_optional(publication.starting_page().map(|page| Element::text_node("pages", page)))
      .with_optional(authors::authors(&publication.authors, author_locale))
      .with_child(text::titles(publication))
      .with_child(text::abstracts(publication, self.html))
      .with_child(text::language_marker(publication, self.languages))
      .with_child(codes::codes(publication))
      .with_child(keywords::keywords(publication))
      .with_optional(citations::references(&citations))
      .with_child(placeholders::article_files(self.config))
      .with_child(placeholders::rubrics())
      .with_child(placeholders::fundings())
      .with_child(dates::dates(publication, records.issue.as_ref()))
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;
  use crate::host::{HostSnapshot, MemoryCatalog};

  /// Counts journal and issue lookups of a wrapped catalog.
  struct CountingCatalog {
    inner:           MemoryCatalog,
    journal_lookups: Cell<usize>,
    issue_lookups:   Cell<usize>,
  }

  impl CountingCatalog {
    fn new(snapshot: HostSnapshot) -> Self {
      Self { inner: MemoryCatalog::new(snapshot), journal_lookups: Cell::new(0), issue_lookups: Cell::new(0) }
    }
  }

  impl Catalog for CountingCatalog {
    fn journal(&self, id: u64) -> Option<Journal> {
      self.journal_lookups.set(self.journal_lookups.get() + 1);
      self.inner.journal(id)
    }

    fn journal_by_path(&self, path: &str) -> Option<Journal> { self.inner.journal_by_path(path) }

    fn submission(&self, id: u64) -> Option<Submission> { self.inner.submission(id) }

    fn issue(&self, id: u64) -> Option<Issue> { self.inner.issue(id) }

    fn issue_for_submission(&self, submission_id: u64, journal_id: u64) -> Option<Issue> {
      self.issue_lookups.set(self.issue_lookups.get() + 1);
      self.inner.issue_for_submission(submission_id, journal_id)
    }

    fn citations(&self, publication_id: u64) -> Vec<Citation> { self.inner.citations(publication_id) }

    fn issues_of(&self, journal_id: u64) -> Vec<Issue> { self.inner.issues_of(journal_id) }
  }

  fn journal() -> Journal {
    Journal {
      id: 1,
      print_issn: Some("1234-5678".into()),
      primary_locale: LOCALE_RU.into(),
      ..Default::default()
    }
  }

  fn submission(id: u64, context_id: u64) -> Submission {
    Submission {
      id,
      context_id,
      current_publication: Publication { id: id * 10, locale: LOCALE_RU.into(), ..Default::default() },
    }
  }

  fn snapshot() -> HostSnapshot {
    HostSnapshot {
      journals: vec![journal(), Journal { id: 2, ..Default::default() }],
      issues: vec![
        Issue {
          id: 7,
          journal_id: 1,
          volume: "12".into(),
          number: "3".into(),
          show_volume: true,
          show_number: true,
          date_published: NaiveDate::from_ymd_opt(2021, 9, 30),
          submission_ids: vec![1, 2, 3],
          ..Default::default()
        },
        Issue { id: 8, journal_id: 2, submission_ids: vec![4], ..Default::default() },
      ],
      ..Default::default()
    }
  }

  fn articles(document: &SirenDocument) -> Vec<&Element> {
    document.root.find("issue/articles").unwrap().children_named("article").collect()
  }

  #[test]
  fn empty_batch_is_rejected() {
    let catalog = MemoryCatalog::default();
    let config = ExportConfig::default();
    let result = DocumentBuilder::new(&catalog, &config).build(&journal(), &[]);
    assert!(matches!(result, Err(SirenError::EmptyBatch)));
  }

  #[test]
  fn document_skeleton() {
    let catalog = MemoryCatalog::new(snapshot());
    let config = ExportConfig::default();
    let document =
      DocumentBuilder::new(&catalog, &config).build(&journal(), &[submission(1, 1), submission(2, 1)]).unwrap();

    assert_eq!(document.doctype.root_name, "journal");
    assert_eq!(document.root.child_names(), ["titleid", "issn", "journalInfo", "issue"]);
    assert_eq!(document.root.find("issue").unwrap().child_names(), [
      "volume", "number", "altNumber", "pages", "dateUni", "issTitle", "codes", "articles", "files"
    ]);
    let articles = document.root.find("issue/articles").unwrap();
    assert_eq!(articles.child_names(), ["section", "article", "article"]);
    let section = articles.find("section").unwrap();
    assert_eq!(section.child_names(), ["secTitle"]);
    assert_eq!(section.find("secTitle").and_then(|title| title.attr("lang")), Some("RUS"));
  }

  #[test]
  fn article_children_in_fixed_order() {
    let catalog = MemoryCatalog::new(snapshot());
    let config = ExportConfig::default();
    let mut with_everything = submission(1, 1);
    let publication = &mut with_everything.current_publication;
    publication.pages = Some("17".into());
    publication.authors.push(Author::new("Ivan", "Ivanov", "ivanov@example.org"));
    let bare = submission(2, 1);

    let document = DocumentBuilder::new(&catalog, &config).build(&journal(), &[with_everything, bare]).unwrap();
    let articles = articles(&document);
    assert_eq!(articles[0].child_names(), [
      "artType", "langPubl", "pages", "authors", "artTitles", "abstracts", "text", "codes", "keywords",
      "files", "rubrics", "fundings", "dates"
    ]);
    assert_eq!(articles[1].child_names(), [
      "artType", "langPubl", "artTitles", "abstracts", "text", "codes", "keywords", "files", "rubrics",
      "fundings", "dates"
    ]);
    assert_eq!(articles[1].find("dates/dateReceived").and_then(Element::text), Some("30.09.2021"));
  }

  #[test]
  fn missing_issue_omits_issue_fields() {
    let catalog = MemoryCatalog::new(HostSnapshot { journals: vec![journal()], ..Default::default() });
    let config = ExportConfig::default();
    let document = DocumentBuilder::new(&catalog, &config).build(&journal(), &[submission(9, 1)]).unwrap();
    assert_eq!(document.root.find("issue").unwrap().child_names(), [
      "altNumber", "pages", "issTitle", "codes", "articles", "files"
    ]);
    assert!(articles(&document)[0].find("dates").unwrap().is_placeholder());
  }

  #[test]
  fn context_lookups_are_memoized() {
    let catalog = CountingCatalog::new(snapshot());
    let config = ExportConfig::default();
    let batch = [submission(1, 1), submission(2, 1), submission(4, 2), submission(3, 1), submission(5, 2)];
    DocumentBuilder::new(&catalog, &config).build(&journal(), &batch).unwrap();

    assert_eq!(catalog.journal_lookups.get(), 1);
    assert_eq!(catalog.issue_lookups.get(), 2);
  }

  #[test]
  fn headers_follow_the_first_submission_context() {
    let mut snapshot = snapshot();
    snapshot.journals[1].print_issn = Some("2222-2222".into());
    snapshot.issues[1].volume = "5".into();
    snapshot.issues[1].show_volume = true;
    let catalog = MemoryCatalog::new(snapshot);
    let config = ExportConfig::default();
    let document = DocumentBuilder::new(&catalog, &config).build(&journal(), &[submission(4, 2)]).unwrap();

    assert_eq!(document.root.find("issn").and_then(Element::text), Some("2222-2222"));
    assert_eq!(document.root.find("issue/volume").and_then(Element::text), Some("5"));
  }

  #[test]
  fn unknown_first_context_fails() {
    let catalog = MemoryCatalog::new(snapshot());
    let config = ExportConfig::default();
    let result = DocumentBuilder::new(&catalog, &config).build(&journal(), &[submission(6, 99)]);
    assert!(matches!(result, Err(SirenError::JournalNotFound(99))));
  }

  #[test]
  fn unknown_context_fails() {
    let catalog = MemoryCatalog::new(snapshot());
    let config = ExportConfig::default();
    let result = DocumentBuilder::new(&catalog, &config).build(&journal(), &[submission(1, 1), submission(6, 99)]);
    assert!(matches!(result, Err(SirenError::JournalNotFound(99))));
  }

  #[test]
  fn custom_collaborators_are_used() {
    struct Shouting;
    impl HtmlToText for Shouting {
      fn html_to_text(&self, html: &str) -> String { html.to_uppercase() }
    }
    struct NoCodes;
    impl LanguageCodes for NoCodes {
      fn three_letter(&self, _: &str) -> Option<&'static str> { None }
    }

    let catalog = MemoryCatalog::new(snapshot());
    let config = ExportConfig::default();
    let mut item = submission(1, 1);
    item.current_publication.abstract_text.insert(LOCALE_EN.into(), "quiet".into());
    let document = DocumentBuilder::new(&catalog, &config)
      .with_html(&Shouting)
      .with_language_codes(&NoCodes)
      .build(&journal(), &[item])
      .unwrap();

    let article = articles(&document)[0];
    assert_eq!(article.find("abstracts/abstract").and_then(Element::text), Some("QUIET"));
    assert_eq!(article.find("text").and_then(|node| node.attr("lang")), Some(""));
  }
}
