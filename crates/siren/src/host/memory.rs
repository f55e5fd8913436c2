//! In-memory catalog over a host snapshot.
//!
//! A snapshot is a JSON dump of the records the host would otherwise serve
//! from its database:
//!
//! ```json
//! {
//!   "journals":    [{ "id": 1, "path": "amph", "print_issn": "1234-5678" }],
//!   "issues":      [{ "id": 7, "journal_id": 1, "volume": "3", "show_volume": true,
//!                     "submission_ids": [12] }],
//!   "submissions": [{ "id": 12, "context_id": 1,
//!                     "current_publication": { "id": 40, "locale": "ru_RU" } }],
//!   "citations":   [{ "publication_id": 40, "raw_citation": "Smith, J. (2020).", "seq": 1 }]
//! }
//! ```

use super::*;

/// Everything the exporter may need from the host, as plain records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostSnapshot {
  /// Journal contexts
  #[serde(default)]
  pub journals:    Vec<Journal>,
  /// Issues of all journals
  #[serde(default)]
  pub issues:      Vec<Issue>,
  /// Submissions with their current publication
  #[serde(default)]
  pub submissions: Vec<Submission>,
  /// Citations of all publications
  #[serde(default)]
  pub citations:   Vec<Citation>,
}

impl HostSnapshot {
  /// Reads a snapshot from a JSON file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading host snapshot from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Self::from_json(&content)
  }

  /// Parses a snapshot from JSON text.
  pub fn from_json(content: &str) -> Result<Self> { Ok(serde_json::from_str(content)?) }

  /// Returns the default location of the host snapshot.
  ///
  /// - On Unix: `~/.local/share/siren/snapshot.json`
  /// - On macOS: `~/Library/Application Support/siren/snapshot.json`
  /// - On Windows: `%APPDATA%\siren\snapshot.json`
  /// - Fallback: `./siren/snapshot.json`
  pub fn default_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("siren").join("snapshot.json")
  }
}

/// A [`Catalog`] answering lookups from a [`HostSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
  snapshot:    HostSnapshot,
  journals:    HashMap<u64, usize>,
  issues:      HashMap<u64, usize>,
  submissions: HashMap<u64, usize>,
}

impl MemoryCatalog {
  /// Indexes the snapshot records by identifier.
  ///
  /// When identifiers repeat, the first record wins.
  pub fn new(snapshot: HostSnapshot) -> Self {
    fn index<T>(records: &[T], id: impl Fn(&T) -> u64) -> HashMap<u64, usize> {
      let mut map = HashMap::with_capacity(records.len());
      for (position, record) in records.iter().enumerate() {
        map.entry(id(record)).or_insert(position);
      }
      map
    }

    let journals = index(&snapshot.journals, |journal| journal.id);
    let issues = index(&snapshot.issues, |issue| issue.id);
    let submissions = index(&snapshot.submissions, |submission| submission.id);
    trace!(
      "Indexed snapshot with {} journals, {} issues, {} submissions, {} citations",
      journals.len(),
      issues.len(),
      submissions.len(),
      snapshot.citations.len()
    );
    Self { snapshot, journals, issues, submissions }
  }

  /// The underlying snapshot.
  pub fn snapshot(&self) -> &HostSnapshot { &self.snapshot }
}

impl Catalog for MemoryCatalog {
  fn journal(&self, id: u64) -> Option<Journal> {
    self.journals.get(&id).map(|&position| self.snapshot.journals[position].clone())
  }

  fn journal_by_path(&self, path: &str) -> Option<Journal> {
    self.snapshot.journals.iter().find(|journal| journal.path == path).cloned()
  }

  fn submission(&self, id: u64) -> Option<Submission> {
    self.submissions.get(&id).map(|&position| self.snapshot.submissions[position].clone())
  }

  fn issue(&self, id: u64) -> Option<Issue> {
    self.issues.get(&id).map(|&position| self.snapshot.issues[position].clone())
  }

  fn issue_for_submission(&self, submission_id: u64, journal_id: u64) -> Option<Issue> {
    self
      .snapshot
      .issues
      .iter()
      .find(|issue| issue.journal_id == journal_id && issue.submission_ids.contains(&submission_id))
      .cloned()
  }

  fn citations(&self, publication_id: u64) -> Vec<Citation> {
    let mut citations: Vec<Citation> = self
      .snapshot
      .citations
      .iter()
      .filter(|citation| citation.publication_id == publication_id)
      .cloned()
      .collect();
    // Stable sort keeps snapshot order for equal positions.
    citations.sort_by_key(|citation| citation.seq);
    citations
  }

  fn issues_of(&self, journal_id: u64) -> Vec<Issue> {
    self.snapshot.issues.iter().filter(|issue| issue.journal_id == journal_id).cloned().collect()
  }
}
