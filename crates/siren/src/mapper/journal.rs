//! Journal-level nodes emitted once per document.

use super::*;

/// `titleid`, `issn` (print ISSN, else generic ISSN, else omitted), `eissn`
/// (online ISSN, else omitted) and the `journalInfo` block.
pub fn header(journal: &Journal, config: &ExportConfig) -> Vec<Element> {
  let mut nodes = vec![Element::text_node("titleid", config.title_id.as_str())];
  if let Some(issn) = journal.preferred_issn() {
    nodes.push(Element::text_node("issn", issn));
  }
  if let Some(eissn) = journal.electronic_issn() {
    nodes.push(Element::text_node("eissn", eissn));
  }
  nodes.push(
    Element::new("journalInfo")
      .with_attr("lang", config.journal_lang.as_str())
      .with_child(Element::text_node("title", config.journal_title.as_str())),
  );
  nodes
}
