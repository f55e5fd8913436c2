//! Subtrees the indexer requires but the host has no data for.

use super::*;

/// Article `files`: the full text entry and an empty `furl`.
pub fn article_files(config: &ExportConfig) -> Element {
  Element::new("files")
    .with_child(
      Element::new("file").with_attr("desc", "fullText").with_text(config.full_text_file_name.as_str()),
    )
    .with_child(Element::new("furl"))
}

/// Issue `files` holding the cover entry.
pub fn issue_files(config: &ExportConfig) -> Element {
  Element::new("files")
    .with_child(Element::new("file").with_attr("desc", "cover").with_text(config.cover_file_name.as_str()))
}

/// `rubrics` with one empty `rubric`.
pub fn rubrics() -> Element { Element::new("rubrics").with_child(Element::new("rubric")) }

/// `fundings` with one empty Russian `funding`.
pub fn fundings() -> Element {
  Element::new("fundings").with_child(Element::new("funding").with_attr("lang", LANG_RUS))
}
