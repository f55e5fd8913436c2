//! Article classification codes.

use super::*;

/// Classification schemes the indexer accepts but the host never records.
const PLACEHOLDER_CODES: [&str; 6] = ["udk", "bbk", "jel", "msc", "pacs", "anycode"];

/// `codes`: the stored DOI when present, then the empty classification placeholders.
pub fn codes(publication: &Publication) -> Element {
  let doi = publication.stored_pub_id("doi").map(|doi| Element::text_node("doi", doi));
  Element::new("codes")
    .with_optional(doi)
    .with_children(PLACEHOLDER_CODES.into_iter().map(Element::new))
}
