//! Leading children of the `issue` node.

use super::*;

/// `volume`, `number`, `altNumber`, `pages`, `dateUni`, `issTitle` and `codes/doi`, in that order.
///
/// Without an issue only the placeholders are emitted.
pub fn header(issue: Option<&Issue>) -> Vec<Element> {
  let mut nodes = Vec::with_capacity(7);
  if let Some(issue) = issue.filter(|issue| issue.show_volume) {
    nodes.push(Element::text_node("volume", issue.volume.as_str()));
  }
  if let Some(issue) = issue.filter(|issue| issue.show_number) {
    nodes.push(Element::text_node("number", issue.number.as_str()));
  }
  nodes.push(Element::new("altNumber"));
  nodes.push(Element::new("pages"));
  if let Some(date) = issue.and_then(|issue| issue.date_published) {
    nodes.push(Element::text_node("dateUni", dates::year(date)));
  }
  nodes.push(Element::new("issTitle"));
  nodes.push(Element::new("codes").with_child(Element::new("doi")));
  nodes
}
