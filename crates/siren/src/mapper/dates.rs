//! Date formatting and the article `dates` block.

use super::*;

/// Four-digit year, as used by `dateUni`.
pub fn year(date: NaiveDate) -> String { date.format("%Y").to_string() }

/// `DD.MM.YYYY`, as used by `dateReceived` / `dateAccepted`.
///
/// ```
/// use chrono::NaiveDate;
/// use siren::mapper::dates::day_month_year;
///
/// let date = NaiveDate::from_ymd_opt(2020, 3, 7).unwrap();
/// assert_eq!(day_month_year(date), "07.03.2020");
/// ```
pub fn day_month_year(date: NaiveDate) -> String { date.format("%d.%m.%Y").to_string() }

/// The date an article is dated by: its publication date, else the issue's.
pub fn resolve(publication: &Publication, issue: Option<&Issue>) -> Option<NaiveDate> {
  publication.date_published.or_else(|| issue.and_then(|issue| issue.date_published))
}

/// `dates` with `dateReceived` and `dateAccepted`, both carrying the resolved
/// date. The container is always emitted; both children are omitted together
/// when no date resolves.
pub fn dates(publication: &Publication, issue: Option<&Issue>) -> Element {
  let node = Element::new("dates");
  match resolve(publication, issue).map(day_month_year) {
    Some(date) => node
      .with_child(Element::text_node("dateReceived", date.as_str()))
      .with_child(Element::text_node("dateAccepted", date)),
    None => node,
  }
}
