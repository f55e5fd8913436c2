use super::*;

#[test]
fn two_authors_one_citation() -> TestResult<()> {
  let document = build_document(&fixture_catalog(), 1, &[12])?;
  let root = &document.root;
  assert_eq!(text_at(root, "issn"), Some("1234-5678"));
  assert_eq!(text_at(root, "issue/volume"), Some("12"));
  assert_eq!(text_at(root, "issue/number"), Some("3"));
  assert_eq!(text_at(root, "issue/dateUni"), Some("2021"));

  let article = articles(&document)[0];
  assert_eq!(text_at(article, "pages"), Some("17"));
  assert_eq!(text_at(article, "codes/doi"), Some("10.1000/amph.2021.12"));
  assert_eq!(article.find("text").and_then(|text| text.attr("lang")), Some("RUS"));

  let authors: Vec<_> = article.find("authors").ok_or("no authors")?.children_named("author").collect();
  let first = authors[0].find("individInfo").ok_or("no info")?;
  assert_eq!(first.attr("lang"), Some("RUS"));
  assert_eq!(text_at(first, "surname"), Some("Ivanov"));
  assert_eq!(text_at(first, "initials"), Some("Иван"));
  assert_eq!(text_at(first, "orgName"), Some("МФТИ. ivanov@example.org"));

  let second = authors[1].find("individInfo").ok_or("no info")?;
  assert_eq!(text_at(second, "surname"), Some("Maria"));
  let initials = second.find("initials").ok_or("no initials")?;
  assert_eq!(initials.attr("EmptyYN"), Some("Y"));
  assert!(initials.is_placeholder());

  assert_eq!(text_at(article, "references/reference/refInfo/text"), Some("Smith, J. (2020)."));
  Ok(())
}

#[test]
fn serialized_scenario() -> TestResult<()> {
  let xml = build_document(&fixture_catalog(), 1, &[12])?.to_xml(2)?;
  let mut lines = xml.lines();
  assert_eq!(lines.next(), Some("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
  assert_eq!(lines.next(), Some("<!DOCTYPE journal SYSTEM \"http://www.w3.org/2001/XMLSchema\">"));
  assert_eq!(lines.next(), Some("<journal>"));
  assert_eq!(lines.next(), Some("  <titleid>47212961</titleid>"));
  assert_eq!(lines.next(), Some("  <issn>1234-5678</issn>"));

  assert!(xml.contains("<title>ПРИКЛАДНАЯ МАТЕМАТИКА &amp; ФИЗИКА</title>"));
  assert!(xml.contains("<initials EmptyYN=\"Y\"/>"));
  assert!(xml.contains("<dateReceived>05.10.2021</dateReceived>"));
  assert!(xml.contains("<file desc=\"cover\">cover</file>"));
  assert!(xml.ends_with("</journal>\n"));
  assert!(!siren::xml::validate(&xml).has_errors());
  Ok(())
}
