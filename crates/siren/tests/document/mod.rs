use super::*;

mod scenario;

#[test]
fn authors_are_numbered_in_list_order() -> TestResult<()> {
  let document = build_document(&fixture_catalog(), 1, &[12])?;
  let authors = articles(&document)[0].find("authors").ok_or("no authors")?;
  let nums: Vec<_> = authors.children_named("author").filter_map(|author| author.attr("num")).collect();
  assert_eq!(nums, ["1", "2"]);
  Ok(())
}

#[test]
fn missing_locales_keep_both_branches() -> TestResult<()> {
  let document = build_document(&fixture_catalog(), 1, &[13])?;
  let article = articles(&document)[0];

  let titles: Vec<_> = article
    .find("artTitles")
    .ok_or("no titles")?
    .children
    .iter()
    .map(|title| (title.attr("lang"), title.text()))
    .collect();
  assert_eq!(titles, [(Some("ENG"), Some("Spectral methods")), (Some("RUS"), Some(""))]);

  let groups = &article.find("keywords").ok_or("no keywords")?.children;
  let english: Vec<_> = groups[0].children.iter().map(|keyword| keyword.text()).collect();
  let russian: Vec<_> = groups[1].children.iter().map(|keyword| keyword.text()).collect();
  assert_eq!(english, [Some("")]);
  assert_eq!(russian, [Some("спектр")]);
  Ok(())
}

#[test]
fn abstracts_are_normalized() -> TestResult<()> {
  let document = build_document(&fixture_catalog(), 1, &[12])?;
  let abstracts = &articles(&document)[0].find("abstracts").ok_or("no abstracts")?.children;
  assert_eq!(abstracts[0].text(), Some("We study heat & mass transfer.\n• films"));
  assert_eq!(abstracts[1].text(), Some(""));
  Ok(())
}

#[test]
fn references_follow_citation_count() -> TestResult<()> {
  let catalog = fixture_catalog();

  let document = build_document(&catalog, 1, &[15])?;
  assert!(articles(&document)[0].find("references").is_none());

  let document = build_document(&catalog, 1, &[13])?;
  let references = articles(&document)[0].find("references").ok_or("no references")?;
  let texts: Vec<_> = references.children_named("reference").filter_map(|r| text_at(r, "refInfo/text")).collect();
  assert_eq!(texts, ["Kuznetsov, A. (2018).", "Petrov & Sidorov <2019>"]);
  Ok(())
}

#[test]
fn dates_share_one_value() -> TestResult<()> {
  let catalog = fixture_catalog();

  let document = build_document(&catalog, 1, &[12, 13])?;
  let articles = articles(&document);
  assert_eq!(text_at(articles[0], "dates/dateReceived"), Some("05.10.2021"));
  assert_eq!(text_at(articles[0], "dates/dateAccepted"), Some("05.10.2021"));
  // No publication date: the issue's date is used.
  assert_eq!(text_at(articles[1], "dates/dateReceived"), Some("30.09.2021"));
  assert_eq!(text_at(articles[1], "dates/dateAccepted"), Some("30.09.2021"));

  let document = build_document(&catalog, 1, &[15])?;
  let dates = self::articles(&document)[0].find("dates").ok_or("no dates")?;
  assert!(dates.children.is_empty());
  Ok(())
}

#[test]
fn issn_selection() -> TestResult<()> {
  let catalog = fixture_catalog();

  let document = build_document(&catalog, 1, &[12])?;
  assert_eq!(text_at(&document.root, "issn"), Some("1234-5678"));
  assert_eq!(text_at(&document.root, "eissn"), Some("8765-4321"));

  let document = build_document(&catalog, 2, &[20])?;
  assert_eq!(text_at(&document.root, "issn"), Some("2222-2222"));
  assert!(document.root.find("eissn").is_none());

  let document = build_document(&catalog, 3, &[30])?;
  assert!(document.root.find("issn").is_none());
  assert_eq!(text_at(&document.root, "eissn"), Some("3333-3333"));
  Ok(())
}

#[test]
fn output_is_deterministic() -> TestResult<()> {
  let catalog = fixture_catalog();
  let first = build_document(&catalog, 1, &[12, 13, 15])?.to_xml(2)?;
  let second = build_document(&catalog, 1, &[12, 13, 15])?.to_xml(2)?;
  assert_eq!(first, second);

  let reloaded = build_document(&fixture_catalog(), 1, &[12, 13, 15])?.to_xml(2)?;
  assert_eq!(first, reloaded);
  Ok(())
}

#[test]
fn issue_header_comes_from_first_submission() -> TestResult<()> {
  let document = build_document(&fixture_catalog(), 1, &[15, 12])?;
  let issue = document.root.find("issue").ok_or("no issue")?;
  assert_eq!(text_at(issue, "volume"), Some("13"));
  assert!(issue.find("number").is_none());
  assert!(issue.find("dateUni").is_none());
  assert_eq!(articles(&document).len(), 2);
  Ok(())
}

#[test]
fn journal_header_comes_from_first_submission_context() -> TestResult<()> {
  let document = build_document(&fixture_catalog(), 1, &[20, 12])?;
  assert_eq!(text_at(&document.root, "issn"), Some("2222-2222"));
  assert!(document.root.find("eissn").is_none());
  assert_eq!(articles(&document).len(), 2);
  Ok(())
}

#[test]
fn articles_are_siblings_of_the_section() -> TestResult<()> {
  let document = build_document(&fixture_catalog(), 1, &[12, 13])?;
  let articles = document.root.find("issue/articles").ok_or("no articles")?;
  assert_eq!(articles.child_names(), ["section", "article", "article"]);
  assert_eq!(articles.find("section").ok_or("no section")?.child_names(), ["secTitle"]);
  Ok(())
}
