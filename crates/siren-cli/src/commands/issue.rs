//! Export of a whole issue.

use super::*;

/// Options of [`Commands::Issue`].
#[derive(Args, Clone)]
pub struct IssueOptions {
  /// URL path of the journal
  pub journal: String,

  /// Issue id or issue URL path
  pub issue: String,

  /// Output file or directory; stdout when omitted
  #[arg(long, short)]
  pub output: Option<PathBuf>,
}

/// Function for the [`Commands::Issue`] in the CLI.
pub fn issue(cli: &Cli, options: &IssueOptions) -> Result<()> {
  let config = load_config(cli)?;
  let catalog = load_catalog(cli)?;
  let journal = find_journal(&catalog, &options.journal)?;
  let issue = catalog
    .issue_by_best_id(&options.issue, journal.id)
    .ok_or_else(|| SirenError::IssueNotFound(options.issue.clone()))?;
  debug!("Exporting issue {} of journal {}", issue.id, journal.id);

  let export = Exporter::new(&catalog, &config).export_issues(&[issue.id], journal.id)?;
  deliver(cli, &export, "issues", journal.id, options.output.as_deref())
}
