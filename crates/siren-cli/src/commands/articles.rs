//! Export of selected articles.

use super::*;

/// Options of [`Commands::Articles`].
#[derive(Args, Clone)]
pub struct ArticlesOptions {
  /// URL path of the journal
  pub journal: String,

  /// Submission ids, exported in the given order
  #[arg(required = true)]
  pub ids: Vec<u64>,

  /// Output file or directory; stdout when omitted
  #[arg(long, short)]
  pub output: Option<PathBuf>,
}

/// Function for the [`Commands::Articles`] in the CLI.
pub fn articles(cli: &Cli, options: &ArticlesOptions) -> Result<()> {
  let config = load_config(cli)?;
  let catalog = load_catalog(cli)?;
  let journal = find_journal(&catalog, &options.journal)?;
  debug!("Exporting {} article(s) of journal {}", options.ids.len(), journal.id);

  let export = Exporter::new(&catalog, &config).export_submissions(&options.ids, journal.id)?;
  deliver(cli, &export, "articles", journal.id, options.output.as_deref())
}
