//! Subcommands of the `siren` binary and the plumbing they share.

use std::fs;

use chrono::Local;

use super::*;

pub mod articles;
pub mod issue;
pub mod validate;

pub use articles::{articles, ArticlesOptions};
pub use issue::{issue, IssueOptions};
pub use validate::{validate, ValidateOptions};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Export selected articles of a journal
  Articles(ArticlesOptions),

  /// Export every article of an issue
  Issue(IssueOptions),

  /// Check a Siren XML file and report problems
  Validate(ValidateOptions),
}

/// Loads the export configuration named on the command line, else the default one.
fn load_config(cli: &Cli) -> Result<ExportConfig> { Ok(ExportConfig::load(cli.config.as_deref())?) }

/// Loads the host snapshot named on the command line, else the default one.
fn load_catalog(cli: &Cli) -> Result<MemoryCatalog> {
  let path = cli.data.clone().unwrap_or_else(HostSnapshot::default_path);
  trace!("Using host snapshot at: {}", path.display());
  Ok(MemoryCatalog::new(HostSnapshot::from_path(&path)?))
}

/// Journal addressed by its URL path.
fn find_journal(catalog: &MemoryCatalog, path: &str) -> Result<Journal> {
  Ok(catalog.journal_by_path(path).ok_or_else(|| SirenError::UnknownJournal(path.to_string()))?)
}

/// Reports validation errors, then writes the document to `output` or stdout.
///
/// A directory as `output` receives a generated file name. An existing file
/// is only replaced after confirmation.
fn deliver<I: UserInteraction>(
  interaction: &I,
  export: &Export,
  objects: &str,
  context_id: u64,
  output: Option<&Path>,
) -> Result<()> {
  if export.diagnostics.has_errors() {
    let report = siren::xml::render_report(export.diagnostics.errors(), &export.xml);
    interaction.reply(ResponseContent::Warning("The exported document has validation errors:"))?;
    interaction.reply(ResponseContent::Report(&report))?;
  }

  let Some(output) = output else {
    print!("{}", export.xml);
    return Ok(());
  };

  let target = if output.is_dir() {
    output.join(export_file_name(objects, context_id, Local::now().naive_local()))
  } else {
    output.to_path_buf()
  };
  if target.exists()
    && !interaction.confirm(&format!("{} already exists, overwrite it?", target.display()))?
  {
    interaction.reply(ResponseContent::Info("Export cancelled, nothing was written"))?;
    return Ok(());
  }

  debug!("Writing {} bytes to {}", export.xml.len(), target.display());
  fs::write(&target, &export.xml)?;
  interaction.reply(ResponseContent::Success(&format!("Exported to {}", target.display())))
}
