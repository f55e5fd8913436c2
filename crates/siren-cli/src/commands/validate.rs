//! Validation of existing Siren files.

use super::*;

/// Options of [`Commands::Validate`].
#[derive(Args, Clone)]
pub struct ValidateOptions {
  /// Siren XML file to check
  pub file: PathBuf,
}

/// Function for the [`Commands::Validate`] in the CLI.
///
/// Warnings are shown but only errors make the command fail.
pub fn validate(cli: &Cli, options: &ValidateOptions) -> Result<()> {
  let xml = fs::read_to_string(&options.file)?;
  let validation = siren::xml::validate(&xml);
  if validation.is_empty() {
    return cli.reply(ResponseContent::Success(&format!(
      "{} is a well-formed Siren document",
      options.file.display()
    )));
  }

  cli.reply(ResponseContent::Report(&siren::xml::render_report(validation.diagnostics(), &xml)))?;
  match validation.errors().count() {
    0 => Ok(()),
    count => Err(SirenCliError::Invalid(count)),
  }
}
