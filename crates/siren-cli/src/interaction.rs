//! Terminal interaction: confirmations and styled status messages.
//!
//! Everything is written to stderr; stdout carries only exported XML.

use dialoguer::Confirm;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";

/// Something to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// An operation completed
  Success(&'a str),
  /// Neutral information
  Info(&'a str),
  /// Something worth attention that did not stop the command
  Warning(&'a str),
  /// A multi-line validation report, shown as is
  Report(&'a str),
  /// The command failed
  Error(&'a SirenCliError),
}

/// How commands talk to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Shows a message.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

impl UserInteraction for Cli {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      trace!("Accepting default for: {message}");
      return Ok(true);
    }
    let prompt = format!("{}{message}", style(PROMPT_PREFIX).for_stderr().cyan());
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Success(message) =>
        eprintln!("{} {}", style(SUCCESS_PREFIX).for_stderr().green(), message),
      ResponseContent::Info(message) =>
        eprintln!("{} {}", style(INFO_PREFIX).for_stderr().blue(), message),
      ResponseContent::Warning(message) =>
        eprintln!("{} {}", style(WARNING_PREFIX).for_stderr().yellow(), style(message).for_stderr().yellow()),
      ResponseContent::Report(report) => eprint!("{report}"),
      ResponseContent::Error(error) =>
        eprintln!("{} {}", style(ERROR_PREFIX).for_stderr().red(), style(error).for_stderr().red()),
    }
    Ok(())
  }
}
