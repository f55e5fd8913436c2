//! Error types for the siren command line.

use thiserror::Error;

use super::*;

/// Error type alias used for the `siren` binary.
pub type Result<T> = core::result::Result<T, SirenCliError>;

/// Errors that can end a `siren` invocation.
#[derive(Error, Debug)]
pub enum SirenCliError {
  /// The export library failed.
  #[error(transparent)]
  Siren(#[from] SirenError),

  /// Reading an input or writing the output failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// An interactive prompt failed.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// A checked document has validation errors.
  #[error("Found {0} validation error(s)")]
  Invalid(usize),
}
