//! Error types for the siren library.
//!
//! Only batch-level problems are errors. Missing optional metadata (a locale
//! without a title, an author without a family name, a publication without a
//! DOI) is never reported here: the field rules degrade to an omitted or empty
//! node instead.
//!
//! # Examples
//!
//! ```
//! use siren::{builder::DocumentBuilder, config::ExportConfig, error::SirenError, host::*,
//!             model::Journal};
//!
//! let catalog = MemoryCatalog::default();
//! let config = ExportConfig::default();
//! let builder = DocumentBuilder::new(&catalog, &config);
//! match builder.build(&Journal::default(), &[]) {
//!   Err(SirenError::EmptyBatch) => println!("nothing selected"),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(_) => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`siren`](crate) crate.
pub type Result<T> = core::result::Result<T, SirenError>;

/// Errors that can occur while assembling or writing a Siren document.
#[derive(Error, Debug)]
pub enum SirenError {
  /// The batch of submissions to export was empty.
  ///
  /// The builder needs at least one submission to resolve the issue that the
  /// `issue` node describes.
  #[error("No submissions were selected for export")]
  EmptyBatch,

  /// A submission referenced a journal context the host could not resolve.
  #[error("Journal with id {0} could not be resolved")]
  JournalNotFound(u64),

  /// No journal matched the given URL path.
  #[error("Unknown journal \"{0}\"")]
  UnknownJournal(String),

  /// No issue matched the given id or URL path.
  #[error("Issue \"{0}\" was not found")]
  IssueNotFound(String),

  /// A file system operation failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// A host snapshot could not be decoded.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A configuration file could not be decoded.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// Serialized output was not valid UTF-8.
  #[error(transparent)]
  Utf8(#[from] std::string::FromUtf8Error),

  /// Invalid configuration value.
  #[error("{0}")]
  Config(String),
}
