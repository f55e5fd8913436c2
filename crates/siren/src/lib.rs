//! Siren XML export for scholarly journal metadata.
//!
//! `siren` turns already-loaded journal metadata (journals, issues, submissions,
//! publications, authors and citations) into a single Siren XML document, the
//! fixed-schema dialect consumed by an external bibliographic indexer.
//!
//! - Document assembly with strict node ordering and conditional node presence
//! - Bilingual (English / Russian) title, abstract and keyword selection
//! - Date reformatting and empty-field fallbacks that never fail the export
//! - Deterministic, indented serialization
//! - Advisory validation of the produced markup
//!
//! # Getting Started
//!
//! ```no_run
//! use siren::{
//!   config::ExportConfig,
//!   export::Exporter,
//!   host::{HostSnapshot, MemoryCatalog},
//!   prelude::*,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let snapshot = HostSnapshot::from_path("snapshot.json")?;
//! let catalog = MemoryCatalog::new(snapshot);
//! let config = ExportConfig::default();
//!
//! let export = Exporter::new(&catalog, &config).export_submissions(&[12, 14], 1)?;
//! for diagnostic in export.diagnostics.errors() {
//!   eprintln!("{diagnostic}");
//! }
//! std::fs::write("articles.xml", export.xml)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`model`]: Read-only domain records supplied by the host
//! - [`host`]: Collaborator traits (lookups, language codes, HTML normalization)
//! - [`mapper`]: Per-subtree field rules
//! - [`builder`]: The document builder
//! - [`xml`]: Node tree, formatter and validation pass
//! - [`export`]: Batch selection, serialization and diagnostics
//! - [`config`]: Placeholder constants as configuration

#![warn(missing_docs)]

use std::{
  collections::{BTreeMap, HashMap},
  fmt::Display,
  path::{Path, PathBuf},
};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)]
use tracing_test::traced_test;

pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod host;
pub mod mapper;
pub mod model;
pub mod xml;

use crate::{error::*, model::*};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use siren::prelude::*;
///
/// fn lang(codes: &impl LanguageCodes) -> Option<&'static str> { codes.three_letter("ru") }
/// ```
pub mod prelude {
  pub use crate::{
    error::SirenError,
    host::{Catalog, HtmlToText, LanguageCodes},
  };
}
