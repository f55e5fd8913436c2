//! Command line exporter for Siren journal metadata.
//!
//! This crate provides the `siren` binary on top of the `siren` library. It
//! reads a host snapshot (a JSON dump of journals, issues, submissions and
//! citations), exports a selection as Siren XML and checks existing files.
//!
//! # Usage
//!
//! ```bash
//! # Export two articles of the journal "amph" to stdout
//! siren --data snapshot.json articles amph 12 14
//!
//! # Export an issue, addressed by id or URL path, into a directory
//! siren --data snapshot.json issue amph 2021-3 --output exports/
//!
//! # Check a Siren file
//! siren validate exports/siren-20240102-030405-issues-1.xml
//! ```
//!
//! Logs go to stderr (and optionally to a file under `--log-dir`), so the XML
//! written to stdout can be piped. Use `-v` repeatedly for more detail.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use siren::{
  config::ExportConfig,
  export::{export_file_name, Export, Exporter},
  host::{HostSnapshot, MemoryCatalog},
  model::Journal,
  prelude::*,
};
use tracing::{debug, trace};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// File name of the log written under `--log-dir`
static LOG_FILE_NAME: &str = "siren.log";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Export journal metadata as Siren XML")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Export configuration file. If not specified, the default platform-specific
  /// configuration file is used when it exists.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Host snapshot (JSON) to export from. If not specified, uses the default
  /// platform-specific data directory.
  #[arg(long, short, global = true)]
  data: Option<PathBuf>,

  /// Directory to additionally write the log file into
  #[arg(long, global = true)]
  log_dir: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used
/// * `log_dir` - Directory for an additional, non-blocking log file
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` overrides the level. The returned guard flushes the log file
/// when dropped and must live until the program exits.
fn setup_logging(verbosity: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  let (file_layer, guard) = match log_dir {
    Some(dir) => {
      let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE_NAME));
      (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
    },
    None => (None, None),
  };

  tracing_subscriber::registry()
    .with(filter)
    .with(
      fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true),
    )
    .with(file_layer)
    .init();
  guard
}

/// Entry point for the siren CLI application
///
/// Parses the command line, sets up logging and runs the requested command.
/// Failures are reported on stderr before the process exits with an error.
///
/// # Errors
///
/// Returns `SirenCliError` for various failure conditions including:
/// - Unknown journals or issues
/// - Unreadable snapshots or configuration files
/// - Documents with validation errors (`validate`)
/// - User interaction errors
fn main() -> Result<()> {
  let cli = Cli::parse();
  let _guard = setup_logging(cli.verbose, cli.log_dir.as_deref());
  trace!("Parsed command line");

  let result = match &cli.command {
    Commands::Articles(options) => articles(&cli, options),
    Commands::Issue(options) => issue(&cli, options),
    Commands::Validate(options) => validate(&cli, options),
  };
  if let Err(error) = &result {
    cli.reply(ResponseContent::Error(error))?;
  }
  result
}
