//! hfgrab: interactive Hugging Face dataset exporter.
//!
//! hfgrab downloads dataset splits from the Hugging Face Hub, converts
//! each split to a spreadsheet, CSV, JSON-lines, or PDF rendition (or
//! picks the first format that works), and saves the results individually
//! or bundled into one zip archive.
//!
//! # Modules
//!
//! - [`export`]: the export engine (retrieval policy and fallback chain)
//! - [`hub`]: Hub collaborators behind the [`hub::DatasetHub`] seam
//! - [`table`]: the row/column table every converter consumes
//! - [`shell`]: the interactive shell
//! - [`archive`]: zip bundling
//! - [`notify`]: the notification surface
//! - [`error`]: error types for hfgrab operations

pub mod archive;
pub mod error;
pub mod export;
pub mod hub;
pub mod notify;
pub mod shell;
pub mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::notify::Notifier;

pub use error::HfgrabError;

/// The hfgrab CLI application.
#[derive(Parser)]
#[command(name = "hfgrab")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell.
    Shell(ShellArgs),
    /// Export one dataset without entering the shell.
    Export(ExportArgs),
}

/// Arguments for the shell subcommand.
#[derive(clap::Args)]
struct ShellArgs {
    /// Hub access token (falls back to the HF_TOKEN environment variable).
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Directory downloads are saved into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

/// Arguments for the export subcommand.
#[derive(clap::Args)]
struct ExportArgs {
    /// Dataset to export ('name' or 'author/name').
    dataset: String,

    /// Output format ('best', 'excel', 'csv', 'pdf', or 'json').
    #[arg(long, default_value = "best")]
    format: String,

    /// Hub access token (falls back to the HF_TOKEN environment variable).
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Directory artifacts are saved into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

/// Run the hfgrab CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), HfgrabError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Shell(args)) => run_shell(args),
        Some(Commands::Export(args)) => run_export(args),
        None => {
            println!("hfgrab {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Interactive Hugging Face dataset exporter.");
            println!();
            println!("Run 'hfgrab --help' for usage information.");
            Ok(())
        }
    }
}

fn run_shell(args: ShellArgs) -> Result<(), HfgrabError> {
    let hub = hub::client::HubClient::new(args.token)?;
    let mut shell = shell::Shell::new(&hub, args.out_dir)?;
    shell.run()
}

/// One-shot equivalent of the shell's single-dataset mode. Artifacts keep
/// their full relative paths under the output directory.
fn run_export(args: ExportArgs) -> Result<(), HfgrabError> {
    let dataset_id = hub::resolve::validate_dataset_ref(&args.dataset)?;
    let hub = hub::client::HubClient::new(args.token)?;
    let format = export::ExportFormat::parse(&args.format);

    shell::theme::init();
    let mut notify = shell::TermNotifier;
    let artifacts = export::export(&hub, &dataset_id, format, &mut notify);

    if artifacts.is_empty() {
        notify.error("No downloadable files found.");
        return Ok(());
    }

    for artifact in &artifacts {
        let target = shell::save_bytes(
            &args.out_dir,
            std::path::Path::new(&artifact.path),
            &artifact.bytes,
        )?;
        println!("Saved {} ({} bytes)", target.display(), artifact.bytes.len());
    }
    Ok(())
}
