//! Command-line entry point.
//!
//! `gomust DIR` scans a Go package directory and prints the generated
//! wrapper stubs and merged import block. Resolution problems go to
//! stderr one line each; a package that fails to parse aborts the run.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Name of the generated file, written into the scanned directory.
const OUTPUT_FILE: &str = "must_stubs.gen";

#[derive(Parser, Debug)]
#[command(
    name = "gomust",
    version,
    about = "Generates Must-prefixed panic-on-failure wrapper stubs for a Go package"
)]
struct Cli {
    /// Package directory to scan
    dir: PathBuf,

    /// Build tags (accepted for compatibility; not applied to file selection)
    #[arg(long, default_value = "")]
    tags: String,

    /// Do not write the generated file
    #[arg(short = 'n')]
    dry_run: bool,

    /// Update: regenerate using existing settings
    #[arg(short = 'u')]
    update: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("GOMUST_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if !cli.tags.is_empty() {
        debug!("build tags {:?} accepted but not applied", cli.tags);
    }
    if cli.update {
        debug!("regenerating with existing settings");
    }

    let outcome = match gomust::pipeline::run(&cli.dir) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("Failed to parse package: {err}");
            return ExitCode::FAILURE;
        }
    };

    for diagnostic in &outcome.diagnostics {
        eprintln!("{diagnostic}");
    }

    print!("{}", outcome.rendering);

    if !cli.dry_run {
        let target = cli.dir.join(OUTPUT_FILE);
        if let Err(err) = fs::write(&target, &outcome.rendering) {
            eprintln!("failed to write {}: {err}", target.display());
            return ExitCode::FAILURE;
        }
        debug!("wrote {}", target.display());
    }

    if outcome.error_count() > 0 {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
