//! Recode a ZIP-based document from the command line.
//!
//! ```text
//! cargo run --example recode -- encode report.docx report.stored.docx
//! cargo run --example recode -- decode report.stored.docx report.docx
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use zipdoc::diag::DiagnosticSink;

/// Diagnostic sink that prints everything to stderr.
struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn note(&self, message: &str) {
        eprintln!("zipdoc: {message}");
    }

    fn debug(&self, message: &str) {
        eprintln!("zipdoc: {message}");
    }
}

#[derive(Parser)]
#[command(name = "recode", about = "Re-encode ZIP-based documents between storage and delivery form")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Re-pack into the storage representation (uncompressed, folded XML)
    Encode { input: PathBuf, output: PathBuf },
    /// Re-pack into the delivery representation (compressed, unfolded XML)
    Decode { input: PathBuf, output: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (input, output, run): (_, _, fn(&[u8], &str, &dyn DiagnosticSink) -> zipdoc::Result<Vec<u8>>) =
        match cli.command {
            Command::Encode { input, output } => (input, output, zipdoc::filter::encode),
            Command::Decode { input, output } => (input, output, zipdoc::filter::decode),
        };

    let data = std::fs::read(&input)?;
    let result = run(&data, &input.display().to_string(), &StderrSink)?;
    std::fs::write(&output, result)?;
    Ok(())
}
