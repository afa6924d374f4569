//! gsplit CLI
//!
//! Command-line tool that splits Gherkin Examples tables into one scenario
//! file per data row, mirroring the input directory tree into the output
//! directory.

use clap::Parser;
use gsplit_core::{process_tree, FileOutcome};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gsplit")]
#[command(about = "Split Gherkin Examples tables into per-row scenario files", long_about = None)]
#[command(version)]
struct Cli {
    /// Input directory to traverse recursively for .feature files
    input: PathBuf,

    /// Output directory for the generated files (created if missing)
    output: PathBuf,

    /// List the outcome for every processed file
    #[arg(short, long)]
    verbose: bool,

    /// Print the run summary as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> gsplit_core::Result<()> {
    let cli = Cli::parse();

    if !cli.input.is_dir() {
        return Err(gsplit_core::Error::NotADirectory(cli.input));
    }

    println!(
        "splitting feature files in '{}' into '{}'",
        cli.input.display(),
        cli.output.display()
    );

    let summary = process_tree(&cli.input, &cli.output)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if cli.verbose {
        for report in &summary.files {
            match &report.outcome {
                FileOutcome::Copied => {
                    println!("  {} -> copied verbatim", report.source.display());
                }
                FileOutcome::Split { scenarios } => {
                    println!(
                        "  {} -> {} scenario file(s)",
                        report.source.display(),
                        scenarios
                    );
                }
            }
        }
        println!();
    }

    println!(
        "Processed {} file(s): {} scenario file(s) written, {} copied verbatim",
        summary.files.len(),
        summary.scenarios_written,
        summary.files_copied
    );

    if !summary.errors.is_empty() {
        println!("\nErrors ({}):", summary.errors.len());
        for (path, err) in &summary.errors {
            println!("  {}: {}", path.display(), err);
        }
    }

    Ok(())
}
