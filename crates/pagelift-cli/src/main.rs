// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagelift — command-line front end for document boundary detection and
// auto-crop. Reads a photograph from disk, runs the scanning core, and
// either prints the detected bounds as JSON or writes the rectified image.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pagelift_core::error::Result;
use pagelift_core::human_errors::humanize_error;
use pagelift_scan::DocumentScanner;

/// Detect and crop documents in photographs.
#[derive(Parser, Debug)]
#[command(name = "pagelift")]
#[command(version)]
#[command(about = "Detect and crop documents in photographs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the document's bounding rectangle as JSON
    Bounds {
        /// Input photograph (JPEG, PNG, ...)
        image: PathBuf,
    },
    /// Write a flat, top-down crop of the document
    Crop {
        /// Input photograph (JPEG, PNG, ...)
        image: PathBuf,
        /// Output file for the cropped JPEG
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let human = humanize_error(&err);
            tracing::error!(error = %err, "Command failed");
            eprintln!("{} {}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let scanner = DocumentScanner::default();

    match cli.command {
        Commands::Bounds { image } => {
            let data = std::fs::read(&image)?;
            let rect = scanner.detect_bounds(&data)?;
            // Rect is infallibly serializable; keep the output a single
            // machine-readable line.
            println!(
                "{}",
                serde_json::to_string(&rect).expect("Rect serialization cannot fail")
            );
        }
        Commands::Crop { image, output } => {
            let data = std::fs::read(&image)?;
            let cropped = scanner.auto_crop(&data)?;
            if cropped == data {
                tracing::warn!("No document found; output is the unmodified input");
            }
            std::fs::write(&output, &cropped)?;
            println!("{}", output.display());
        }
    }

    Ok(())
}
