//! CLI entrypoint for strutil conformance tooling.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use strutil_conformance::{
    ConformanceError, capture_fixture_set, render_diff_report, render_verification_markdown,
    verify_fixture_set,
};

/// CLI for differential testing of strutil-core against the host libc.
#[derive(Debug, Parser)]
#[command(name = "strutil-conformance")]
#[command(about = "Conformance tooling for strutil-core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Supported CLI subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Capture a host-libc fixture set for the built-in corpus.
    Capture {
        /// Output fixture path.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify strutil-core against a captured fixture set.
    Verify {
        /// Input fixture path.
        #[arg(long)]
        fixture: PathBuf,
        /// Output markdown report path.
        #[arg(long)]
        report_md: PathBuf,
        /// Output json report path.
        #[arg(long)]
        report_json: PathBuf,
    },
    /// Render a diff report between expected and actual text values.
    Diff {
        /// Expected text payload.
        #[arg(long)]
        expected: String,
        /// Actual text payload.
        #[arg(long)]
        actual: String,
    },
}

fn run(cli: Cli) -> Result<bool, ConformanceError> {
    match cli.command {
        Command::Capture { output } => {
            let fixture_set = capture_fixture_set()?;
            let body = serde_json::to_string_pretty(&fixture_set)?;
            fs::write(output, body)?;
            Ok(true)
        }
        Command::Verify {
            fixture,
            report_md,
            report_json,
        } => {
            let fixture_body = fs::read_to_string(fixture)?;
            let fixture_set = serde_json::from_str(&fixture_body)?;
            let report = verify_fixture_set(&fixture_set);
            fs::write(report_md, render_verification_markdown(&report))?;
            fs::write(report_json, serde_json::to_string_pretty(&report)?)?;
            println!(
                "{} / {} fixtures passed",
                report.passed, report.total
            );
            Ok(report.all_passed())
        }
        Command::Diff { expected, actual } => {
            let diff = render_diff_report(&expected, &actual);
            println!("{diff}");
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
