// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use parse_hours::{is_restricted_charset, is_valid_buffer, parse_batch, BatchResult, Summary};

/// Total a list of time entries.
///
/// Entries are separated by newlines or commas and may be written as whole
/// hours (8), decimal hours (7.5), H:MM (1:30) or H:MM:SS (1:30:15).
#[derive(Debug, Parser)]
#[command(name = "parse_hours", version, about, long_about = None)]
struct Cli {
    /// File to read entries from; standard input when absent or `-`.
    file: Option<PathBuf>,

    /// Only check that the input is well formed.
    #[arg(long, conflicts_with_all = ["json", "entries"])]
    check: bool,

    /// List every entry next to its canonical form.
    #[arg(long)]
    entries: bool,

    /// Print the entries and summary as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    result: &'a BatchResult,
    summary: Summary,
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("could not read file: {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("could not read standard input")?;
            Ok(buffer)
        }
    }
}

fn check(buffer: &str) -> bool {
    // Files saved on Windows may start with a byte order mark and end their
    // lines with `\r\n`.
    let normalized = buffer.trim_start_matches('\u{feff}').replace("\r\n", "\n");
    let charset_ok = is_restricted_charset(&normalized);
    let lines_ok = is_valid_buffer(buffer);
    tracing::debug!(charset_ok, lines_ok, "checked input");
    charset_ok && lines_ok
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let buffer = read_input(cli.file.as_ref())?;

    if cli.check {
        let ok = check(&buffer);
        println!("{}", if ok { "ok" } else { "invalid" });
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let result = match parse_batch(&buffer) {
        Ok(result) => result,
        Err(e) => {
            tracing::debug!(error = ?e, "batch rejected");
            eprintln!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };
    let summary = result.summary();

    if cli.json {
        let report = Report {
            result: &result,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.entries {
        let width = result
            .entries
            .iter()
            .map(|e| e.original.len())
            .max()
            .unwrap_or(0);
        for entry in &result.entries {
            println!("{:<width$}  ->  {}", entry.original, entry.formatted);
        }
        println!();
    }
    println!("{summary}");

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    run(&cli)
}
