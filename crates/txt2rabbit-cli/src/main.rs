use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use txt2rabbit_core::{
    build_records, parse_text, save_rally, write_workbook, BuildError, ExportError, Rally,
    StoreError, WorkbookOptions,
};

/// Convert a TXT file (distance and time per line, blank lines between
/// stages) into a Rabbit-importable XLSX workbook.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the input TXT file.
    #[arg(short, long)]
    input: PathBuf,

    /// Destination path for the XLSX workbook.
    #[arg(short, long)]
    output: PathBuf,

    /// Also write a FullData sheet with the raw distance/time columns.
    #[arg(long)]
    include_full: bool,

    /// Also write the parsed rally as pretty JSON to this path.
    #[arg(long, value_name = "PATH")]
    rally_json: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum RunError {
    #[error("Error reading input file: {0}")]
    ReadInput(std::io::Error),

    #[error("No stages were parsed. Check your TXT formatting.")]
    EmptyInput,

    #[error("Error building sections: {0}")]
    Build(#[from] BuildError),

    #[error("Error writing Excel: {0}")]
    Export(#[from] ExportError),

    #[error("Error writing rally JSON: {0}")]
    Store(#[from] StoreError),
}

impl RunError {
    fn exit_code(&self) -> u8 {
        match self {
            RunError::ReadInput(_) => 1,
            RunError::EmptyInput => 2,
            RunError::Export(_) | RunError::Store(_) => 3,
            RunError::Build(_) => 4,
        }
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = cli.output.clone();

    match run(cli) {
        Ok(count) => {
            println!("Done. Wrote {} sections to: {}", count, output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<usize, RunError> {
    let text = fs::read_to_string(&cli.input).map_err(RunError::ReadInput)?;

    let outcome = parse_text(&text);
    for warning in &outcome.warnings {
        warn!("{warning}");
    }
    if outcome.stages.is_empty() {
        return Err(RunError::EmptyInput);
    }

    let records = build_records(&outcome.stages)?;

    let options = WorkbookOptions {
        include_full: cli.include_full,
    };
    write_workbook(&records, &cli.output, &options)?;

    if let Some(path) = &cli.rally_json {
        let name = cli
            .input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "rally".to_string());
        let rally = Rally::from_stages(name, outcome.stages);
        save_rally(&rally, path)?;
    }

    Ok(records.len())
}
