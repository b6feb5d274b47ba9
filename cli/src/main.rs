mod error_formatter;
mod formatter;

use analysis_limits::{AnalysisLimits, LimitsError, SizeInput};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formatter::{FileReport, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "limits")]
#[command(about = "Parse and validate analysis resource limits.")]
#[command(
    long_about = "Parses byte-size literals such as 4g or 1300kb into MiB and validates analysis limits \
(model_memory_limit, categorization_examples_limit) given on the command line or in JSON files."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert size literals to MiB
    ///
    /// Examples:
    ///   limits parse 4g 1300kb 512mb
    ///   limits parse -- -4MB
    Parse {
        /// Size literals (number followed by b/k/kb/m/mb/g/gb/t/tb/p/pb)
        #[arg(required = true, allow_hyphen_values = true)]
        literals: Vec<String>,
    },
    /// Validate limits given as flags and print their canonical JSON
    Check {
        /// Model memory limit (integer MiB or size literal)
        #[arg(short = 'm', long, allow_hyphen_values = true)]
        model_memory_limit: Option<String>,
        /// Maximum number of stored categorization examples
        #[arg(short = 'c', long, allow_negative_numbers = true)]
        categorization_examples_limit: Option<i64>,
        /// Show configured and effective limits as a table
        #[arg(short = 't', long)]
        table: bool,
    },
    /// Validate a limits JSON file, or every .json file under a directory
    Validate {
        /// File or directory to validate
        path: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "limits=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Parse { literals } => parse_command(literals),
        Commands::Check {
            model_memory_limit,
            categorization_examples_limit,
            table,
        } => check_command(
            model_memory_limit.as_deref(),
            *categorization_examples_limit,
            *table,
        ),
        Commands::Validate { path } => validate_command(path),
    };

    if let Err(e) = result {
        if let Some(limits_err) = e.downcast_ref::<LimitsError>() {
            eprintln!("{}", error_formatter::format_error(limits_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn parse_command(literals: &[String]) -> Result<()> {
    let mut sizes = Vec::with_capacity(literals.len());
    for literal in literals {
        let mib = analysis_limits::parse_size_literal(literal)?;
        debug!(literal = %literal, mib, "parsed size literal");
        sizes.push((literal.clone(), mib));
    }

    let formatter = Formatter::default();
    print!("{}", formatter.format_sizes(&sizes));
    Ok(())
}

fn check_command(
    model_memory_limit: Option<&str>,
    categorization_examples_limit: Option<i64>,
    table: bool,
) -> Result<()> {
    let memory_input = model_memory_limit.map(memory_limit_input);
    let limits = AnalysisLimits::from_inputs(memory_input.as_ref(), categorization_examples_limit)?;
    info!(%limits, "limits are valid");

    if table {
        let formatter = Formatter::default();
        print!("{}", formatter.format_limits(&limits));
    } else {
        println!("{}", analysis_limits::to_json(&limits));
    }
    Ok(())
}

/// A plain integer flag is MiB, like a bare JSON number; anything else is a size literal
fn memory_limit_input(text: &str) -> SizeInput {
    match text.trim().parse::<i64>() {
        Ok(mib) => SizeInput::Integer(mib),
        Err(_) => SizeInput::from(text),
    }
}

fn validate_command(path: &Path) -> Result<()> {
    let files = collect_json_files(path)?;
    if files.is_empty() {
        anyhow::bail!("No .json files found under {}", path.display());
    }

    let mut reports = Vec::with_capacity(files.len());
    for file in files {
        let content =
            fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
        let outcome = analysis_limits::from_json(&content);
        match &outcome {
            Ok(limits) => info!(file = %file.display(), %limits, "valid"),
            Err(err) => warn!(file = %file.display(), error = %err, "invalid"),
        }
        reports.push(FileReport {
            path: file,
            outcome,
        });
    }

    let formatter = Formatter::default();
    print!("{}", formatter.format_validation_report(&reports));

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    if invalid > 0 {
        anyhow::bail!("{} of {} limits file(s) are invalid", invalid, reports.len());
    }
    Ok(())
}

/// Collect .json files under `root` (or `root` itself), sorted by path
fn collect_json_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|s| s.to_str()) == Some("json")
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
