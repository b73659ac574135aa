//! rapid-keywords CLI

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rapid_keywords::pipeline::spec::PercentValue;
use rapid_keywords::table::write_keywords;
use rapid_keywords::{ExtractionJob, ExtractionSpec};

#[derive(Parser, Debug)]
#[command(name = "rapid-keywords")]
#[command(about = "Extract the top P percent of TextRank keywords from a CSV text column", long_about = None)]
struct Cli {
    /// Input CSV file with a header row
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Name of the text column
    #[arg(short, long)]
    column: Option<String>,

    /// Percentage of ranked terms to keep (0-100)
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    top_percent: Option<String>,

    /// Output CSV file; keywords go to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON extraction spec; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input field delimiter (single character or "tab")
    #[arg(long)]
    delimiter: Option<String>,

    /// Tab-separated lexicon merged over the built-in English one
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Co-occurrence window size
    #[arg(long)]
    window: Option<usize>,

    /// Fraction of graph nodes kept as keywords by the ranker
    #[arg(long)]
    ratio: Option<f64>,

    /// Stopword language code
    #[arg(long)]
    language: Option<String>,

    /// Header of the output column
    #[arg(long)]
    header: Option<String>,

    /// Drop repeated keywords, keeping the first
    #[arg(long)]
    dedupe: bool,

    /// Treat unknown config fields as errors
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Load the config file (if any) and apply flag overrides.
    fn into_spec(self) -> anyhow::Result<ExtractionSpec> {
        let mut spec = match &self.config {
            Some(path) => ExtractionSpec::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ExtractionSpec::default(),
        };

        if let Some(input) = self.input {
            spec.input.path = Some(input);
        }
        if let Some(column) = self.column {
            spec.input.column = Some(column);
        }
        if let Some(delimiter) = self.delimiter {
            spec.input.delimiter = Some(delimiter);
        }
        if let Some(lexicon) = self.lexicon {
            spec.input.lexicon = Some(lexicon);
        }
        if let Some(top_percent) = self.top_percent {
            spec.selection.top_percent = Some(PercentValue::Text(top_percent));
        }
        if let Some(window) = self.window {
            spec.ranker.window_size = Some(window);
        }
        if let Some(ratio) = self.ratio {
            spec.ranker.ratio = Some(ratio);
        }
        if let Some(language) = self.language {
            spec.ranker.language = Some(language);
        }
        if let Some(output) = self.output {
            spec.output.path = Some(output);
        }
        if let Some(header) = self.header {
            spec.output.header = Some(header);
        }
        spec.selection.dedupe |= self.dedupe;
        spec.strict |= self.strict;

        Ok(spec)
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let spec = cli.into_spec()?;
    let job = ExtractionJob::from_spec(&spec)?;
    let keywords = job
        .run()
        .with_context(|| format!("keyword extraction from {} failed", job.input.display()))?;

    if job.output.is_none() {
        write_keywords(io::stdout().lock(), &job.header, &keywords.keywords)
            .context("failed to write keywords to stdout")?;
    }
    Ok(())
}

/// Parse arguments; `None` once help or version has been printed.
fn parse_cli() -> Result<Option<Cli>, clap::Error> {
    match Cli::try_parse() {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err),
        },
    }
}

fn main() -> ExitCode {
    let cli = match parse_cli() {
        Ok(Some(cli)) => cli,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
