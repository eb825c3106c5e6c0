use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use logodds::config::{MalformedPolicy, PriorFormula, ScoreMode, ScoreOptions, UndefinedPolicy};
use logodds::pipeline::{self, CorpusPaths};
use logodds::report::TracingReporter;

/// Log-odds calculator.
///
/// Ranks every token present in all three frequency tables by its
/// informative-Dirichlet-prior log-odds ratio between the two target
/// corpora (Monroe et al. 2008), printed as token<TAB>score in
/// decreasing order.
#[derive(Parser)]
#[command(name = "logodds", version, about)]
struct Cli {
    /// Path to TSV for the first (target) corpus
    corpus1_path: PathBuf,

    /// Path to TSV for the second (target) corpus
    corpus2_path: PathBuf,

    /// Path to TSV for the third (control) corpus
    corpus3_path: PathBuf,

    /// Do not scale the log-odds ratios to z-scores
    #[arg(long)]
    raw: bool,

    /// How counts are paired in each log-odds term
    #[arg(long, value_enum, default_value_t = PriorFormula::AsBuilt)]
    formula: PriorFormula,

    /// What to do with tokens whose score is undefined
    #[arg(long, value_enum, default_value_t = UndefinedPolicy::Skip)]
    on_undefined: UndefinedPolicy,

    /// What to do with input lines that cannot be parsed
    #[arg(long, value_enum, default_value_t = MalformedPolicy::Abort)]
    on_malformed: MalformedPolicy,

    /// Print scores with this many decimal places
    #[arg(long)]
    precision: Option<usize>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> ScoreOptions {
        ScoreOptions {
            mode: if self.raw {
                ScoreMode::Raw
            } else {
                ScoreMode::ZScore
            },
            formula: self.formula,
            on_undefined: self.on_undefined,
            on_malformed: self.on_malformed,
            precision: self.precision,
        }
    }

    fn paths(&self) -> CorpusPaths {
        CorpusPaths {
            target1: self.corpus1_path.clone(),
            target2: self.corpus2_path.clone(),
            control: self.corpus3_path.clone(),
        }
    }
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "logodds=warn"
    } else {
        "logodds=info"
    };
    // Logs go to stderr; stdout carries only the ranking
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options();
    let reporter = TracingReporter;

    let result = pipeline::run(&cli.paths(), &options, &reporter)?;
    if result.skipped() > 0 {
        info!(skipped = result.skipped(), "Left undefined tokens out of the ranking");
    }

    info!(tokens = result.ranked.len(), "Writing scores");
    let stdout = io::stdout();
    logodds::output::tsv::write_ranked(
        BufWriter::new(stdout.lock()),
        &result.ranked,
        options.precision,
    )
    .context("Failed to write scores to stdout")?;

    Ok(())
}
