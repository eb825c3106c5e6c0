// End-to-end log-odds run: read -> totals -> shared vocabulary -> score -> rank.
//
// Every read and parse happens before any scoring, so a fatal input error
// surfaces before a single line of output exists.

use std::path::PathBuf;

use tracing::info;

use crate::config::ScoreOptions;
use crate::corpus::reader::read_freq_tsv;
use crate::corpus::{Corpora, CorpusTotals};
use crate::error::Result;
use crate::output::ranking::rank;
use crate::report::Reporter;
use crate::scoring::logodds::{score_vocabulary, ScoredToken};

/// Input paths for one run.
#[derive(Debug, Clone)]
pub struct CorpusPaths {
    pub target1: PathBuf,
    pub target2: PathBuf,
    pub control: PathBuf,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Scored tokens in output order
    pub ranked: Vec<ScoredToken>,
    pub totals: CorpusTotals,
    /// Size of the shared vocabulary before undefined tokens were dropped
    pub shared: usize,
}

impl RunSummary {
    /// Shared tokens left out of the ranking because their score is undefined.
    pub fn skipped(&self) -> usize {
        self.shared - self.ranked.len()
    }
}

/// Read all three tables in order: target 1, target 2, control.
pub fn load_corpora(
    paths: &CorpusPaths,
    options: &ScoreOptions,
    reporter: &dyn Reporter,
) -> Result<Corpora> {
    info!("Reading frequencies");
    let target1 = read_freq_tsv(&paths.target1, options.on_malformed, reporter)?;
    let target2 = read_freq_tsv(&paths.target2, options.on_malformed, reporter)?;
    let control = read_freq_tsv(&paths.control, options.on_malformed, reporter)?;
    info!(
        target1 = target1.len(),
        target2 = target2.len(),
        control = control.len(),
        "Read frequency tables"
    );

    Ok(Corpora {
        target1,
        target2,
        control,
    })
}

/// Score and rank already-loaded corpora.
pub fn rank_corpora(
    corpora: &Corpora,
    options: &ScoreOptions,
    reporter: &dyn Reporter,
) -> Result<RunSummary> {
    let totals = corpora.totals()?;
    info!(n1 = totals.n1, n2 = totals.n2, n3 = totals.n3, "Computed corpus totals");

    let vocabulary = corpora.shared_vocabulary();
    info!(shared = vocabulary.len(), "Computed shared vocabulary");

    let scored = score_vocabulary(&vocabulary, corpora, totals, options, reporter)?;

    info!("Sorting scores");
    Ok(RunSummary {
        ranked: rank(scored),
        totals,
        shared: vocabulary.len(),
    })
}

/// Load the three tables and rank their shared vocabulary.
pub fn run(
    paths: &CorpusPaths,
    options: &ScoreOptions,
    reporter: &dyn Reporter,
) -> Result<RunSummary> {
    let corpora = load_corpora(paths, options, reporter)?;
    rank_corpora(&corpora, options, reporter)
}
