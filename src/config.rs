// Run options for the scoring pipeline.
//
// There is no config file and no env-driven behaviour: every option comes
// from command-line flags, and `ScoreOptions::default()` matches a bare
// `logodds c1 c2 c3` invocation.

use clap::ValueEnum;

/// Whether scores are emitted as raw log-odds or as z-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreMode {
    /// ratio / sqrt(variance)
    #[default]
    ZScore,
    /// The log-odds ratio as computed
    Raw,
}

/// Which argument pairing the per-corpus log-odds component uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PriorFormula {
    /// component(f, n, f3, n3): each target's grand total is added to its
    /// frequency.
    #[default]
    AsBuilt,
    /// component(f, f3, n, n3): the control frequency is the prior
    /// pseudo-count, as in Monroe et al. (2008).
    Paper,
}

/// What to do with a token whose statistic is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UndefinedPolicy {
    /// Drop the token from the ranking and report it
    #[default]
    Skip,
    /// Fail the whole run before any output is written
    Abort,
}

/// What to do with an input line that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MalformedPolicy {
    /// Fail the whole run
    #[default]
    Abort,
    /// Drop the line and report it
    Skip,
}

/// Options threaded through the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ScoreOptions {
    pub mode: ScoreMode,
    pub formula: PriorFormula,
    pub on_undefined: UndefinedPolicy,
    pub on_malformed: MalformedPolicy,
    /// Fixed number of decimal places; `None` prints the shortest
    /// representation that round-trips the f64.
    pub precision: Option<usize>,
}

impl ScoreOptions {
    /// Raw log-odds, everything else at its default.
    pub fn raw() -> Self {
        Self {
            mode: ScoreMode::Raw,
            ..Self::default()
        }
    }
}
