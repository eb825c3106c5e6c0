// Log-odds ratio with an informative Dirichlet prior.
//
// Monroe, Colaresi & Quinn (2008), "Fightin' words". The control corpus
// supplies the prior. For each shared token we compute
//
//   ratio    = component(target 1) - component(target 2)
//   variance = 1 / (f1 + f3) + 1 / (f2 + f3)
//   z        = ratio / sqrt(variance)
//
// where component(a, b, c, d) = log2((a + b) / (c + d - a - b)). How the
// counts are paired into `component` depends on `PriorFormula`:
//
//   AsBuilt: component(f, n, f3, n3)   target total added to target frequency
//   Paper:   component(f, f3, n, n3)   control frequency as pseudo-count
//
// The variance always pairs frequencies with the control frequency. AsBuilt
// is the default pairing.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::info;

use crate::config::{PriorFormula, ScoreMode, ScoreOptions, UndefinedPolicy};
use crate::corpus::{Corpora, CorpusTotals, TokenCounts};
use crate::error::{LogOddsError, Result};
use crate::report::Reporter;

/// A token and its score, ready for ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredToken {
    pub token: String,
    pub score: f64,
}

/// Why a statistic has no finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Undefined {
    #[error("log-odds denominator {0} is not positive")]
    NonPositiveDenominator(i128),
    #[error("log-odds numerator is zero")]
    ZeroNumerator,
    #[error("variance term f{0} + f3 is zero")]
    ZeroVarianceTerm(u8),
}

/// log2((a + b) / (c + d - a - b)).
///
/// The denominator is checked in exact integer arithmetic before any
/// floating-point work.
pub fn component(a: u64, b: u64, c: u64, d: u64) -> Result<f64, Undefined> {
    let num = a as i128 + b as i128;
    let den = c as i128 + d as i128 - num;
    if den <= 0 {
        return Err(Undefined::NonPositiveDenominator(den));
    }
    if num == 0 {
        return Err(Undefined::ZeroNumerator);
    }
    Ok((num as f64 / den as f64).log2())
}

/// The log-odds ratio of a token between target 1 and target 2.
pub fn log_odds_ratio(
    counts: TokenCounts,
    totals: CorpusTotals,
    formula: PriorFormula,
) -> Result<f64, Undefined> {
    let TokenCounts { f1, f2, f3 } = counts;
    let CorpusTotals { n1, n2, n3 } = totals;

    let (term1, term2) = match formula {
        PriorFormula::AsBuilt => (component(f1, n1, f3, n3)?, component(f2, n2, f3, n3)?),
        PriorFormula::Paper => (component(f1, f3, n1, n3)?, component(f2, f3, n2, n3)?),
    };
    Ok(term1 - term2)
}

/// Sample variance of the log-odds ratio.
pub fn variance(counts: TokenCounts) -> Result<f64, Undefined> {
    let TokenCounts { f1, f2, f3 } = counts;
    let term1 = f1 as u128 + f3 as u128;
    let term2 = f2 as u128 + f3 as u128;
    if term1 == 0 {
        return Err(Undefined::ZeroVarianceTerm(1));
    }
    if term2 == 0 {
        return Err(Undefined::ZeroVarianceTerm(2));
    }
    Ok(1.0 / term1 as f64 + 1.0 / term2 as f64)
}

/// Score one token in the requested mode.
///
/// The variance is only computed for z-scores, so a token with a zero
/// variance term still has a raw score.
pub fn score_token(
    token: &str,
    counts: TokenCounts,
    totals: CorpusTotals,
    options: &ScoreOptions,
) -> Result<ScoredToken> {
    let undefined = |reason: Undefined| LogOddsError::Arithmetic {
        token: token.to_string(),
        reason: reason.to_string(),
    };

    let ratio = log_odds_ratio(counts, totals, options.formula).map_err(undefined)?;
    let score = match options.mode {
        ScoreMode::Raw => ratio,
        ScoreMode::ZScore => ratio / variance(counts).map_err(undefined)?.sqrt(),
    };

    Ok(ScoredToken {
        token: token.to_string(),
        score,
    })
}

/// Score every token in `vocabulary`.
///
/// Output follows the vocabulary's (sorted) order. Undefined tokens, and
/// tokens missing from any of the three corpora, are reported and dropped,
/// or abort the run, per `options.on_undefined`. A dropped token never
/// changes any other token's score.
pub fn score_vocabulary(
    vocabulary: &BTreeSet<String>,
    corpora: &Corpora,
    totals: CorpusTotals,
    options: &ScoreOptions,
    reporter: &dyn Reporter,
) -> Result<Vec<ScoredToken>> {
    let mut scored = Vec::with_capacity(vocabulary.len());
    let mut skipped = 0usize;

    for token in vocabulary {
        let scored_token = match corpora.counts(token) {
            Some(counts) => score_token(token, counts, totals, options),
            None => Err(LogOddsError::NotShared {
                token: token.clone(),
            }),
        };

        match scored_token {
            Ok(s) => scored.push(s),
            Err(e) => match options.on_undefined {
                UndefinedPolicy::Abort => return Err(e),
                UndefinedPolicy::Skip => {
                    reporter.skipped_token(&e);
                    skipped += 1;
                }
            },
        }
    }

    info!(scored = scored.len(), skipped, "Computed scores");
    Ok(scored)
}
