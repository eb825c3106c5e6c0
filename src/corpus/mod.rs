// Corpus ingestion: frequency tables, totals, and the shared vocabulary.

pub mod reader;
pub mod table;
pub mod vocabulary;

use std::collections::BTreeSet;

use table::FrequencyTable;

use crate::error::{LogOddsError, Result};

/// The two target corpora and the control corpus for one run.
#[derive(Debug, Clone)]
pub struct Corpora {
    pub target1: FrequencyTable,
    pub target2: FrequencyTable,
    pub control: FrequencyTable,
}

/// Grand totals (n1, n2, n3), computed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusTotals {
    pub n1: u64,
    pub n2: u64,
    pub n3: u64,
}

/// Per-token frequencies (f1, f2, f3) for a shared token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCounts {
    pub f1: u64,
    pub f2: u64,
    pub f3: u64,
}

impl Corpora {
    pub fn totals(&self) -> Result<CorpusTotals> {
        let total = |table: &FrequencyTable, corpus: &'static str| {
            table
                .total()
                .ok_or(LogOddsError::TotalOverflow { corpus })
        };

        Ok(CorpusTotals {
            n1: total(&self.target1, "first target")?,
            n2: total(&self.target2, "second target")?,
            n3: total(&self.control, "control")?,
        })
    }

    pub fn shared_vocabulary(&self) -> BTreeSet<String> {
        vocabulary::shared_vocabulary(&self.target1, &self.target2, &self.control)
    }

    /// Frequencies of `token` in all three corpora, or `None` if any lacks it.
    pub fn counts(&self, token: &str) -> Option<TokenCounts> {
        Some(TokenCounts {
            f1: self.target1.get(token)?,
            f2: self.target2.get(token)?,
            f3: self.control.get(token)?,
        })
    }
}
