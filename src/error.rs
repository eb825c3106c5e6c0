// Error taxonomy for the log-odds pipeline.
//
// Reading and parsing failures are fatal for the run. Arithmetic failures are
// raised per token; whether they abort the run is decided by the caller's
// `UndefinedPolicy`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogOddsError {
    /// The frequency table could not be opened or read to completion.
    #[error("cannot read {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line has no tab separating the token from its count.
    #[error("{source_name}:{line}: malformed record (expected token<TAB>count)")]
    MalformedRecord { source_name: String, line: usize },

    /// The count field is not a non-negative base-10 integer.
    #[error("{source_name}:{line}: invalid count {value:?}")]
    InvalidCount {
        source_name: String,
        line: usize,
        value: String,
    },

    /// The counts of one corpus sum past `u64::MAX`.
    #[error("total token count of the {corpus} corpus overflows u64")]
    TotalOverflow { corpus: &'static str },

    /// A token handed to scoring is absent from at least one corpus.
    #[error("token {token:?} is missing from at least one corpus")]
    NotShared { token: String },

    /// The statistic for `token` is mathematically undefined.
    #[error("undefined score for token {token:?}: {reason}")]
    Arithmetic { token: String, reason: String },
}

pub type Result<T, E = LogOddsError> = std::result::Result<T, E>;
