// TSV frequency table reader.
//
// One record per line: token, a tab, then a base-10 count. Trailing
// whitespace is stripped from each line first, so CRLF files and trailing
// spaces after the count are accepted. Only the first tab splits the line;
// anything after it belongs to the count field.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::table::FrequencyTable;
use crate::config::MalformedPolicy;
use crate::error::{LogOddsError, Result};
use crate::report::Reporter;

/// Read a frequency table from `path`.
///
/// The file handle is dropped on every return path, including errors.
pub fn read_freq_tsv(
    path: &Path,
    policy: MalformedPolicy,
    reporter: &dyn Reporter,
) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|source| LogOddsError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let source_name = path.display().to_string();

    parse_freq_tsv(BufReader::new(file), &source_name, policy, reporter).map_err(|e| match e {
        // Re-attach the real path to read errors surfaced from the buffer
        LogOddsError::SourceUnavailable { source, .. } => LogOddsError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parse a frequency table from any buffered reader.
///
/// `source_name` only labels error messages.
pub fn parse_freq_tsv<R: BufRead>(
    reader: R,
    source_name: &str,
    policy: MalformedPolicy,
    reporter: &dyn Reporter,
) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LogOddsError::SourceUnavailable {
            path: source_name.into(),
            source,
        })?;
        let line_no = idx + 1;

        match parse_record(&line, source_name, line_no) {
            Ok((token, count)) => {
                if let Some(previous) = table.insert(token, count) {
                    debug!(
                        source_name,
                        line_no, previous, count, "Duplicate token, keeping later count"
                    );
                }
            }
            Err(e) => match policy {
                MalformedPolicy::Abort => return Err(e),
                MalformedPolicy::Skip => reporter.skipped_line(&e),
            },
        }
    }

    Ok(table)
}

/// Split one line into (token, count).
fn parse_record<'a>(line: &'a str, source_name: &str, line_no: usize) -> Result<(&'a str, u64)> {
    let (token, count) = line.trim_end().split_once('\t').ok_or_else(|| {
        LogOddsError::MalformedRecord {
            source_name: source_name.to_string(),
            line: line_no,
        }
    })?;

    let count = count
        .trim()
        .parse::<u64>()
        .map_err(|_| LogOddsError::InvalidCount {
            source_name: source_name.to_string(),
            line: line_no,
            value: count.to_string(),
        })?;

    Ok((token, count))
}
