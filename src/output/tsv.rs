// TSV emitter: one `token<TAB>score` line per ranked token.
//
// Scores use Rust's `f64` Display by default, which is the shortest decimal
// that parses back to the same value and never uses exponent notation.
// `precision` switches to a fixed number of decimal places.

use std::io::{self, Write};

use crate::scoring::logodds::ScoredToken;

pub fn format_score(score: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{score:.p$}"),
        None => format!("{score}"),
    }
}

/// Lazily render ranked tokens as lines (without the trailing newline).
pub fn lines(
    ranked: &[ScoredToken],
    precision: Option<usize>,
) -> impl Iterator<Item = String> + '_ {
    ranked
        .iter()
        .map(move |s| format!("{}\t{}", s.token, format_score(s.score, precision)))
}

/// Write every line, newline-terminated, and flush.
pub fn write_ranked<W: Write>(
    mut writer: W,
    ranked: &[ScoredToken],
    precision: Option<usize>,
) -> io::Result<()> {
    for line in lines(ranked, precision) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
