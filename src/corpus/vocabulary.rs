// Shared vocabulary across the three corpora.

use std::collections::BTreeSet;

use super::table::FrequencyTable;

/// Tokens present in all three tables.
///
/// Returned sorted so that every later stage sees the same iteration order on
/// every run. Iterates the smallest table and looks tokens up in the other two.
pub fn shared_vocabulary(
    a: &FrequencyTable,
    b: &FrequencyTable,
    c: &FrequencyTable,
) -> BTreeSet<String> {
    let mut tables = [a, b, c];
    tables.sort_by_key(|t| t.len());
    let [smallest, rest @ ..] = tables;

    smallest
        .tokens()
        .filter(|token| rest.iter().all(|t| t.contains(token)))
        .map(str::to_string)
        .collect()
}
