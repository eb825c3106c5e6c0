// Output: ranking scored tokens and writing them as TSV.

pub mod ranking;
pub mod tsv;
