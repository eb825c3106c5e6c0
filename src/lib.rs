// logodds: rank tokens by informative-Dirichlet-prior log-odds.
//
// This is the library root. Each module is one stage of the pipeline;
// `pipeline` wires them together and the binary adds the CLI.

pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod scoring;
