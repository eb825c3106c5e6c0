// Scoring: the informative-prior log-odds statistic.

pub mod logodds;
