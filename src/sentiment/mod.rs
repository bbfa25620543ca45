// Sentiment — keyword tallies, percentage normalization, and drift.
//
// The flow is text -> tally -> normalize -> distribution. Drift perturbs an
// existing distribution and runs the same rebalance safeguard that
// normalize uses, so every distribution this module hands out sums to 100.

pub mod drift;
pub mod lexicon;
pub mod normalize;
pub mod tally;
pub mod traits;

pub use drift::apply_drift;
pub use normalize::{normalize, Sentiment, SentimentDistribution};
pub use tally::{tally, SentimentTally};

/// Tally and normalize in one step.
pub fn analyze(text: &str) -> SentimentDistribution {
    normalize(&tally(text))
}
