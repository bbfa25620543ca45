// Sentiment analyzer trait — swap-ready abstraction.
//
// Trend generation depends on this trait rather than on the lexicon
// functions directly, so a different analyzer can be dropped in later
// without touching the generator.

use super::normalize::SentimentDistribution;
use super::tally::SentimentTally;

/// Trait for turning a text sample into a sentiment distribution.
pub trait SentimentAnalyzer: Send + Sync {
    /// Count sentiment hits in the text.
    fn tally(&self, text: &str) -> SentimentTally;

    /// Produce a distribution summing to 100.
    /// Default implementation normalizes the tally.
    fn analyze(&self, text: &str) -> SentimentDistribution {
        super::normalize(&self.tally(text))
    }
}

/// The fixed Arabic keyword lexicon analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl SentimentAnalyzer for LexiconAnalyzer {
    fn tally(&self, text: &str) -> SentimentTally {
        super::tally(text)
    }
}
