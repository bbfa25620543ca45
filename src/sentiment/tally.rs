use serde::{Deserialize, Serialize};

use super::lexicon;

/// Raw keyword-match counts for a text sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentTally {
    pub positive_hits: u32,
    pub negative_hits: u32,
    pub neutral_hits: u32,
}

impl SentimentTally {
    /// Sum of all hits, widened so it cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.positive_hits) + u64::from(self.negative_hits) + u64::from(self.neutral_hits)
    }
}

/// Count lexicon hits per whitespace-separated token.
///
/// Each token lands in at most one bucket, checked positive first, then
/// negative, then neutral. Tokens that match nothing are ignored.
pub fn tally(text: &str) -> SentimentTally {
    let lowered = text.to_lowercase();
    let mut counts = SentimentTally::default();

    for token in lowered.split_whitespace() {
        if lexicon::matches(lexicon::POSITIVE, token) {
            counts.positive_hits += 1;
        } else if lexicon::matches(lexicon::NEGATIVE, token) {
            counts.negative_hits += 1;
        } else if lexicon::matches(lexicon::NEUTRAL, token) {
            counts.neutral_hits += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(tally(""), SentimentTally::default());
        assert_eq!(tally("   \n\t "), SentimentTally::default());
    }

    #[test]
    fn test_prefixed_token_still_matches() {
        // "بالنجاح" carries a prefix; the stem "نجاح" is contained in it
        let counts = tally("بالنجاح");
        assert_eq!(counts.positive_hits, 1);
    }

    #[test]
    fn test_token_contained_in_entry() {
        // "حزي" is a fragment of the entry "حزين"
        let counts = tally("حزي");
        assert_eq!(counts.negative_hits, 1);
    }

    #[test]
    fn test_unmatched_tokens_ignored() {
        let counts = tally("hello world");
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_positive_wins_over_negative() {
        // Contains both "فرح" (positive) and "حزين" (negative); positive is checked first
        let counts = tally("فرححزين");
        assert_eq!(counts.positive_hits, 1);
        assert_eq!(counts.negative_hits, 0);
    }
}
