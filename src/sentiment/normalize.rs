// Tally -> percentage triple that always sums to exactly 100.
//
// Positive and negative are rounded independently and neutral takes the
// remainder, so rounding error always lands on neutral. When both roundings
// go up far enough to push neutral below zero, `rebalance` redistributes.

use serde::{Deserialize, Serialize};

use super::tally::SentimentTally;

/// Returned whenever there is no signal to work with.
const FALLBACK: (i32, i32, i32) = (33, 33, 34);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Positive/negative/neutral percentages plus the dominant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: u8,
    pub negative: u8,
    pub neutral: u8,
    pub overall: Sentiment,
}

impl SentimentDistribution {
    /// Build a distribution from a triple, deriving `overall`.
    ///
    /// Callers are expected to pass a triple that already sums to 100;
    /// components are clamped into 0-100 but not otherwise adjusted.
    pub fn from_parts(positive: u8, negative: u8, neutral: u8) -> Self {
        let (p, n, u) = (positive.min(100), negative.min(100), neutral.min(100));
        Self {
            positive: p,
            negative: n,
            neutral: u,
            overall: overall(p, n, u),
        }
    }

    pub fn fallback() -> Self {
        let (p, n, u) = FALLBACK;
        Self::from_parts(p as u8, n as u8, u as u8)
    }

    pub fn sum(&self) -> u32 {
        u32::from(self.positive) + u32::from(self.negative) + u32::from(self.neutral)
    }
}

/// Convert raw hit counts into percentages summing to exactly 100.
pub fn normalize(tally: &SentimentTally) -> SentimentDistribution {
    let total = tally.total();
    if total == 0 {
        return SentimentDistribution::fallback();
    }

    let positive = percent(tally.positive_hits, total);
    let negative = percent(tally.negative_hits, total);
    let neutral = 100 - positive - negative;

    let (p, n, u) = rebalance(positive, negative, neutral);
    SentimentDistribution::from_parts(p as u8, n as u8, u as u8)
}

/// `round(hits / total * 100)`, half rounding up.
fn percent(hits: u32, total: u64) -> i32 {
    ((f64::from(hits) / total as f64) * 100.0).round() as i32
}

/// Whichever field is strictly greater than both others; ties go to neutral.
pub fn overall(positive: u8, negative: u8, neutral: u8) -> Sentiment {
    if positive > negative && positive > neutral {
        Sentiment::Positive
    } else if negative > positive && negative > neutral {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Repair a triple whose neutral went negative.
///
/// Stage one scales positive and negative down with floor division, hands
/// the leftover to the larger of the two (ties to positive) and zeroes
/// neutral. Stage two re-checks the sum and forces neutral to absorb any
/// residue, falling back to the larger field if neutral would go negative.
/// Inputs are expected in 0-100 for positive and negative.
pub fn rebalance(positive: i32, negative: i32, neutral: i32) -> (i32, i32, i32) {
    let (mut p, mut n, mut u) = (positive, negative, neutral);

    if u < 0 {
        let total = p + n;
        if total > 0 {
            let scaled_p = p * 100 / total;
            let scaled_n = n * 100 / total;
            let leftover = 100 - scaled_p - scaled_n;
            if p >= n {
                p = scaled_p + leftover;
                n = scaled_n;
            } else {
                p = scaled_p;
                n = scaled_n + leftover;
            }
            u = 0;
        } else {
            (p, n, u) = FALLBACK;
        }
    }

    if p + n + u != 100 {
        u = 100 - p - n;
        if u < 0 {
            let remainder = u;
            u = 0;
            if p >= n {
                p += remainder;
            } else {
                n += remainder;
            }
        }
    }

    (p, n, u)
}
