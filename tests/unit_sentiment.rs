// Unit tests for sentiment tallying, normalization, and drift.

use trendlens::sentiment::lexicon;
use trendlens::sentiment::normalize::{overall, rebalance};
use trendlens::sentiment::traits::{LexiconAnalyzer, SentimentAnalyzer};
use trendlens::sentiment::{
    analyze, apply_drift, normalize, tally, Sentiment, SentimentDistribution, SentimentTally,
};

fn hits(positive: u32, negative: u32, neutral: u32) -> SentimentTally {
    SentimentTally {
        positive_hits: positive,
        negative_hits: negative,
        neutral_hits: neutral,
    }
}

fn triple(d: &SentimentDistribution) -> (u8, u8, u8) {
    (d.positive, d.negative, d.neutral)
}

// ============================================================
// tally
// ============================================================

#[test]
fn tally_mixed_sentence() {
    // نجاح -> positive, أزمة -> negative, اليوم -> neutral
    let counts = tally("نجاح أزمة اليوم");
    assert_eq!(counts, hits(1, 1, 1));
}

#[test]
fn tally_emoji() {
    let counts = tally("🎉 💔 🔥");
    assert_eq!(counts, hits(2, 1, 0));
}

#[test]
fn tally_hashtag_prefix_matches_stem() {
    assert_eq!(tally("#مبروك_للهلال").positive_hits, 1);
}

#[test]
fn tally_ignores_latin_text() {
    assert_eq!(tally("great news today").total(), 0);
}

#[test]
fn tally_collapses_repeated_whitespace() {
    assert_eq!(tally("  فرح \n\n  فرح\t"), hits(2, 0, 0));
}

#[test]
fn lexicon_match_is_bidirectional() {
    // token contains entry
    assert!(lexicon::matches(lexicon::NEGATIVE, "والخسارة"));
    // entry contains token
    assert!(lexicon::matches(lexicon::NEGATIVE, "خسار"));
    assert!(!lexicon::matches(lexicon::NEGATIVE, "hello"));
}

// ============================================================
// normalize
// ============================================================

#[test]
fn normalize_zero_fallback() {
    let dist = normalize(&hits(0, 0, 0));
    assert_eq!(triple(&dist), (33, 33, 34));
    assert_eq!(dist.overall, Sentiment::Neutral);
}

#[test]
fn normalize_three_positive_one_negative() {
    let dist = normalize(&hits(3, 1, 0));
    assert_eq!(triple(&dist), (75, 25, 0));
    assert_eq!(dist.overall, Sentiment::Positive);
}

#[test]
fn normalize_all_neutral() {
    let dist = normalize(&hits(0, 0, 7));
    assert_eq!(triple(&dist), (0, 0, 100));
    assert_eq!(dist.overall, Sentiment::Neutral);
}

#[test]
fn normalize_all_negative() {
    let dist = normalize(&hits(0, 4, 0));
    assert_eq!(triple(&dist), (0, 100, 0));
    assert_eq!(dist.overall, Sentiment::Negative);
}

#[test]
fn normalize_remainder_goes_to_neutral() {
    // 2/3 -> 67, 1/6 -> 17, neutral = 16 (not independently rounded)
    let dist = normalize(&hits(4, 1, 1));
    assert_eq!(triple(&dist), (67, 17, 16));
}

#[test]
fn normalize_tie_between_positive_and_negative_is_neutral() {
    let dist = normalize(&hits(2, 2, 0));
    assert_eq!(triple(&dist), (50, 50, 0));
    assert_eq!(dist.overall, Sentiment::Neutral);
}

#[test]
fn normalize_invariants_over_small_tallies() {
    for p in 0..=15 {
        for n in 0..=15 {
            for u in 0..=15 {
                let dist = normalize(&hits(p, n, u));
                assert_eq!(dist.sum(), 100, "sum broke for ({p}, {n}, {u}): {dist:?}");
                assert_eq!(
                    dist.overall,
                    overall(dist.positive, dist.negative, dist.neutral)
                );
            }
        }
    }
}

#[test]
fn normalize_huge_tally_does_not_overflow() {
    let dist = normalize(&hits(u32::MAX, 1, 0));
    assert_eq!(triple(&dist), (100, 0, 0));
    assert_eq!(dist.overall, Sentiment::Positive);

    let dist = normalize(&hits(u32::MAX, u32::MAX, u32::MAX));
    assert_eq!(triple(&dist), (33, 33, 34));
    assert_eq!(hits(u32::MAX, u32::MAX, u32::MAX).total(), 3 * u64::from(u32::MAX));
}

#[test]
fn analyze_empty_text_is_fallback() {
    assert_eq!(triple(&analyze("")), (33, 33, 34));
}

#[test]
fn analyzer_trait_matches_free_function() {
    let text = "يوم رائع ولكن فيه قلق";
    assert_eq!(LexiconAnalyzer.analyze(text), analyze(text));
    assert_eq!(LexiconAnalyzer.tally(text), tally(text));
}

#[test]
fn distribution_json_shape() {
    let dist = normalize(&hits(3, 1, 0));
    let json = serde_json::to_value(dist).unwrap();
    assert_eq!(json["positive"], 75);
    assert_eq!(json["overall"], "positive");
}

// ============================================================
// apply_drift
// ============================================================

#[test]
fn drift_overfull_input_scales_down() {
    let current = SentimentDistribution::from_parts(85, 20, 0);
    let next = apply_drift(&current, 0);
    assert_eq!(triple(&next), (81, 19, 0));
    assert_eq!(next.overall, Sentiment::Positive);
}

#[test]
fn drift_negative_delta() {
    let current = SentimentDistribution::from_parts(40, 30, 30);
    let next = apply_drift(&current, -10);
    assert_eq!(triple(&next), (30, 40, 30));
    assert_eq!(next.overall, Sentiment::Negative);
}

#[test]
fn drift_does_not_mutate_input() {
    let current = SentimentDistribution::from_parts(40, 30, 30);
    let _ = apply_drift(&current, 25);
    assert_eq!(triple(&current), (40, 30, 30));
}

#[test]
fn drift_invariants_over_grid() {
    for p in (0..=100u8).step_by(5) {
        for n in (0..=100u8).step_by(5) {
            let u = 100u8.saturating_sub(p.saturating_add(n));
            let current = SentimentDistribution::from_parts(p, n, u);
            for delta in [-150, -40, -7, 0, 3, 25, 99, 150] {
                let next = apply_drift(&current, delta);
                assert_eq!(
                    next.sum(),
                    100,
                    "sum broke for ({p}, {n}) delta {delta}: {next:?}"
                );
                assert!(next.positive <= 100 && next.negative <= 100 && next.neutral <= 100);
            }
        }
    }
}

// ============================================================
// rebalance
// ============================================================

#[test]
fn rebalance_floor_scaling_never_rounds_up() {
    // 2/3 and 1/3 of 150: floor(66.67) = 66, floor(33.33) = 33, leftover 1 to positive
    assert_eq!(rebalance(100, 50, -50), (67, 33, 0));
}

#[test]
fn rebalance_negative_larger_takes_leftover() {
    assert_eq!(rebalance(50, 100, -50), (33, 67, 0));
}

#[test]
fn rebalance_overfull_sum_trims_larger_share() {
    // Neutral starts non-negative, but p + n alone exceeds 100
    assert_eq!(rebalance(60, 50, 5), (50, 50, 0));
    assert_eq!(rebalance(40, 70, 0), (40, 60, 0));
}

#[test]
fn rebalance_overfull_tie_trims_positive() {
    assert_eq!(rebalance(55, 55, 0), (45, 55, 0));
}
