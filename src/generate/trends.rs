// Trend generation and refresh.
//
// Engagement figures are synthesized; sentiment always comes from the
// analyzer (initial build) or from `apply_drift` (refresh). A refresh
// returns a new record and leaves the input untouched.

use chrono::Utc;
use rand::Rng;
use tracing::debug;

use crate::models::{city_distribution, AccountRecord, TrendRecord, TrendWithAccounts};
use crate::sentiment::apply_drift;
use crate::sentiment::traits::SentimentAnalyzer;

/// Used when no hashtags are supplied or the upstream source is unavailable.
pub const FALLBACK_HASHTAGS: &[&str] = &["#السعودية", "#الرياض", "#الهلال", "#النصر", "#نيوم"];

const MIN_TWEET_COUNT: u64 = 5_000;
const MAX_VELOCITY: i64 = 500;

/// Build a fresh trend record for a hashtag at the given rank.
pub fn build_trend<R: Rng>(
    rng: &mut R,
    analyzer: &dyn SentimentAnalyzer,
    hashtag: &str,
    rank: u32,
) -> TrendRecord {
    let tweet_count = (3_000 + rng.random_range(0..50_000u64)).max(MIN_TWEET_COUNT);
    let velocity = ((rng.random::<f64>() - 0.3) * 600.0).floor() as i64;
    let retweets = fraction_of(tweet_count, rng.random_range(0.02..0.06));
    let likes = fraction_of(tweet_count, rng.random_range(0.08..0.20));
    let comments = fraction_of(tweet_count, rng.random_range(0.01..0.03));

    let sentiment = analyzer.analyze(hashtag);

    debug!(
        hashtag,
        rank,
        tweet_count,
        overall = sentiment.overall.as_str(),
        "Built trend"
    );

    TrendRecord {
        id: format!("{hashtag}-{rank}"),
        hashtag: hashtag.to_string(),
        rank,
        tweet_count,
        velocity,
        retweets,
        likes,
        comments,
        sentiment,
        last_updated: Utc::now().to_rfc3339(),
    }
}

/// Build trends for a list of hashtags, ranked in order starting at 1.
pub fn build_trends<R: Rng, S: AsRef<str>>(
    rng: &mut R,
    analyzer: &dyn SentimentAnalyzer,
    hashtags: &[S],
) -> Vec<TrendRecord> {
    hashtags
        .iter()
        .zip(1u32..)
        .map(|(tag, rank)| build_trend(rng, analyzer, tag.as_ref(), rank))
        .collect()
}

/// Produce the next generation of a trend.
///
/// Velocity moves by up to ±100 and stays within ±500, tweet count follows
/// velocity, engagement jitters, and sentiment drifts by up to
/// `max_drift` points.
pub fn refresh_trend<R: Rng>(rng: &mut R, trend: &TrendRecord, max_drift: u8) -> TrendRecord {
    let velocity_change = rng.random_range(-100..100i64);
    let velocity = (trend.velocity + velocity_change).clamp(-MAX_VELOCITY, MAX_VELOCITY);
    let tweet_count = trend.tweet_count.saturating_add_signed(velocity);

    let retweets = jitter(rng, trend.retweets, 25);
    let likes = jitter(rng, trend.likes, 50);
    let comments = jitter(rng, trend.comments, 15);

    let bound = i32::from(max_drift);
    let delta = rng.random_range(-bound..=bound);
    let sentiment = apply_drift(&trend.sentiment, delta);

    TrendRecord {
        id: trend.id.clone(),
        hashtag: trend.hashtag.clone(),
        rank: trend.rank,
        tweet_count,
        velocity,
        retweets,
        likes,
        comments,
        sentiment,
        last_updated: Utc::now().to_rfc3339(),
    }
}

/// Attach accounts to a trend and compute the aggregate fields.
pub fn with_accounts(trend: TrendRecord, accounts: Vec<AccountRecord>) -> TrendWithAccounts {
    let total_engagement = trend.engagement();
    let city_distribution = city_distribution(&accounts);
    TrendWithAccounts {
        trend,
        top_accounts: accounts,
        total_engagement,
        city_distribution,
    }
}

fn fraction_of(count: u64, fraction: f64) -> u64 {
    (count as f64 * fraction).floor() as u64
}

/// Move `value` by a random amount in `[-spread, spread)`, floored at 0.
fn jitter<R: Rng>(rng: &mut R, value: u64, spread: i64) -> u64 {
    value.saturating_add_signed(rng.random_range(-spread..spread))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::traits::LexiconAnalyzer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_trend_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        for rank in 1..=50 {
            let trend = build_trend(&mut rng, &LexiconAnalyzer, "#الرياض", rank);
            assert!(trend.tweet_count >= 5_000 && trend.tweet_count < 53_000);
            assert!(trend.velocity >= -180 && trend.velocity < 420);
            assert!(trend.retweets <= trend.tweet_count / 10);
            assert_eq!(trend.sentiment.sum(), 100);
            assert_eq!(trend.id, format!("#الرياض-{rank}"));
        }
    }

    #[test]
    fn test_refresh_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut trend = build_trend(&mut rng, &LexiconAnalyzer, "#نيوم", 1);
        for _ in 0..500 {
            let next = refresh_trend(&mut rng, &trend, 20);
            assert!(next.velocity.abs() <= 500);
            assert_eq!(next.sentiment.sum(), 100);
            assert_eq!(next.id, trend.id);
            trend = next;
        }
    }

    #[test]
    fn test_zero_drift_keeps_sentiment() {
        let mut rng = StdRng::seed_from_u64(3);
        let trend = build_trend(&mut rng, &LexiconAnalyzer, "#فرح", 2);
        let next = refresh_trend(&mut rng, &trend, 0);
        assert_eq!(next.sentiment, trend.sentiment);
    }
}
