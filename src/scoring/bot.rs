// Bot-likelihood score from observable account signals.
//
// Five independent sub-factors are summed and the total is clamped to 0-100.
// Nothing here can fail: degenerate inputs (zero followers, zero-day accounts,
// empty usernames) saturate into the result instead of being rejected.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Observable signals for a single account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotSignals {
    pub followers: u64,
    /// Days since account creation. Values below 1 are treated as 1.
    pub account_age_days: i64,
    /// The handle, not the display name.
    pub username: String,
    pub verified: bool,
}

/// Per-factor contributions. Their sum is the pre-clamp total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotBreakdown {
    /// One of 0, 3, 5, 15, 20 or 25
    pub follower_pattern: i32,
    pub account_age: i32,
    /// Capped at 20
    pub username_pattern: i32,
    /// -25 for verified accounts, otherwise 0
    pub verification_adjustment: i32,
    pub growth_rate: i32,
}

impl BotBreakdown {
    pub fn total(&self) -> i32 {
        self.follower_pattern
            + self.account_age
            + self.username_pattern
            + self.verification_adjustment
            + self.growth_rate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotScoreResult {
    /// 0 = confidently human, 100 = confidently automated
    pub score: u8,
    pub breakdown: BotBreakdown,
}

const USERNAME_CAP: i32 = 20;
const VERIFIED_ADJUSTMENT: i32 = -25;

/// Substrings that show up in throwaway and promotional handles.
const BOT_KEYWORDS: &[&str] = &["bot", "auto", "spam", "promo", "official", "_"];

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3,}$").expect("static regex"));
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4,}").expect("static regex"));

/// Score an account. Pure and total.
pub fn score(signals: &BotSignals) -> BotScoreResult {
    let age = signals.account_age_days.max(1);

    let breakdown = BotBreakdown {
        follower_pattern: follower_pattern(signals.followers),
        account_age: account_age(age),
        username_pattern: username_pattern(&signals.username),
        verification_adjustment: if signals.verified {
            VERIFIED_ADJUSTMENT
        } else {
            0
        },
        growth_rate: growth_rate(signals.followers, age),
    };

    let score = breakdown.total().clamp(0, 100) as u8;
    BotScoreResult { score, breakdown }
}

/// Whether a score crosses the "likely bot" line. Strictly greater than.
pub fn is_likely_bot(score: u8, threshold: u8) -> bool {
    score > threshold
}

/// Very low counts look freshly spun up; very high round counts look bought.
pub fn follower_pattern(followers: u64) -> i32 {
    if followers < 10 {
        25
    } else if followers < 50 {
        15
    } else if followers < 200 {
        5
    } else if followers > 100_000 {
        // Purchased follower bundles cluster on round numbers
        if followers % 10_000 == 0 || followers % 5_000 == 0 {
            20
        } else {
            5
        }
    } else if followers > 50_000 {
        3
    } else {
        0
    }
}

/// Newer accounts score higher. `age_days` below 1 is treated as 1.
pub fn account_age(age_days: i64) -> i32 {
    match age_days.max(1) {
        a if a < 7 => 25,
        a if a < 30 => 20,
        a if a < 90 => 10,
        a if a < 180 => 5,
        _ => 0,
    }
}

/// Handle heuristics, summed and then capped at 20.
pub fn username_pattern(username: &str) -> i32 {
    let mut total = 0;

    if TRAILING_DIGITS.is_match(username) {
        total += 15;
    }
    if DIGIT_RUN.is_match(username) {
        total += 10;
    }
    if username.chars().count() < 5 {
        total += 8;
    }

    let lowered = username.to_lowercase();
    if BOT_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        total += 12;
    }

    total.min(USERNAME_CAP)
}

/// Followers gained per day of account life.
pub fn growth_rate(followers: u64, age_days: i64) -> i32 {
    let per_day = followers as f64 / age_days.max(1) as f64;

    if per_day > 1000.0 {
        25
    } else if per_day > 500.0 {
        15
    } else if per_day > 200.0 {
        8
    } else {
        0
    }
}
