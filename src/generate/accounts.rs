// Simulated account generation.
//
// Signals are drawn at random, then run through the bot scorer; the
// resulting score, breakdown, and risk level are stored on the record.

use rand::Rng;
use tracing::debug;

use crate::models::{AccountRecord, SAUDI_CITIES};
use crate::scoring::bot::{self, BotSignals};
use crate::scoring::risk::RiskLevel;

pub const DISPLAY_NAMES: &[&str] = &[
    "محمد العتيبي",
    "سارة القحطاني",
    "عبدالله السبيعي",
    "نورة المطيري",
    "خالد الدوسري",
    "فاطمة الشمري",
    "عمر الغامدي",
    "منى الحربي",
    "أحمد الزهراني",
    "ريم العنزي",
    "سلطان الشهري",
    "لينا القرشي",
    "يوسف العمري",
    "هند البقمي",
    "فهد الراشد",
    "دانة السديري",
    "ماجد الفيصل",
    "جواهر الخالدي",
    "طارق المالكي",
    "بدور السعيد",
];

pub const USERNAME_BASES: &[&str] = &[
    "saudi_voice",
    "riyadh_life",
    "jeddah_vibes",
    "ksa_today",
    "vision2030_fan",
    "neom_explorer",
    "alhilal_fan1",
    "alnasser_supporter",
    "alittihad_pride",
    "riyadh_season",
    "saudi_culture",
    "ksa_sports",
    "makkah_life",
    "madinah_news",
    "eastern_province",
    "western_region",
    "northern_star2",
    "southern_pride3",
    "central_ksa",
    "culture_ksa1",
    "sports_ksa7",
];

const VERIFIED_PROBABILITY: f64 = 0.3;
const AVATAR_VARIANTS: i64 = 70;

/// Pick a random element. The lists above are never empty.
fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generate `count` scored accounts for a trend.
///
/// `stamp` is a millisecond timestamp baked into usernames and avatar URLs
/// so repeated runs don't collide. An account is flagged as a bot when its
/// score is strictly above `bot_threshold`.
pub fn generate_accounts<R: Rng>(
    rng: &mut R,
    trend_id: &str,
    count: usize,
    bot_threshold: u8,
    stamp: i64,
) -> Vec<AccountRecord> {
    (0..count)
        .map(|i| {
            let display_name = pick(rng, DISPLAY_NAMES);
            let base = pick(rng, USERNAME_BASES);
            let city = SAUDI_CITIES[rng.random_range(0..SAUDI_CITIES.len())].name_en;

            let signals = BotSignals {
                followers: rng.random_range(1_000..101_000),
                account_age_days: rng.random_range(30..1_830),
                username: format!("{base}_{stamp}_{i}"),
                verified: rng.random_bool(VERIFIED_PROBABILITY),
            };

            build_account(trend_id, i, display_name, Some(city), &signals, bot_threshold, stamp)
        })
        .collect()
}

/// Score a set of signals and wrap the result in an account record.
pub fn build_account(
    trend_id: &str,
    index: usize,
    display_name: &str,
    city: Option<&str>,
    signals: &BotSignals,
    bot_threshold: u8,
    stamp: i64,
) -> AccountRecord {
    let result = bot::score(signals);
    let is_bot = bot::is_likely_bot(result.score, bot_threshold);

    debug!(
        username = %signals.username,
        score = result.score,
        is_bot,
        "Scored simulated account"
    );

    let avatar_index = (stamp + index as i64).rem_euclid(AVATAR_VARIANTS);

    AccountRecord {
        id: format!("{trend_id}-acct-{index}"),
        username: signals.username.clone(),
        display_name: display_name.to_string(),
        avatar: format!("https://i.pravatar.cc/150?img={avatar_index}"),
        verified: signals.verified,
        is_bot,
        bot_score: result.score,
        bot_breakdown: result.breakdown,
        risk_level: RiskLevel::from_score(f64::from(result.score)),
        city: city.map(str::to_string),
        followers: signals.followers,
        account_age_days: signals.account_age_days,
        trend_id: trend_id.to_string(),
    }
}
