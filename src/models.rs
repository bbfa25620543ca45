// Data models — plain records handed to whatever store or transport sits
// downstream.
//
// Records are built once and never mutated in place; a refresh produces a
// new record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::bot::BotBreakdown;
use crate::scoring::risk::RiskLevel;
use crate::sentiment::SentimentDistribution;

/// A simulated account attached to a trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub verified: bool,
    pub is_bot: bool,
    pub bot_score: u8,
    pub bot_breakdown: BotBreakdown,
    pub risk_level: RiskLevel,
    pub city: Option<String>,
    pub followers: u64,
    pub account_age_days: i64,
    pub trend_id: String,
}

/// A trending hashtag with engagement figures and sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    /// `"{hashtag}-{rank}"`
    pub id: String,
    pub hashtag: String,
    pub rank: u32,
    pub tweet_count: u64,
    /// Change in tweet count; may be negative
    pub velocity: i64,
    pub retweets: u64,
    pub likes: u64,
    pub comments: u64,
    pub sentiment: SentimentDistribution,
    pub last_updated: String,
}

impl TrendRecord {
    /// Retweets, likes and comments combined. Saturates at `u64::MAX`.
    pub fn engagement(&self) -> u64 {
        self.retweets
            .saturating_add(self.likes)
            .saturating_add(self.comments)
    }
}

/// A `trends_update` payload pushed to subscribers on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSnapshot {
    pub tick: u64,
    pub trends: Vec<TrendRecord>,
    pub timestamp: String,
}

/// A trend plus the accounts driving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendWithAccounts {
    pub trend: TrendRecord,
    pub top_accounts: Vec<AccountRecord>,
    pub total_engagement: u64,
    /// City name -> number of accounts from that city
    pub city_distribution: BTreeMap<String, usize>,
}

/// Count accounts per city. Accounts without a city are skipped.
pub fn city_distribution(accounts: &[AccountRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for city in accounts.iter().filter_map(|a| a.city.as_deref()) {
        *counts.entry(city.to_string()).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Central,
    Western,
    Eastern,
    Northern,
    Southern,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaudiCity {
    pub name: &'static str,
    pub name_en: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub region: Region,
}

const fn city(
    name: &'static str,
    name_en: &'static str,
    lat: f64,
    lng: f64,
    region: Region,
) -> SaudiCity {
    SaudiCity {
        name,
        name_en,
        lat,
        lng,
        region,
    }
}

/// Cities used for filters and the city grid.
pub const SAUDI_CITIES: &[SaudiCity] = &[
    city("الرياض", "Riyadh", 24.7136, 46.6753, Region::Central),
    city("جدة", "Jeddah", 21.5433, 39.1728, Region::Western),
    city("مكة المكرمة", "Makkah", 21.4225, 39.8262, Region::Western),
    city("المدينة المنورة", "Madinah", 24.5247, 39.5692, Region::Western),
    city("الدمام", "Dammam", 26.4207, 50.0888, Region::Eastern),
    city("الخبر", "Khobar", 26.2172, 50.1971, Region::Eastern),
    city("الظهران", "Dhahran", 26.2361, 50.0393, Region::Eastern),
    city("الطائف", "Taif", 21.2703, 40.4158, Region::Western),
    city("تبوك", "Tabuk", 28.3838, 36.5550, Region::Northern),
    city("بريدة", "Buraidah", 26.3260, 43.9750, Region::Central),
    city("أبها", "Abha", 18.2164, 42.5053, Region::Southern),
    city("خميس مشيط", "Khamis Mushait", 18.3063, 42.7291, Region::Southern),
    city("حائل", "Hail", 27.5219, 41.6901, Region::Northern),
    city("نجران", "Najran", 17.5648, 44.2290, Region::Southern),
    city("الجبيل", "Jubail", 27.0174, 49.6251, Region::Eastern),
    city("ينبع", "Yanbu", 24.0896, 38.0618, Region::Western),
];

/// Look up a city by its English name (case-insensitive).
pub fn find_city(name_en: &str) -> Option<&'static SaudiCity> {
    SAUDI_CITIES
        .iter()
        .find(|c| c.name_en.eq_ignore_ascii_case(name_en))
}
