// Colored terminal output for bot scores, sentiment, and trend lists.
//
// main.rs delegates all display work here so the commands stay short.

use colored::Colorize;

use crate::models::{TrendSnapshot, TrendWithAccounts};
use crate::scoring::bot::BotScoreResult;
use crate::scoring::risk::RiskLevel;
use crate::sentiment::{Sentiment, SentimentDistribution, SentimentTally};

/// Display a single account's bot score with its breakdown.
pub fn display_bot_score(username: &str, result: &BotScoreResult) {
    let level = RiskLevel::from_score(f64::from(result.score));

    println!("\n{}", format!("=== Bot score for @{username} ===").bold());
    println!("  Score: {}/100", result.score);
    println!(
        "  Risk:  {} ({})",
        colorize_risk(level),
        level.label_ar()
    );

    let b = &result.breakdown;
    println!("\n  Breakdown:");
    println!("    Follower pattern:  {:>4}", b.follower_pattern);
    println!("    Account age:       {:>4}", b.account_age);
    println!("    Username pattern:  {:>4}", b.username_pattern);
    println!("    Growth rate:       {:>4}", b.growth_rate);
    println!("    Verification:      {:>4}", b.verification_adjustment);
    println!("    {}", "-".repeat(23).dimmed());
    println!("    Raw total:         {:>4}", b.total());
}

/// Display a sentiment distribution, optionally with the tally behind it.
pub fn display_sentiment(dist: &SentimentDistribution, tally: Option<&SentimentTally>) {
    println!("\n{}", "=== Sentiment ===".bold());
    if let Some(t) = tally {
        println!(
            "  Hits: {} positive, {} negative, {} neutral",
            t.positive_hits, t.negative_hits, t.neutral_hits
        );
    }
    println!(
        "  Positive {:>3}%  {}",
        dist.positive,
        super::percent_bar(dist.positive, 20).green()
    );
    println!(
        "  Negative {:>3}%  {}",
        dist.negative,
        super::percent_bar(dist.negative, 20).red()
    );
    println!(
        "  Neutral  {:>3}%  {}",
        dist.neutral,
        super::percent_bar(dist.neutral, 20).dimmed()
    );
    println!("  Overall: {}", colorize_sentiment(dist.overall));
}

/// Display trends with their accounts, ranked.
pub fn display_trends(trends: &[TrendWithAccounts]) {
    if trends.is_empty() {
        println!("No trends match the current filters.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Trending in Saudi Arabia ({} hashtags) ===", trends.len()).bold()
    );
    println!();

    for entry in trends {
        let t = &entry.trend;
        println!(
            "  {:>3}. {:<28} {:>7} tweets  {:>+5}/h  engagement {:>6}  {}",
            t.rank,
            super::truncate_chars(&t.hashtag, 24),
            t.tweet_count,
            t.velocity,
            entry.total_engagement,
            sentiment_summary(&t.sentiment),
        );

        for account in &entry.top_accounts {
            let level = account.risk_level;
            let bot_marker = if account.is_bot {
                "bot".red().to_string()
            } else {
                "   ".normal().to_string()
            };
            println!(
                "         @{:<36} {:>7} followers  score {:>3}  {:<10} {}  {}",
                super::truncate_chars(&account.username, 34),
                account.followers,
                account.bot_score,
                colorize_risk(level),
                bot_marker,
                account.city.as_deref().unwrap_or("-").dimmed(),
            );
        }

        if !entry.city_distribution.is_empty() {
            let cities: Vec<String> = entry
                .city_distribution
                .iter()
                .map(|(city, n)| format!("{city} {n}"))
                .collect();
            println!("         {}", cities.join(", ").dimmed());
        }
        println!();
    }

    let bots: usize = trends
        .iter()
        .map(|t| t.top_accounts.iter().filter(|a| a.is_bot).count())
        .sum();
    let accounts: usize = trends.iter().map(|t| t.top_accounts.len()).sum();
    if bots > 0 {
        println!("  {} {bots} of {accounts} accounts flagged as likely bots", "!".red().bold());
    }
}

/// Display one refresh snapshot as a compact table.
pub fn display_snapshot(snapshot: &TrendSnapshot) {
    println!(
        "{}",
        format!("--- tick {} @ {} ---", snapshot.tick, snapshot.timestamp).dimmed()
    );
    for t in &snapshot.trends {
        println!(
            "  {:>3}. {:<28} {:>7} tweets  {:>+5}/h  {}",
            t.rank,
            super::truncate_chars(&t.hashtag, 24),
            t.tweet_count,
            t.velocity,
            sentiment_summary(&t.sentiment),
        );
    }
}

fn sentiment_summary(dist: &SentimentDistribution) -> String {
    format!(
        "{}/{}/{} {}",
        dist.positive.to_string().green(),
        dist.negative.to_string().red(),
        dist.neutral.to_string().dimmed(),
        colorize_sentiment(dist.overall),
    )
}

fn colorize_risk(level: RiskLevel) -> colored::ColoredString {
    let text = level.label();
    match level {
        RiskLevel::VeryHigh => text.red().bold(),
        RiskLevel::High => text.bright_red(),
        RiskLevel::Medium => text.yellow(),
        RiskLevel::Low => text.green(),
    }
}

fn colorize_sentiment(sentiment: Sentiment) -> colored::ColoredString {
    let text = sentiment.as_str();
    match sentiment {
        Sentiment::Positive => text.green(),
        Sentiment::Negative => text.red(),
        Sentiment::Neutral => text.normal(),
    }
}
