use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::Duration;
use tracing::info;

use trendlens::config::Config;
use trendlens::generate::{accounts, filters, trends};
use trendlens::output::terminal;
use trendlens::pipeline::refresh::RefreshLoop;
use trendlens::scoring::{bot, risk};
use trendlens::sentiment::{self, traits::LexiconAnalyzer, SentimentDistribution};

/// TrendLens: bot-likelihood and sentiment scoring for Saudi trending hashtags.
#[derive(Parser)]
#[command(name = "trendlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an account for bot likelihood
    Score {
        /// The handle to score (without @)
        username: String,

        /// Follower count
        #[arg(long)]
        followers: u64,

        /// Days since the account was created
        #[arg(long)]
        age_days: i64,

        /// The account is verified
        #[arg(long)]
        verified: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the risk level for a bot score
    Risk {
        /// Bot score (0-100)
        score: f64,
    },

    /// Analyze the sentiment of Arabic text
    Sentiment {
        /// Text to analyze (multiple words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Apply one drift step to a sentiment distribution
    Drift {
        #[arg(long)]
        positive: u8,

        #[arg(long)]
        negative: u8,

        /// Points moved from negative to positive (negative values move the other way)
        #[arg(long, allow_hyphen_values = true)]
        delta: i32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Generate trends with scored accounts
    Simulate {
        /// Hashtags to generate (default: built-in fallback list)
        #[arg(long = "hashtag")]
        hashtags: Vec<String>,

        /// Accounts per trend (default: TRENDLENS_ACCOUNTS_PER_TREND)
        #[arg(long)]
        accounts: Option<usize>,

        /// Hide accounts flagged as bots
        #[arg(long)]
        exclude_bots: bool,

        /// Only show accounts from these cities (repeatable)
        #[arg(long = "city")]
        cities: Vec<String>,

        /// Only show trends with at least this much engagement
        #[arg(long, default_value = "0")]
        min_engagement: u64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Refresh simulated trends periodically and print each snapshot
    Watch {
        /// Hashtags to track (default: built-in fallback list)
        #[arg(long = "hashtag")]
        hashtags: Vec<String>,

        /// Stop after this many refreshes (default: run until Ctrl-C)
        #[arg(long)]
        ticks: Option<u64>,

        /// Seconds between refreshes (default: TRENDLENS_REFRESH_SECS)
        #[arg(long)]
        interval_secs: Option<u64>,

        /// Print each snapshot as a JSON line
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trendlens=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            username,
            followers,
            age_days,
            verified,
            json,
        } => {
            let signals = bot::BotSignals {
                followers,
                account_age_days: age_days,
                username,
                verified,
            };
            let result = bot::score(&signals);

            if json {
                let assessment = risk::risk_level(f64::from(result.score));
                let out = serde_json::json!({
                    "signals": signals,
                    "result": result,
                    "risk": assessment,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                terminal::display_bot_score(&signals.username, &result);
            }
        }

        Commands::Risk { score } => {
            let assessment = risk::risk_level(score);
            println!(
                "{} → {} ({}, {})",
                score,
                assessment.level,
                assessment.label,
                assessment.level.label_ar()
            );
        }

        Commands::Sentiment { text, json } => {
            let text = text.join(" ");
            let tally = sentiment::tally(&text);
            let dist = sentiment::normalize(&tally);

            if json {
                let out = serde_json::json!({ "tally": tally, "distribution": dist });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                terminal::display_sentiment(&dist, Some(&tally));
            }
        }

        Commands::Drift {
            positive,
            negative,
            delta,
            json,
        } => {
            if positive > 100 || negative > 100 {
                anyhow::bail!("--positive and --negative must be between 0 and 100");
            }
            let neutral = 100u8.saturating_sub(positive.saturating_add(negative));
            let current = SentimentDistribution::from_parts(positive, negative, neutral);
            let next = sentiment::apply_drift(&current, delta);

            if json {
                println!("{}", serde_json::to_string_pretty(&next)?);
            } else {
                terminal::display_sentiment(&next, None);
            }
        }

        Commands::Simulate {
            hashtags,
            accounts: account_count,
            exclude_bots,
            cities,
            min_engagement,
            json,
        } => {
            let active = filters::Filters {
                cities,
                exclude_bots,
                min_engagement,
            }
            .resolve_cities()?;
            let config = Config::load()?;
            let mut rng = make_rng(&config);
            let hashtags = hashtags_or_fallback(hashtags);
            let per_trend = account_count.unwrap_or(config.accounts_per_trend);
            let stamp = chrono::Utc::now().timestamp_millis();

            info!(
                trends = hashtags.len(),
                accounts_per_trend = per_trend,
                "Generating simulated trends"
            );

            let built: Vec<_> = trends::build_trends(&mut rng, &LexiconAnalyzer, &hashtags)
                .into_iter()
                .map(|trend| {
                    let accounts = accounts::generate_accounts(
                        &mut rng,
                        &trend.id,
                        per_trend,
                        config.bot_threshold,
                        stamp,
                    );
                    trends::with_accounts(trend, accounts)
                })
                .collect();

            let shown = filters::apply_filters(&built, &active);

            if json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                terminal::display_trends(&shown);
            }
        }

        Commands::Watch {
            hashtags,
            ticks,
            interval_secs,
            json,
        } => {
            let config = Config::load()?;
            let mut rng = make_rng(&config);
            let hashtags = hashtags_or_fallback(hashtags);
            let period = Duration::from_secs(interval_secs.unwrap_or(config.refresh_secs));

            let initial = trends::build_trends(&mut rng, &LexiconAnalyzer, &hashtags);
            let mut refresh = RefreshLoop::new(initial, config.max_drift, rng);

            println!(
                "Watching {} hashtags, refreshing every {}s. {}",
                hashtags.len(),
                period.as_secs(),
                "Ctrl-C to stop.".dimmed()
            );

            let emitted = refresh
                .run(period, ticks, |snapshot| {
                    if json {
                        println!("{}", serde_json::to_string(snapshot)?);
                    } else {
                        terminal::display_snapshot(snapshot);
                    }
                    Ok(())
                })
                .await?;

            println!("{} {emitted} refreshes", "Done:".bold());
        }
    }

    Ok(())
}

/// Seeded RNG when TRENDLENS_SEED is set, otherwise seeded from the OS.
fn make_rng(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => {
            info!(seed, "Using fixed RNG seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

fn hashtags_or_fallback(hashtags: Vec<String>) -> Vec<String> {
    if hashtags.is_empty() {
        trends::FALLBACK_HASHTAGS
            .iter()
            .map(|t| t.to_string())
            .collect()
    } else {
        hashtags
    }
}
