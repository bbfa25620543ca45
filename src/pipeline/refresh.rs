// Periodic refresh pipeline: drift every trend once per tick.
//
// Each tick replaces the current generation of trend records with a new one
// derived through `refresh_trend`, and hands the resulting snapshot to the
// caller (which may print it, store it, or push it to subscribers).

use anyhow::Result;
use chrono::Utc;
use rand::Rng;
use tokio::time::Duration;
use tracing::info;

use crate::generate::trends::refresh_trend;
use crate::models::{TrendRecord, TrendSnapshot};

pub struct RefreshLoop<R> {
    trends: Vec<TrendRecord>,
    max_drift: u8,
    rng: R,
    ticks_done: u64,
}

impl<R: Rng> RefreshLoop<R> {
    pub fn new(trends: Vec<TrendRecord>, max_drift: u8, rng: R) -> Self {
        Self {
            trends,
            max_drift,
            rng,
            ticks_done: 0,
        }
    }

    /// The current generation of trends.
    pub fn trends(&self) -> &[TrendRecord] {
        &self.trends
    }

    /// Advance one generation and return its snapshot.
    pub fn tick(&mut self) -> TrendSnapshot {
        let rng = &mut self.rng;
        let max_drift = self.max_drift;
        self.trends = self
            .trends
            .iter()
            .map(|t| refresh_trend(rng, t, max_drift))
            .collect();
        self.ticks_done += 1;

        TrendSnapshot {
            tick: self.ticks_done,
            trends: self.trends.clone(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Tick every `period` until `max_ticks` snapshots have been emitted
    /// (forever when `None`) or Ctrl-C arrives. Returns the number of
    /// snapshots emitted.
    pub async fn run<F>(
        &mut self,
        period: Duration,
        max_ticks: Option<u64>,
        mut on_snapshot: F,
    ) -> Result<u64>
    where
        F: FnMut(&TrendSnapshot) -> Result<()>,
    {
        if period.is_zero() {
            anyhow::bail!("Refresh interval must be greater than zero");
        }

        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately; consume it so the first
        // snapshot lands one full period after start.
        interval.tick().await;

        let mut emitted = 0u64;
        info!(
            trends = self.trends.len(),
            period_secs = period.as_secs_f64(),
            "Refresh loop started"
        );

        loop {
            if max_ticks.is_some_and(|max| emitted >= max) {
                break;
            }

            tokio::select! {
                _ = interval.tick() => {
                    let snapshot = self.tick();
                    on_snapshot(&snapshot)?;
                    emitted += 1;
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, stopping refresh loop");
                    break;
                }
            }
        }

        info!(emitted, "Refresh loop finished");
        Ok(emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::trends::build_trends;
    use crate::sentiment::traits::LexiconAnalyzer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_loop() -> RefreshLoop<StdRng> {
        let mut rng = StdRng::seed_from_u64(11);
        let trends = build_trends(&mut rng, &LexiconAnalyzer, &["#a", "#b", "#c"]);
        RefreshLoop::new(trends, 10, rng)
    }

    #[test]
    fn test_tick_counts_up() {
        let mut refresh = seeded_loop();
        assert_eq!(refresh.tick().tick, 1);
        let snapshot = refresh.tick();
        assert_eq!(snapshot.tick, 2);
        assert_eq!(snapshot.trends.len(), 3);
        assert_eq!(snapshot.trends, refresh.trends());
    }

    #[tokio::test]
    async fn test_run_stops_after_budget() {
        let mut refresh = seeded_loop();
        let mut seen = Vec::new();
        let emitted = refresh
            .run(Duration::from_millis(5), Some(3), |s| {
                seen.push(s.tick);
                Ok(())
            })
            .await
            .unwrap();
        assert_eq!(emitted, 3);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_run_rejects_zero_period() {
        let mut refresh = seeded_loop();
        let result = refresh.run(Duration::ZERO, Some(1), |_| Ok(())).await;
        assert!(result.is_err());
    }
}
