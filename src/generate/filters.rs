// Dashboard filters over trends with accounts.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{city_distribution, find_city, TrendWithAccounts, SAUDI_CITIES};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filters {
    /// English city names; empty means every city
    pub cities: Vec<String>,
    pub exclude_bots: bool,
    pub min_engagement: u64,
}

impl Filters {
    /// Replace each requested city with its canonical English name.
    ///
    /// Fails on the first name that is not in the city table.
    pub fn resolve_cities(mut self) -> Result<Self> {
        for name in &mut self.cities {
            let Some(city) = find_city(name.trim()) else {
                let known: Vec<&str> = SAUDI_CITIES.iter().map(|c| c.name_en).collect();
                anyhow::bail!("Unknown city {name:?} (known: {})", known.join(", "));
            };
            *name = city.name_en.to_string();
        }
        Ok(self)
    }
}

/// Apply filters, returning new aggregates.
///
/// Trends below `min_engagement` are dropped entirely. Accounts are
/// filtered by bot flag and city, and the city distribution is recomputed
/// from the accounts that remain.
pub fn apply_filters(trends: &[TrendWithAccounts], filters: &Filters) -> Vec<TrendWithAccounts> {
    let filtered: Vec<TrendWithAccounts> = trends
        .iter()
        .filter(|t| t.total_engagement >= filters.min_engagement)
        .map(|t| {
            let top_accounts: Vec<_> = t
                .top_accounts
                .iter()
                .filter(|a| !(filters.exclude_bots && a.is_bot))
                .filter(|a| {
                    filters.cities.is_empty()
                        || a.city.as_deref().is_some_and(|c| {
                            filters.cities.iter().any(|f| f.eq_ignore_ascii_case(c))
                        })
                })
                .cloned()
                .collect();

            TrendWithAccounts {
                trend: t.trend.clone(),
                city_distribution: city_distribution(&top_accounts),
                total_engagement: t.total_engagement,
                top_accounts,
            }
        })
        .collect();

    for city in &filters.cities {
        let matched = filtered
            .iter()
            .any(|t| t.city_distribution.keys().any(|c| c.eq_ignore_ascii_case(city)));
        if !matched {
            warn!(city = %city, "City filter matched no accounts");
        }
    }

    filtered
}
