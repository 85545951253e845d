//! `[market]` section configuration.
//!
//! ```toml
//! [market]
//! data = "data/market.json"   # optional, read at render time
//!
//! [market.stats]              # inline values used when `data` is unset
//! median_price = 1350000
//! days_on_market = 18
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// JSON file with `MarketStats` fields, relative to the project root.
    pub data: Option<PathBuf>,

    /// Inline statistics.
    pub stats: MarketStats,
}

/// Market statistics shown in the stats section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketStats {
    pub median_price: u64,
    pub days_on_market: u32,
    pub active_listings: u32,
    /// Year-over-year price change in percent.
    pub year_over_year: f64,
}

impl Default for MarketStats {
    fn default() -> Self {
        Self {
            median_price: 1_350_000,
            days_on_market: 18,
            active_listings: 742,
            year_over_year: 4.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_market_defaults() {
        let config = test_parse_config("");
        assert!(config.market.data.is_none());
        assert_eq!(config.market.stats, MarketStats::default());
    }

    #[test]
    fn test_market_inline_stats() {
        let config = test_parse_config("[market.stats]\nmedian_price = 990000\nyear_over_year = -1.5");
        assert_eq!(config.market.stats.median_price, 990_000);
        assert_eq!(config.market.stats.year_over_year, -1.5);
        assert_eq!(config.market.stats.days_on_market, 18);
    }

    #[test]
    fn test_stats_from_json() {
        let stats: MarketStats = serde_json::from_str(r#"{"active_listings": 12}"#).unwrap();
        assert_eq!(stats.active_listings, 12);
        assert_eq!(stats.median_price, 1_350_000);
    }
}
