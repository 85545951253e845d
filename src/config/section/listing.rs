//! `[listing]` section configuration.
//!
//! An optional featured listing. When `name` is set, the home page renders a
//! listing card and emits a `Product` block with an `Offer`.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Absolute or site-relative image URL.
    pub image: Option<String>,
    pub price: Option<u64>,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            image: None,
            price: None,
            currency: "USD".into(),
        }
    }
}

impl ListingConfig {
    /// A listing is featured once it has a name.
    pub fn is_featured(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            diag.error_with_hint(
                "listing.currency",
                format!("`{}` is not an ISO 4217 currency code", self.currency),
                "use a three-letter uppercase code, e.g.: \"USD\"",
            );
        }
        if self.is_featured() && self.price.is_none() {
            diag.warn("listing.price", "featured listing has no price; the offer omits it");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_listing_defaults() {
        let config = test_parse_config("");
        assert!(!config.listing.is_featured());
        assert_eq!(config.listing.currency, "USD");
    }

    #[test]
    fn test_featured_listing() {
        let config = test_parse_config("[listing]\nname = \"Loft\"\nprice = 900000\ncurrency = \"CNY\"");
        assert!(config.listing.is_featured());
        assert_eq!(config.listing.price, Some(900_000));
    }

    #[test]
    fn test_currency_validation() {
        let config = test_parse_config("[listing]\ncurrency = \"dollars\"");
        let mut diag = ConfigDiagnostics::new();
        config.listing.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, "listing.currency");
    }
}
