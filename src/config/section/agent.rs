//! `[agent]` section configuration.
//!
//! The agent is the organization behind the site: it feeds the
//! `RealEstateAgent` structured data, the geo meta tags, the contact
//! section and the social links.
//!
//! # Example
//!
//! ```toml
//! [agent]
//! name = "Jane Doe"
//! name_zh = "杜简"
//! phone = "+1-415-555-0100"
//! email = "jane@example-realty.com"
//! city = "San Francisco"
//! region = "CA"
//! country = "US"
//! latitude = 37.7936
//! longitude = -122.3958
//! areas = ["San Francisco", "Oakland"]
//!
//! [agent.social]
//! facebook = "https://www.facebook.com/example.realty"
//! wechat = "example_realty"
//! ```

use crate::config::ConfigDiagnostics;
use crate::core::Language;
use serde::{Deserialize, Serialize};

/// Agent identity and location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Display name (English).
    pub name: String,

    /// Display name (Chinese). Falls back to `name` when unset.
    pub name_zh: Option<String>,

    pub phone: Option<String>,
    pub email: Option<String>,

    /// License number shown in the footer (e.g. "DRE #01234567").
    pub license: Option<String>,

    pub street: Option<String>,
    pub city: Option<String>,
    /// State or province code (e.g. "CA").
    pub region: Option<String>,
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Areas served, listed in `areaServed` and the hero copy.
    pub areas: Vec<String>,

    pub social: SocialConfig,
}

/// Social profile links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    /// WeChat ID (not a URL).
    pub wechat: Option<String>,
}

impl SocialConfig {
    /// Profile URLs for `sameAs`, in a stable order.
    pub fn profile_urls(&self) -> Vec<&str> {
        [&self.facebook, &self.linkedin, &self.instagram]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .collect()
    }
}

impl AgentConfig {
    /// Agent name in the given language.
    pub fn display_name(&self, lang: Language) -> &str {
        match (lang, &self.name_zh) {
            (Language::Zh, Some(name)) => name,
            _ => &self.name,
        }
    }

    /// `geo.region` value, e.g. `US-CA`.
    pub fn geo_region(&self) -> Option<String> {
        match (&self.country, &self.region) {
            (Some(country), Some(region)) => Some(format!("{country}-{region}")),
            (Some(country), None) => Some(country.clone()),
            _ => None,
        }
    }

    /// Coordinates when both are configured.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Single-line postal address for display.
    pub fn address_line(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.street, &self.city, &self.region, &self.postal_code]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }

    /// Validate agent configuration.
    ///
    /// # Checks
    /// - `name` must be non-empty
    /// - `latitude` in `-90..=90`, `longitude` in `-180..=180`
    /// - both coordinates or neither
    /// - `country` is a two-letter code
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                "agent.name",
                "agent.name is not configured",
                "set agent.name, e.g.: \"Jane Doe\"",
            );
        }

        if let Some(lat) = self.latitude
            && !(-90.0..=90.0).contains(&lat)
        {
            diag.error_with_hint(
                "agent.latitude",
                format!("latitude {lat} is out of range"),
                "latitude must be between -90 and 90",
            );
        }
        if let Some(lng) = self.longitude
            && !(-180.0..=180.0).contains(&lng)
        {
            diag.error_with_hint(
                "agent.longitude",
                format!("longitude {lng} is out of range"),
                "longitude must be between -180 and 180",
            );
        }
        if self.latitude.is_some() != self.longitude.is_some() {
            diag.warn(
                "agent.latitude",
                "latitude and longitude must both be set; geo.position is skipped",
            );
        }

        if let Some(country) = &self.country
            && (country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()))
        {
            diag.error_with_hint(
                "agent.country",
                format!("`{country}` is not an ISO 3166-1 alpha-2 code"),
                "use a two-letter uppercase code, e.g.: \"US\"",
            );
        }
    }
}
