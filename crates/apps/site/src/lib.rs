//! Single-page site composer: fixed navigation plus eight scroll-anchored
//! sections, driven by the reveal/motion/map crates.
//!
//! The browser-facing half lives in [`app`] and only compiles for wasm;
//! everything here (configuration, animation presets, style formatting) is
//! pure and tested natively.

pub mod chart;
pub mod presets;
pub mod styles;

#[cfg(target_arch = "wasm32")]
pub mod app;

use map::MapConfig;
use serde::{Deserialize, Serialize};

/// Wire form of the init options, accepted from the host page as JSON:
/// `{"accessToken": "pk...", "reducedMotion": false}`. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteOptions {
    pub access_token: Option<String>,
    pub reduced_motion: bool,
}

impl SiteOptions {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn into_config(self) -> SiteConfig {
        SiteConfig::new(self.access_token, self.reduced_motion)
    }
}

/// Page-session configuration, assembled once at init from values the host
/// page passes in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Tile-map access token; absence selects the vector fallback.
    pub access_token: Option<String>,
    /// Skip entrance animations entirely (accessibility escape hatch):
    /// every reveal target starts in its revealed state.
    pub reduced_motion: bool,
}

impl SiteConfig {
    pub fn new(access_token: Option<String>, reduced_motion: bool) -> Self {
        // Treat a blank token the same as no token.
        let access_token = access_token.filter(|t| !t.trim().is_empty());
        Self {
            access_token,
            reduced_motion,
        }
    }

    pub fn map_config(&self) -> MapConfig {
        MapConfig {
            access_token: self.access_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SiteConfig, SiteOptions};
    use map::{MapBackend, select_backend};

    #[test]
    fn blank_token_is_dropped_at_the_door() {
        let config = SiteConfig::new(Some("  ".into()), false);
        assert_eq!(config.access_token, None);
        assert_eq!(select_backend(&config.map_config()), MapBackend::Vector);
    }

    #[test]
    fn real_token_reaches_the_map_config() {
        let config = SiteConfig::new(Some("pk.abc".into()), false);
        assert_eq!(select_backend(&config.map_config()), MapBackend::Tiles);
    }

    #[test]
    fn options_parse_from_camel_case_json() {
        let options =
            SiteOptions::parse(r#"{"accessToken": "pk.abc", "reducedMotion": true}"#).unwrap();
        assert_eq!(options.access_token.as_deref(), Some("pk.abc"));
        assert!(options.reduced_motion);

        let config = options.into_config();
        assert_eq!(config.access_token.as_deref(), Some("pk.abc"));
        assert!(config.reduced_motion);
    }

    #[test]
    fn empty_options_object_is_the_default() {
        let options = SiteOptions::parse("{}").unwrap();
        assert_eq!(options, SiteOptions::default());
        assert_eq!(
            select_backend(&options.into_config().map_config()),
            MapBackend::Vector
        );
    }

    #[test]
    fn malformed_options_are_an_error() {
        assert!(SiteOptions::parse("not json").is_err());
    }
}
