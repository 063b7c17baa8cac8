//! Site configuration.
//!
//! Defaults cover every deployment we run today. A deployment can still
//! override any field by setting `window.SITE_CONFIG` to a JSON string
//! before the bundle loads; unknown or malformed input falls back to the
//! defaults rather than breaking the page.

use serde::Deserialize;
use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// How long the loading overlay stays up, in milliseconds.
    pub loading_duration_ms: u32,
    /// Auto-advance interval for the image gallery.
    pub auto_play_interval_ms: u32,
    /// Gate for starting the gallery timer at all.
    pub auto_play_enabled: bool,
    /// Master switch for usage reporting.
    pub analytics_enabled: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            loading_duration_ms: 1200,
            auto_play_interval_ms: 5000,
            auto_play_enabled: true,
            analytics_enabled: true,
        }
    }
}

/// Resolve the active configuration for this page load.
pub fn get() -> SiteConfig {
    let injected = web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("SITE_CONFIG")).ok())
        .and_then(|value| value.as_string());

    match injected {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring invalid SITE_CONFIG override: {}", err);
            SiteConfig::default()
        }),
        None => SiteConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_behavior() {
        let config = SiteConfig::default();
        assert_eq!(config.loading_duration_ms, 1200);
        assert_eq!(config.auto_play_interval_ms, 5000);
        assert!(config.auto_play_enabled);
        assert!(config.analytics_enabled);
    }

    #[test]
    fn override_merges_over_defaults() {
        let config: SiteConfig =
            serde_json::from_str(r#"{"auto_play_enabled": false, "loading_duration_ms": 600}"#)
                .unwrap();
        assert!(!config.auto_play_enabled);
        assert_eq!(config.loading_duration_ms, 600);
        assert_eq!(config.auto_play_interval_ms, 5000);
        assert!(config.analytics_enabled);
    }
}
