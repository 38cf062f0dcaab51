use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "output_deck.player_config";

/// Where the player finds its file list and media, and which speeds it offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_listing_endpoint")]
    pub listing_endpoint: String,
    #[serde(default = "default_media_prefix")]
    pub media_prefix: String,
    /// Values carried verbatim in each speed button's `data-speed` attribute.
    #[serde(default = "default_speed_presets")]
    pub speed_presets: Vec<String>,
    /// Origin used to resolve a relative listing endpoint outside the browser.
    #[serde(default = "default_server_origin")]
    pub server_origin: String,
}

fn default_listing_endpoint() -> String {
    "/api/audio-files".to_string()
}

fn default_media_prefix() -> String {
    "output/".to_string()
}

fn default_speed_presets() -> Vec<String> {
    ["0.5", "0.75", "1", "1.25", "1.5", "2"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_server_origin() -> String {
    "http://localhost:8000".to_string()
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            listing_endpoint: default_listing_endpoint(),
            media_prefix: default_media_prefix(),
            speed_presets: default_speed_presets(),
            server_origin: default_server_origin(),
        }
    }
}

impl PlayerConfig {
    /// Absolute listing URL. Endpoints that already carry a scheme are kept as-is.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn listing_url(&self) -> String {
        let endpoint = self.listing_endpoint.trim();
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        format!(
            "{}/{}",
            self.server_origin.trim().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

/// What local storage held under the config key.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Debug)]
enum StoredConfig {
    Found(PlayerConfig),
    Missing,
    Unreadable(String),
}

/// Pick the config to run with and whether defaults should be written back.
/// Only a missing key is seeded; an unreadable value is left for the user to fix.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn settle_stored_config(stored: StoredConfig) -> (PlayerConfig, bool) {
    match stored {
        StoredConfig::Found(config) => (config, false),
        StoredConfig::Missing => (PlayerConfig::default(), true),
        StoredConfig::Unreadable(details) => {
            crate::diagnostics::report_config_unreadable(&details);
            (PlayerConfig::default(), false)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn save_config(config: &PlayerConfig) -> Result<(), StorageError> {
    LocalStorage::set(CONFIG_KEY, config)
}

/// Load the player config from local storage, seeding it with defaults on first run.
#[cfg(target_arch = "wasm32")]
pub fn load_config() -> PlayerConfig {
    let stored = match LocalStorage::get(CONFIG_KEY) {
        Ok(config) => StoredConfig::Found(config),
        Err(StorageError::KeyNotFound(_)) => StoredConfig::Missing,
        Err(err) => StoredConfig::Unreadable(err.to_string()),
    };

    let (config, seed) = settle_stored_config(stored);
    if seed {
        if let Err(err) = save_config(&config) {
            crate::diagnostics::report_config_unsaved(&err.to_string());
        }
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> PlayerConfig {
    PlayerConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_served_layout() {
        let config = PlayerConfig::default();
        assert_eq!(config.listing_endpoint, "/api/audio-files");
        assert_eq!(config.media_prefix, "output/");
        assert_eq!(config.speed_presets.len(), 6);
        assert!(config.speed_presets.contains(&"1.5".to_string()));
    }

    #[test]
    fn test_partial_config_fills_missing_fields() {
        let config: PlayerConfig =
            serde_json::from_str(r#"{ "media_prefix": "clips/" }"#).unwrap();
        assert_eq!(config.media_prefix, "clips/");
        assert_eq!(config.listing_endpoint, "/api/audio-files");
        assert_eq!(config.speed_presets, default_speed_presets());
    }

    #[test]
    fn test_listing_url_joins_origin_and_endpoint() {
        let mut config = PlayerConfig::default();
        assert_eq!(config.listing_url(), "http://localhost:8000/api/audio-files");

        config.server_origin = "http://deck.local:9000/".to_string();
        config.listing_endpoint = "api/audio-files".to_string();
        assert_eq!(config.listing_url(), "http://deck.local:9000/api/audio-files");
    }

    #[test]
    fn test_missing_config_is_seeded() {
        let (config, seed) = settle_stored_config(StoredConfig::Missing);
        assert_eq!(config, PlayerConfig::default());
        assert!(seed);
    }

    #[test]
    fn test_unreadable_config_is_not_overwritten() {
        let details = serde_json::from_str::<PlayerConfig>(r#"{ "media_prefix": "clips/", }"#)
            .unwrap_err()
            .to_string();
        let (config, seed) = settle_stored_config(StoredConfig::Unreadable(details));
        assert_eq!(config, PlayerConfig::default());
        assert!(!seed);
    }

    #[test]
    fn test_stored_config_is_used_as_is() {
        let stored = PlayerConfig {
            media_prefix: "clips/".to_string(),
            ..PlayerConfig::default()
        };
        let (config, seed) = settle_stored_config(StoredConfig::Found(stored.clone()));
        assert_eq!(config, stored);
        assert!(!seed);
    }

    #[test]
    fn test_listing_url_keeps_absolute_endpoint() {
        let config = PlayerConfig {
            listing_endpoint: "https://cdn.example.com/list.json".to_string(),
            ..PlayerConfig::default()
        };
        assert_eq!(config.listing_url(), "https://cdn.example.com/list.json");
    }
}
