use std::{fs::File, path::Path};

use anyhow::Result;
use serde::Deserialize;
use vodlist_rs::PlayerBridge;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub listen_addr: String,
    /// Url or local path of the playlist
    pub playlist: String,
    /// Seconds between refreshes, absent or 0 disables refreshing
    pub refresh_interval: Option<u64>,
    #[serde(default)]
    pub http: HttpConfig,
    pub bridge: Option<BridgeConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    pub endpoint: Option<String>,
    pub subtitle_language: Option<String>,
    pub subtitle_label: Option<String>,
}

impl Config {
    pub fn player_bridge(&self) -> PlayerBridge {
        let mut bridge = PlayerBridge::default();
        let Some(config) = &self.bridge else {
            return bridge;
        };

        if let Some(endpoint) = &config.endpoint {
            bridge.endpoint = endpoint.into();
        }
        if let Some(language) = &config.subtitle_language {
            bridge.subtitle_language = language.into();
        }
        if let Some(label) = &config.subtitle_label {
            bridge.subtitle_label = label.into();
        }
        bridge
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = File::open(path.as_ref())?;
    let config: Config = serde_yaml::from_reader(file)?;
    Ok(config)
}
