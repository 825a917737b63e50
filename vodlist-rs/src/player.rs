use smol_str::SmolStr;

use crate::format::Entry;

pub const DEFAULT_BRIDGE_ENDPOINT: &str =
    "https://anym3u8player.com/ultimate-player-generator/player.php";
pub const DEFAULT_SUBTITLE_LANGUAGE: &str = "th";
pub const DEFAULT_SUBTITLE_LABEL: &str = "Thai";

/// How a source should be played, decided by its position in `source_urls`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlayerMode {
    /// Played directly
    Native,
    /// Played through the external player bridge
    Generator,
}

impl PlayerMode {
    pub fn for_source(index: usize) -> Self {
        match index {
            1 => Self::Generator,
            _ => Self::Native,
        }
    }
}

/// External page that wraps a stream into an embeddable player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerBridge {
    pub endpoint: SmolStr,
    pub subtitle_language: SmolStr,
    pub subtitle_label: SmolStr,
}

impl Default for PlayerBridge {
    fn default() -> Self {
        Self {
            endpoint: SmolStr::new_static(DEFAULT_BRIDGE_ENDPOINT),
            subtitle_language: SmolStr::new_static(DEFAULT_SUBTITLE_LANGUAGE),
            subtitle_label: SmolStr::new_static(DEFAULT_SUBTITLE_LABEL),
        }
    }
}

impl PlayerBridge {
    /// Build the bridge url for `video_url`.
    ///
    /// Nothing is escaped, both urls must already be usable as query values.
    pub fn url(&self, video_url: &str, subtitle_url: Option<&str>) -> String {
        let mut url = format!(
            "{}?player=jwplayer&url={}&autoplay=1&muted=1&controls=auto&theme=default",
            self.endpoint, video_url
        );
        if let Some(subtitle_url) = subtitle_url {
            url.push_str(&format!(
                "&subtitles={}:{}:{}:1",
                subtitle_url, self.subtitle_language, self.subtitle_label
            ));
        }
        url
    }

    pub fn subtitle_track(&self, url: impl Into<SmolStr>) -> SubtitleTrack {
        SubtitleTrack {
            url: url.into(),
            language: self.subtitle_language.clone(),
            label: self.subtitle_label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SubtitleTrack {
    pub url: SmolStr,
    pub language: SmolStr,
    pub label: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Playback {
    /// Index into `source_urls`
    pub index: usize,
    pub mode: PlayerMode,
    /// Url to hand to the player
    pub url: String,
    pub subtitle: Option<SubtitleTrack>,
}

impl Entry {
    pub fn playback(&self, index: usize, bridge: &PlayerBridge) -> Option<Playback> {
        let source = self.source_urls.get(index)?;
        let subtitle_url = self.subtitle_url.as_deref();
        let mode = PlayerMode::for_source(index);

        let url = match mode {
            PlayerMode::Native => source.to_string(),
            PlayerMode::Generator => bridge.url(source, subtitle_url),
        };

        Some(Playback {
            index,
            mode,
            url,
            subtitle: subtitle_url.map(|x| bridge.subtitle_track(x)),
        })
    }

    /// Playback for every source, in order
    pub fn playbacks(&self, bridge: &PlayerBridge) -> Vec<Playback> {
        (0..self.source_urls.len())
            .filter_map(|x| self.playback(x, bridge))
            .collect()
    }
}
