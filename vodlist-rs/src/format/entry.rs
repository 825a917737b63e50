use smol_str::SmolStr;

use crate::format::{DEFAULT_PLAYER_HINT, UNCATEGORIZED};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Entry {
    /// Zero-based line index of the `#EXTINF` line
    pub id: usize,
    /// Display title
    pub name: SmolStr,
    /// Artwork of this entry
    pub logo_url: Option<SmolStr>,
    /// Category label, never empty
    pub group: SmolStr,
    /// Free-form playback hint
    pub player_hint: SmolStr,
    /// Subtitle track of this entry
    pub subtitle_url: Option<SmolStr>,
    /// Playable sources, the first one is the primary source
    pub source_urls: Vec<SmolStr>,
}

impl Entry {
    pub fn new(id: usize, name: impl Into<SmolStr>) -> Self {
        Self {
            id,
            name: name.into(),
            logo_url: None,
            group: SmolStr::new_static(UNCATEGORIZED),
            player_hint: SmolStr::new_static(DEFAULT_PLAYER_HINT),
            subtitle_url: None,
            source_urls: Vec::new(),
        }
    }
}
