mod entry;
pub use entry::*;

/// Line prefixes recognized by the parser
pub mod directives {
    pub const EXTINF: &str = "#EXTINF";
    pub const SUBTITLES: &str = "#EXT-X-MEDIA:TYPE=SUBTITLES";
    pub const URL_SCHEME: &str = "http";
}

/// Quoted attribute keys
pub mod attributes {
    pub const TVG_NAME: &str = "tvg-name";
    pub const TVG_LOGO: &str = "tvg-logo";
    pub const GROUP_TITLE: &str = "group-title";
    pub const TVG_PLAYER: &str = "tvg-player";
    pub const URI: &str = "URI";
}

/// Group of entries without a `group-title`
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Player hint of entries without a `tvg-player`
pub const DEFAULT_PLAYER_HINT: &str = "default";
