//! # vodlist-rs
//! A library for parsing m3u video playlists into a browsable catalog
//!
//! # Example
//! ```rust
//! use vodlist_rs::{Catalog, GroupFilter, PlayerBridge, PlayerMode, parse};
//!
//! // 1. Parse
//! let entries = parse(r#"
//! #EXTINF:-1 tvg-name="Demo" group-title="Action",Demo
//! #EXT-X-MEDIA:TYPE=SUBTITLES,GROUP-ID="subs",URI="sub.vtt"
//! http://a/1.mp4
//! http://b/2.mp4"#);
//!
//! // 2. Query
//! let catalog = Catalog::build(entries);
//! assert_eq!(catalog.groups(), ["Action"]);
//! let found = catalog.filter(GroupFilter::All, "dem");
//! assert_eq!(found.len(), 1);
//!
//! // 3. Play the second source through the bridge
//! let playback = found[0].playback(1, &PlayerBridge::default()).unwrap();
//! assert_eq!(playback.mode, PlayerMode::Generator);
//! ```

mod catalog;
pub mod format;
mod parser;
mod player;
pub use catalog::*;
pub use format::Entry;
pub use parser::*;
pub use player::*;
