mod fetch;
mod playlist_parse;
pub use fetch::*;
pub use playlist_parse::*;
