use std::collections::HashMap;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use smol_str::SmolStr;

use crate::format::{
    DEFAULT_PLAYER_HINT, Entry, UNCATEGORIZED,
    attributes::{GROUP_TITLE, TVG_LOGO, TVG_NAME, TVG_PLAYER, URI},
    directives,
};

fn key_regex(key: &str) -> Regex {
    Regex::new(&format!(r#"{}="([^"]*)""#, regex::escape(key))).expect("Regular expression error")
}

lazy_static! {
    static ref ATTRIBUTE_REGEXES: HashMap<&'static str, Regex> =
        [TVG_NAME, TVG_LOGO, GROUP_TITLE, TVG_PLAYER, URI]
            .into_iter()
            .map(|key| (key, key_regex(key)))
            .collect();
}

fn first_value<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|x| x.get(1))
        .map(|x| x.as_str())
}

/// Find the first quoted value of `key` in `line`. An empty value counts as missing.
///
/// Each key is searched on its own, so a broken quote only affects its own attribute.
pub fn attribute<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let value = match ATTRIBUTE_REGEXES.get(key) {
        Some(regex) => first_value(regex, line),
        None => first_value(&key_regex(key), line),
    };
    value.filter(|value| !value.is_empty())
}

pub fn attribute_or<'a>(line: &'a str, key: &str, default: &'a str) -> &'a str {
    attribute(line, key).unwrap_or(default)
}

fn entry_name(line: &str) -> &str {
    attribute(line, TVG_NAME)
        .or_else(|| line.rsplit_once(',').map(|(_, title)| title.trim()))
        .unwrap_or_default()
}

fn open_entry(id: usize, line: &str) -> Entry {
    Entry {
        id,
        name: entry_name(line).into(),
        logo_url: attribute(line, TVG_LOGO).map(SmolStr::from),
        group: attribute_or(line, GROUP_TITLE, UNCATEGORIZED).into(),
        player_hint: attribute_or(line, TVG_PLAYER, DEFAULT_PLAYER_HINT).into(),
        subtitle_url: None,
        source_urls: Vec::new(),
    }
}

enum State {
    Idle,
    Open(Entry),
}

impl State {
    fn next(self, index: usize, line: &str, entries: &mut Vec<Entry>) -> Self {
        if line.is_empty() {
            return self;
        }

        // a new #EXTINF closes the previous entry
        if line.starts_with(directives::EXTINF) {
            if let Self::Open(entry) = self {
                entries.push(entry);
            }
            return Self::Open(open_entry(index, line));
        }

        match self {
            Self::Idle => {
                trace!("Line {} outside of any entry, ignored", index);
                Self::Idle
            }
            Self::Open(mut entry) => {
                if line.starts_with(directives::SUBTITLES) {
                    if let Some(uri) = attribute(line, URI) {
                        entry.subtitle_url = Some(uri.into());
                    }
                } else if line.starts_with(directives::URL_SCHEME) {
                    entry.source_urls.push(line.into());
                } else {
                    trace!("Unrecognized line {}: {}", index, line);
                }
                Self::Open(entry)
            }
        }
    }

    fn finish(self, entries: &mut Vec<Entry>) {
        if let Self::Open(entry) = self {
            entries.push(entry);
        }
    }
}

/// Parse playlist text into entries, in the order their `#EXTINF` lines appear.
///
/// Never fails: missing attributes fall back to defaults and unknown lines are skipped.
pub fn parse(text: impl AsRef<str>) -> Vec<Entry> {
    let mut entries = Vec::new();
    let state = text
        .as_ref()
        .lines()
        .enumerate()
        .fold(State::Idle, |state, (index, line)| {
            state.next(index, line.trim(), &mut entries)
        });
    state.finish(&mut entries);

    debug!("Parsed {} entries", entries.len());
    entries
}
