use std::collections::BTreeSet;

use smol_str::SmolStr;

use crate::format::Entry;

/// Selector value meaning "every group"
pub const ALL_GROUPS: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GroupFilter {
    #[default]
    All,
    Group(SmolStr),
}

impl GroupFilter {
    pub fn matches(&self, group: &str) -> bool {
        match self {
            Self::All => true,
            Self::Group(expected) => expected == group,
        }
    }
}

impl From<&str> for GroupFilter {
    fn from(value: &str) -> Self {
        if value == ALL_GROUPS {
            Self::All
        } else {
            Self::Group(value.into())
        }
    }
}

impl From<String> for GroupFilter {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SmolStr> for GroupFilter {
    fn from(value: SmolStr) -> Self {
        Self::from(value.as_str())
    }
}

/// Read-only view over one parsed playlist.
///
/// A refreshed playlist is a new `Catalog`, never an update of an existing one.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    groups: Vec<SmolStr>,
}

impl Catalog {
    pub fn build(entries: Vec<Entry>) -> Self {
        let groups = entries
            .iter()
            .map(|x| &x.group)
            .filter(|x| !x.is_empty())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self { entries, groups }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Distinct group labels, sorted ascending
    pub fn groups(&self) -> &[SmolStr] {
        &self.groups
    }

    pub fn entry(&self, id: usize) -> Option<&Entry> {
        self.entries.iter().find(|x| x.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in `group` whose name contains `search`, ignoring case.
    ///
    /// An empty `search` matches every name. Catalog order is kept.
    pub fn filter(&self, group: impl Into<GroupFilter>, search: impl AsRef<str>) -> Vec<Entry> {
        let group = group.into();
        let needle = search.as_ref().to_lowercase();

        self.entries
            .iter()
            .filter(|x| group.matches(&x.group))
            .filter(|x| needle.is_empty() || x.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

impl From<Vec<Entry>> for Catalog {
    fn from(value: Vec<Entry>) -> Self {
        Self::build(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Catalog, GroupFilter, parse};

    const DATA: &str = r#"#EXTM3U
#EXTINF:-1 tvg-name="Night Terror" group-title="Horror",x
http://a/1.mp4
#EXTINF:-1 tvg-name="Daylight" group-title="Action",x
http://a/2.mp4
#EXTINF:-1 tvg-name="The NIGHT shift" group-title="Horror",x
http://a/3.mp4
#EXTINF:-1,Unsorted night
http://a/4.mp4
"#;

    fn names(entries: &[crate::Entry]) -> Vec<&str> {
        entries.iter().map(|x| x.name.as_str()).collect()
    }

    #[test]
    fn test_groups_sorted_distinct() {
        let catalog = Catalog::build(parse(DATA));
        assert_eq!(catalog.groups(), ["Action", "Horror", "Uncategorized"]);
    }

    #[test]
    fn test_groups_with_missing_group_title() {
        let catalog = Catalog::build(parse(
            "#EXTINF:-1 group-title=\"Horror\",A\n#EXTINF:-1 group-title=\"Horror\",B\n#EXTINF:-1,C",
        ));
        assert_eq!(catalog.groups(), ["Horror", "Uncategorized"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::build(parse(""));
        assert!(catalog.is_empty());
        assert!(catalog.groups().is_empty());
        assert!(catalog.filter("All", "").is_empty());
        assert!(catalog.filter("Horror", "x").is_empty());
    }

    #[test]
    fn test_filter_all() {
        let catalog = Catalog::build(parse(DATA));
        assert_eq!(catalog.filter("All", "").len(), 4);
        assert_eq!(catalog.filter(GroupFilter::All, "").len(), 4);
    }

    #[test]
    fn test_filter_name_ignores_case() {
        let catalog = Catalog::build(parse(DATA));
        assert_eq!(
            names(&catalog.filter("All", "NiGhT")),
            ["Night Terror", "The NIGHT shift", "Unsorted night"]
        );
    }

    #[test]
    fn test_filter_group_is_exact() {
        let catalog = Catalog::build(parse(DATA));
        assert_eq!(
            names(&catalog.filter("Horror", "")),
            ["Night Terror", "The NIGHT shift"]
        );
        assert!(catalog.filter("horror", "").is_empty());
        assert!(catalog.filter("Comedy", "").is_empty());
        assert_eq!(names(&catalog.filter("Horror", "shift")), ["The NIGHT shift"]);
    }

    #[test]
    fn test_filter_reapplied() {
        let catalog = Catalog::build(parse(DATA));
        let once = catalog.filter("Horror", "night");
        let twice = Catalog::from(once.clone()).filter("All", "night");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_returns_copies() {
        let catalog = Catalog::build(parse(DATA));
        let mut found = catalog.filter("All", "");
        found[0].name = "Changed".into();
        assert_eq!(catalog.entries()[0].name, "Night Terror");
    }

    #[test]
    fn test_entry_lookup() {
        let catalog = Catalog::build(parse(DATA));
        assert_eq!(catalog.entry(3).map(|x| x.name.as_str()), Some("Daylight"));
        assert!(catalog.entry(2).is_none());
    }
}
