//! Navigation model: the ordered list of site navigation entries.

/// A single navigation entry.
///
/// `url` is the route fragment the entry links to and the key the active
/// highlight matches against. Entries flagged `only_mobile` are suppressed
/// in the desktop strip but always listed in the mobile overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub only_mobile: bool,
}

impl NavEntry {
    /// Create an entry shown in every layout.
    pub fn new(id: u32, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            only_mobile: false,
        }
    }

    /// Create an entry shown only in the mobile overlay.
    pub fn mobile_only(id: u32, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            only_mobile: true,
            ..Self::new(id, title, url)
        }
    }
}

/// The ordered collection of navigation entries.
///
/// Order is display order and is preserved. Immutable for the lifetime of
/// the controller that reads it.
#[derive(Debug, Clone, Default)]
pub struct NavModel {
    entries: Vec<NavEntry>,
}

impl NavModel {
    /// Create a model from an ordered entry list.
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self { entries }
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The site's default navigation entries.
    pub fn default_entries() -> Vec<NavEntry> {
        vec![
            NavEntry::new(0, "Features", "#features"),
            NavEntry::new(1, "Pricing", "#pricing"),
            NavEntry::new(2, "How to use", "#how-to-use"),
            NavEntry::new(3, "Roadmap", "#roadmap"),
            NavEntry::mobile_only(4, "New account", "#signup"),
            NavEntry::mobile_only(5, "Sign in", "#login"),
        ]
    }
}
