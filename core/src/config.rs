//! Where the items collection lives.

/// Collection URL used when nothing else is configured.
pub const DEFAULT_COLLECTION_URL: &str = "http://localhost:3000/items";

/// Environment variable that overrides the collection URL.
pub const COLLECTION_URL_ENV: &str = "ITEMS_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub collection_url: String,
}

impl SyncConfig {
    pub fn new(collection_url: impl Into<String>) -> Self {
        Self {
            collection_url: collection_url.into(),
        }
    }

    /// Read `ITEMS_API_URL`, falling back to the default when unset or blank.
    ///
    /// Entry point for hosts that build a synchronizer at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(COLLECTION_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLLECTION_URL)
    }
}
