use serde::{Deserialize, Serialize};

/// A curated podcast as stored by the catalog backend.
/// `title` is the unique key; the core only ever holds read-only or
/// pending-write copies of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub image_url: String,
    pub background_color: String,
    pub category: String,
    pub publisher: Option<String>,
    pub description: Option<String>,
    pub external_url: Option<String>,
}

impl CatalogEntry {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: String::new(),
            background_color: String::new(),
            category: category.into(),
            publisher: None,
            description: None,
            external_url: None,
        }
    }
}

/// One element of a provider search page. Ephemeral: never persisted by the
/// core, only folded into the on-screen record or into a pending save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderResult {
    pub name: String,
    pub image_url: String,
    pub publisher: String,
    pub description: String,
    pub external_url: String,
}
