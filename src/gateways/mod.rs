//! Gateway traits for the two asynchronous collaborators: the catalog
//! backend (persisted, operator-curated) and the external metadata provider.
//! Both are transport-agnostic; the GraphQL/HTTP plumbing lives outside this
//! crate and implements these traits.

use async_trait::async_trait;

use crate::types::errors::CuratorResult;
use crate::types::models::{CatalogEntry, ProviderResult};

/// Lookup and write access to the persisted podcast catalog, keyed by title.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// All entries, used to (re)build the fuzzy title index.
    async fn list_all(&self) -> CuratorResult<Vec<CatalogEntry>>;

    /// Full entry for an exact title, `None` when unknown.
    async fn get(&self, title: &str) -> CuratorResult<Option<CatalogEntry>>;

    /// Category only. Cheaper than `get` on the backend and queried first on
    /// the existing-selection path, so it stays a separate call.
    async fn get_category(&self, title: &str) -> CuratorResult<Option<String>>;

    async fn create(&self, entry: &CatalogEntry) -> CuratorResult<()>;

    async fn update_color(&self, title: &str, color: &str) -> CuratorResult<()>;

    async fn delete(&self, title: &str) -> CuratorResult<()>;
}

/// Title search against the external metadata provider, paginated by an
/// offset cursor. An empty page means no match, not an error.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    async fn search(&self, title: &str, offset: i64) -> CuratorResult<Vec<ProviderResult>>;
}
