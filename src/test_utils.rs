//! In-memory gateway doubles for exercising the selection flow without a
//! backend. Lookup failures and response delays are scriptable per test.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::gateways::{CatalogGateway, ProviderGateway};
use crate::types::errors::{CuratorError, CuratorResult};
use crate::types::models::{CatalogEntry, ProviderResult};

// ─── Catalog Double ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryCatalog {
    entries: Mutex<HashMap<String, CatalogEntry>>,
    category_delays: Mutex<HashMap<String, Duration>>,
    pub fail_lookups: AtomicBool,
    pub create_calls: AtomicUsize,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let map = entries
            .into_iter()
            .map(|e| (e.title.clone(), e))
            .collect();
        Self {
            entries: Mutex::new(map),
            ..Default::default()
        }
    }

    pub fn entry(&self, title: &str) -> Option<CatalogEntry> {
        self.entries.lock().unwrap().get(title).cloned()
    }

    pub fn set_offline(&self, offline: bool) {
        self.fail_lookups.store(offline, Ordering::SeqCst);
    }

    /// Delay `get_category` responses for `title`, to stage a slow category
    /// lookup against a faster competing selection.
    pub fn delay_category(&self, title: &str, delay: Duration) {
        self.category_delays
            .lock()
            .unwrap()
            .insert(title.to_string(), delay);
    }

    fn check_online(&self) -> CuratorResult<()> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            Err(CuratorError::Lookup("memory catalog offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogGateway for MemoryCatalog {
    async fn list_all(&self) -> CuratorResult<Vec<CatalogEntry>> {
        self.check_online()?;
        let mut all: Vec<CatalogEntry> = self.entries.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(all)
    }

    async fn get(&self, title: &str) -> CuratorResult<Option<CatalogEntry>> {
        self.check_online()?;
        Ok(self.entries.lock().unwrap().get(title).cloned())
    }

    async fn get_category(&self, title: &str) -> CuratorResult<Option<String>> {
        let delay = self.category_delays.lock().unwrap().get(title).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.check_online()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(title)
            .map(|e| e.category.clone()))
    }

    async fn create(&self, entry: &CatalogEntry) -> CuratorResult<()> {
        self.check_online()?;
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(entry.title.clone(), entry.clone());
        Ok(())
    }

    async fn update_color(&self, title: &str, color: &str) -> CuratorResult<()> {
        self.check_online()?;
        let mut entries = self.entries.lock().unwrap();
        match entries.get_mut(title) {
            Some(entry) => {
                entry.background_color = color.to_string();
                Ok(())
            }
            None => Err(CuratorError::NotFound(title.to_string())),
        }
    }

    async fn delete(&self, title: &str) -> CuratorResult<()> {
        self.check_online()?;
        self.entries.lock().unwrap().remove(title);
        Ok(())
    }
}

// ─── Provider Double ─────────────────────────────────────────────────────────

#[derive(Default)]
pub struct ScriptedProvider {
    pages: Mutex<HashMap<String, Vec<ProviderResult>>>,
    delays: Mutex<HashMap<String, Duration>>,
    pub fail_lookups: AtomicBool,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the full result page the provider returns for `query`. The
    /// offset cursor slices into this page.
    pub fn script(&self, query: &str, page: Vec<ProviderResult>) {
        self.pages.lock().unwrap().insert(query.to_string(), page);
    }

    /// Delay responses for `query`, to stage slow-vs-fast lookup races.
    pub fn delay(&self, query: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(query.to_string(), delay);
    }

    pub fn set_offline(&self, offline: bool) {
        self.fail_lookups.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProviderGateway for ScriptedProvider {
    async fn search(&self, title: &str, offset: i64) -> CuratorResult<Vec<ProviderResult>> {
        let delay = self.delays.lock().unwrap().get(title).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(CuratorError::Lookup("scripted provider offline".to_string()));
        }
        let page = self
            .pages
            .lock()
            .unwrap()
            .get(title)
            .cloned()
            .unwrap_or_default();
        Ok(page.into_iter().skip(offset.max(0) as usize).collect())
    }
}

// ─── Builders ────────────────────────────────────────────────────────────────

pub fn provider_result(name: &str) -> ProviderResult {
    ProviderResult {
        name: name.to_string(),
        image_url: format!("https://img/{name}.jpg"),
        publisher: format!("{name} Media"),
        description: format!("All about {name}"),
        external_url: format!("https://listen.example/{name}"),
    }
}

pub fn catalog_entry(title: &str, category: &str, color: &str) -> CatalogEntry {
    CatalogEntry {
        title: title.to_string(),
        image_url: format!("https://img/{title}.jpg"),
        background_color: color.to_string(),
        category: category.to_string(),
        publisher: Some(format!("{title} Media")),
        description: None,
        external_url: None,
    }
}
