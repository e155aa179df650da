//! Orchestrates one operator intent into gateway lookups and reducer
//! dispatches.
//!
//! The controller never writes state fields directly; it reads snapshots to
//! decide staleness and mutates only through [`dispatch`](SelectionController::dispatch).
//! In-flight lookups are not cancelled when the operator moves on — their
//! results are checked against the current `selected_title` on arrival and
//! dropped when superseded.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::gateways::{CatalogGateway, ProviderGateway};
use crate::services::matcher::{MatcherConfig, TitleIndex};
use crate::types::errors::{CuratorError, CuratorResult};
use crate::types::models::{CatalogEntry, ProviderResult};
use crate::DEFAULT_BACKGROUND;

use super::events::UiEvent;
use super::reducer::{reduce, Action};
use super::state::{RecordPatch, SelectionState, VisibilityPatch};

/// Scrub direction for paging through ambiguous provider matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrubDirection {
    Next,
    Prev,
}

pub struct SelectionController {
    catalog: Arc<dyn CatalogGateway>,
    provider: Arc<dyn ProviderGateway>,
    state: Mutex<SelectionState>,
    index: Mutex<TitleIndex>,
    matcher_config: MatcherConfig,
    /// Last provider result that survived the staleness check. Supplies the
    /// publisher/description/external-link fields on save.
    latest_provider: Mutex<Option<ProviderResult>>,
    events: mpsc::UnboundedSender<UiEvent>,
}

impl SelectionController {
    /// Build a controller over the two gateways. The returned receiver
    /// carries refresh/toast signals for the presentation layer.
    pub fn new(
        catalog: Arc<dyn CatalogGateway>,
        provider: Arc<dyn ProviderGateway>,
    ) -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let controller = Self {
            catalog,
            provider,
            state: Mutex::new(SelectionState::default()),
            index: Mutex::new(TitleIndex::default()),
            matcher_config: MatcherConfig::default(),
            latest_provider: Mutex::new(None),
            events,
        };
        (controller, rx)
    }

    /// Read-only snapshot of the current state for rendering.
    pub fn snapshot(&self) -> SelectionState {
        self.state.lock().expect("state mutex poisoned").clone()
    }

    fn dispatch(&self, action: Action) {
        let mut state = self.state.lock().expect("state mutex poisoned");
        *state = reduce(&state, action);
    }

    /// Whether an in-flight lookup for `candidate` is still the one the
    /// operator cares about.
    fn is_current(&self, candidate: &str) -> bool {
        self.state.lock().expect("state mutex poisoned").selected_title == candidate
    }

    // ─── Fuzzy Index ─────────────────────────────────────────────────────────

    /// Rebuild the fuzzy title index from the catalog. On failure the
    /// previous index stays in place.
    pub async fn refresh_index(&self) {
        match self.catalog.list_all().await {
            Ok(entries) => {
                let titles: Vec<String> = entries.into_iter().map(|e| e.title).collect();
                *self.index.lock().expect("index mutex poisoned") = TitleIndex::build(titles);
                let _ = self.events.send(UiEvent::CatalogRefreshed);
            }
            Err(e) => log::warn!("catalog refresh failed, keeping stale index: {e}"),
        }
    }

    // ─── Operator Intents ────────────────────────────────────────────────────

    /// Operator typed into the search field. Returns the ranked candidate
    /// titles for the new text; matching is synchronous.
    pub fn on_text_change(&self, text: &str) -> Vec<String> {
        self.dispatch(Action::InputChange(text.to_string()));
        self.index
            .lock()
            .expect("index mutex poisoned")
            .search(text, &self.matcher_config)
            .map(str::to_string)
            .collect()
    }

    /// Operator picked a category in the category editor.
    pub fn on_category_chosen(&self, category: &str) {
        self.dispatch(Action::MergeRecord(RecordPatch {
            category: Some(category.to_string()),
            ..Default::default()
        }));
    }

    /// The color-extraction widget produced a background color for the
    /// current artwork.
    pub fn on_color_extracted(&self, color: &str) {
        self.dispatch(Action::MergeRecord(RecordPatch {
            bg_color: Some(color.to_string()),
            ..Default::default()
        }));
    }

    /// Operator picked a candidate from the suggestion list (or submitted
    /// free text, in which case `known_existing` is false).
    pub async fn on_candidate_chosen(&self, title: &str, known_existing: bool) -> CuratorResult<()> {
        self.select_candidate(title, known_existing, 0).await
    }

    /// Page the provider results for the current query text.
    pub async fn on_scrub(&self, direction: ScrubDirection) -> CuratorResult<()> {
        let snap = self.snapshot();
        if snap.query_text.is_empty() {
            return Ok(());
        }
        let delta = match direction {
            ScrubDirection::Next => 1,
            ScrubDirection::Prev => -1,
        };
        let offset = (snap.page_offset + delta).max(0);
        self.select_candidate(&snap.query_text, false, offset).await
    }

    /// Resolve a committed candidate against both sources and merge the
    /// responses into a single consistent view.
    pub async fn select_candidate(
        &self,
        candidate: &str,
        known_existing: bool,
        page_offset: i64,
    ) -> CuratorResult<()> {
        if candidate.is_empty() {
            return Ok(());
        }

        self.dispatch(Action::SelectCandidate(candidate.to_string()));
        self.dispatch(Action::SetPageOffset(page_offset));

        if known_existing {
            // The category gates the existing-entry UI path, so it resolves
            // before the parallel lookups start.
            let category = self.catalog.get_category(candidate).await;
            if !self.is_current(candidate) {
                log::trace!("selection moved on, dropping category for {candidate:?}");
                return Ok(());
            }
            match category {
                Ok(Some(category)) => self.dispatch(Action::MergeRecord(RecordPatch {
                    category: Some(category),
                    ..Default::default()
                })),
                Ok(None) => {}
                Err(e) => log::warn!("category lookup for {candidate:?} failed: {e}"),
            }
            self.dispatch(Action::MarkExisting(true));
        }

        // Both lookups settle before any merge, so a slow provider response
        // cannot race ahead of a fast catalog check.
        let (provider_page, catalog_hit) = tokio::join!(
            self.provider.search(candidate, page_offset),
            self.catalog.get(candidate),
        );

        if !self.is_current(candidate) {
            log::trace!("selection moved on, dropping results for {candidate:?}");
            return Ok(());
        }

        let provider_page = provider_page.unwrap_or_else(|e| {
            log::warn!("provider search for {candidate:?} failed: {e}");
            Vec::new()
        });
        let catalog_hit = catalog_hit.unwrap_or_else(|e| {
            log::warn!("catalog lookup for {candidate:?} failed: {e}");
            None
        });

        let resolved = provider_page.into_iter().next();
        // The cache always tracks the freshest selection, including the
        // no-hit case; otherwise a later save could fall back to an
        // abandoned candidate's provider fields.
        *self.latest_provider.lock().expect("provider cache poisoned") = resolved.clone();

        match catalog_hit {
            None => {
                // No stored entry: this selection is an import. `current` is
                // derived purely from the provider page, so a missing hit
                // blanks the record instead of leaving the previous
                // candidate's fields on screen.
                let (title, image) = resolved
                    .as_ref()
                    .map(|found| (found.name.clone(), found.image_url.clone()))
                    .unwrap_or_default();
                self.dispatch(Action::MergeRecord(RecordPatch {
                    title: Some(title),
                    image: Some(image),
                    bg_color: Some(DEFAULT_BACKGROUND.to_string()),
                    category: Some(String::new()),
                }));
                self.dispatch(Action::SetVisibility(VisibilityPatch {
                    title: Some(resolved.is_some()),
                    submit: Some(true),
                    sponsor: Some(resolved.is_some()),
                    preview: Some(false),
                    ..Default::default()
                }));
            }
            Some(entry) => {
                self.merge_catalog_entry(&entry);
            }
        }

        // The provider may resolve an alias to a canonical name the catalog
        // already knows; fold the stored entry back in so the final state
        // still reads from the catalog.
        if let Some(found) = resolved {
            if found.name != candidate {
                self.reconcile_resolved_name(candidate, &found.name).await;
            }
        }

        Ok(())
    }

    /// Persist the current import. Fails closed when no category was chosen;
    /// nothing is written and the state stays put so the operator can fix it.
    pub async fn on_save(&self) -> CuratorResult<()> {
        let snap = self.snapshot();
        if snap.current.category.trim().is_empty() {
            return Err(CuratorError::Validation("Please enter a category".to_string()));
        }

        let provider = self
            .latest_provider
            .lock()
            .expect("provider cache poisoned")
            .clone();

        let title = if snap.current.title.is_empty() {
            provider.as_ref().map(|p| p.name.clone()).unwrap_or_default()
        } else {
            snap.current.title.clone()
        };
        if title.is_empty() {
            return Err(CuratorError::Validation("Nothing selected to save".to_string()));
        }

        let image_url = if snap.current.image.is_empty() {
            provider.as_ref().map(|p| p.image_url.clone()).unwrap_or_default()
        } else {
            snap.current.image.clone()
        };

        let entry = CatalogEntry {
            title: title.clone(),
            image_url,
            background_color: snap.current.bg_color.clone(),
            category: snap.current.category.clone(),
            publisher: provider.as_ref().map(|p| p.publisher.clone()),
            description: provider.as_ref().map(|p| p.description.clone()),
            external_url: provider.as_ref().map(|p| p.external_url.clone()),
        };

        self.catalog.create(&entry).await.map_err(|e| {
            log::warn!("create for {title:?} failed: {e}");
            e
        })?;

        self.dispatch(Action::Reset);
        *self.latest_provider.lock().expect("provider cache poisoned") = None;
        self.refresh_index().await;
        let _ = self.events.send(UiEvent::Saved { title });
        Ok(())
    }

    /// Write the on-screen background color back to the stored entry.
    pub async fn on_update_color(&self) -> CuratorResult<()> {
        let snap = self.snapshot();
        if snap.selected_title.is_empty() {
            return Ok(());
        }

        self.catalog
            .update_color(&snap.selected_title, &snap.current.bg_color)
            .await
            .map_err(|e| {
                log::warn!("color update for {:?} failed: {e}", snap.selected_title);
                e
            })?;

        self.refresh_index().await;
        let _ = self.events.send(UiEvent::ColorUpdated {
            title: snap.selected_title,
        });
        Ok(())
    }

    /// Remove the selected entry from the catalog.
    pub async fn on_delete(&self) -> CuratorResult<()> {
        let snap = self.snapshot();
        if snap.selected_title.is_empty() {
            return Ok(());
        }

        self.catalog.delete(&snap.selected_title).await.map_err(|e| {
            log::warn!("delete for {:?} failed: {e}", snap.selected_title);
            e
        })?;

        self.dispatch(Action::Reset);
        *self.latest_provider.lock().expect("provider cache poisoned") = None;
        self.refresh_index().await;
        let _ = self.events.send(UiEvent::Deleted {
            title: snap.selected_title,
        });
        Ok(())
    }

    // ─── Merge Helpers ───────────────────────────────────────────────────────

    fn merge_catalog_entry(&self, entry: &CatalogEntry) {
        self.dispatch(Action::MergeRecord(RecordPatch {
            title: Some(entry.title.clone()),
            image: Some(entry.image_url.clone()),
            bg_color: Some(entry.background_color.clone()),
            category: Some(entry.category.clone()),
        }));
        self.dispatch(Action::MarkExisting(true));
        self.dispatch(Action::SetVisibility(VisibilityPatch {
            title: Some(true),
            category: Some(true),
            sponsor: Some(true),
            update_color: Some(true),
            preview: Some(false),
            ..Default::default()
        }));
    }

    /// The import path guessed "new", but the provider resolved a canonical
    /// name the catalog already has. Re-key the lookup on that name and fold
    /// the stored fields in so the visible state reads from the catalog.
    async fn reconcile_resolved_name(&self, candidate: &str, resolved_name: &str) {
        let entry = match self.catalog.get(resolved_name).await {
            Ok(Some(entry)) => entry,
            Ok(None) => return,
            Err(e) => {
                log::warn!("catalog lookup for resolved name {resolved_name:?} failed: {e}");
                return;
            }
        };

        if !self.is_current(candidate) {
            log::trace!("selection moved on, dropping reconciliation for {candidate:?}");
            return;
        }

        self.merge_catalog_entry(&entry);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
