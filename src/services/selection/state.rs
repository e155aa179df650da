use serde::{Deserialize, Serialize};

/// The merged, display-ready record for the current selection. Fields come
/// from the catalog entry when the selection is existing, otherwise from the
/// latest provider result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentRecord {
    pub title: String,
    pub image: String,
    pub bg_color: String,
    pub category: String,
}

/// Derived UI-visibility flags. Never set directly by presentation code;
/// only reducer transitions produce them, which is what keeps contradictory
/// combinations (submit button on an existing podcast) unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub title: bool,
    pub category: bool,
    pub submit: bool,
    pub sponsor: bool,
    pub update_color: bool,
    pub preview: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            title: false,
            category: false,
            submit: false,
            sponsor: false,
            update_color: false,
            // The suggestion list is available from the first keystroke
            preview: true,
        }
    }
}

/// The single source of truth for the curation screen. Created empty at
/// session start, mutated only through reducer actions, reset to `default()`
/// after save/delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Raw operator input.
    pub query_text: String,
    /// The candidate currently committed; empty when nothing is selected.
    pub selected_title: String,
    /// Whether `selected_title` resolved to a catalog entry.
    pub is_existing: bool,
    pub current: CurrentRecord,
    pub visibility: Visibility,
    /// Provider pagination cursor for scrubbing ambiguous matches.
    pub page_offset: i64,
}

/// Shallow-merge patch for [`CurrentRecord`]; absent fields are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub image: Option<String>,
    pub bg_color: Option<String>,
    pub category: Option<String>,
}

/// Shallow-merge patch for [`Visibility`]; absent flags are preserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityPatch {
    pub title: Option<bool>,
    pub category: Option<bool>,
    pub submit: Option<bool>,
    pub sponsor: Option<bool>,
    pub update_color: Option<bool>,
    pub preview: Option<bool>,
}
