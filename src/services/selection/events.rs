use serde::Serialize;

/// Refresh/notification signals for the presentation layer, emitted after
/// catalog writes so the shell can refetch its lists and raise a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UiEvent {
    CatalogRefreshed,
    Saved { title: String },
    ColorUpdated { title: String },
    Deleted { title: String },
}
