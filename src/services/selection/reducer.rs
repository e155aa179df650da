//! Pure state transitions for [`SelectionState`].
//!
//! The reducer is the only code that produces a new state. It also enforces
//! the two structural invariants, so no dispatch sequence can reach a
//! contradictory flag combination:
//! - an existing selection never shows the submit affordance
//! - the category panel only shows when `current.category` is non-empty

use super::state::{RecordPatch, SelectionState, VisibilityPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Operator typed into the search field.
    InputChange(String),
    /// Operator committed a candidate. Does not decide existing-vs-new by
    /// itself; the controller resolves that before dispatching further.
    SelectCandidate(String),
    /// A lookup resolved the selection as existing (or not).
    MarkExisting(bool),
    /// Fold resolved catalog/provider fields into the on-screen record.
    MergeRecord(RecordPatch),
    /// Controller-driven visibility changes.
    SetVisibility(VisibilityPatch),
    /// Move the provider pagination cursor.
    SetPageOffset(i64),
    /// Back to the initial empty state (after save/delete/cancel).
    Reset,
}

pub fn reduce(state: &SelectionState, action: Action) -> SelectionState {
    let mut next = state.clone();

    match action {
        Action::InputChange(text) => {
            if text != next.selected_title {
                next.is_existing = false;
                next.visibility.submit = false;
                next.visibility.category = false;
                next.visibility.sponsor = false;
            }
            next.visibility.preview = true;
            next.query_text = text;
        }
        Action::SelectCandidate(title) => {
            // Guards against accidental submits on an empty query
            if !title.is_empty() {
                next.selected_title = title;
            }
        }
        Action::MarkExisting(existing) => {
            next.is_existing = existing;
            if existing {
                next.visibility.submit = false;
            }
        }
        Action::MergeRecord(patch) => {
            merge_record(&mut next, patch);
        }
        Action::SetVisibility(patch) => {
            merge_visibility(&mut next, patch);
        }
        Action::SetPageOffset(offset) => {
            next.page_offset = offset.max(0);
        }
        Action::Reset => {
            next = SelectionState::default();
        }
    }

    next
}

fn merge_record(state: &mut SelectionState, patch: RecordPatch) {
    if let Some(title) = patch.title {
        state.current.title = title;
    }
    if let Some(image) = patch.image {
        state.current.image = image;
    }
    if let Some(bg_color) = patch.bg_color {
        state.current.bg_color = bg_color;
    }
    if let Some(category) = patch.category {
        state.current.category = category;
        if state.current.category.is_empty() {
            state.visibility.category = false;
        }
    }
}

fn merge_visibility(state: &mut SelectionState, patch: VisibilityPatch) {
    if let Some(title) = patch.title {
        state.visibility.title = title;
    }
    if let Some(category) = patch.category {
        // Never show the category panel with nothing to put in it
        state.visibility.category = category && !state.current.category.is_empty();
    }
    if let Some(submit) = patch.submit {
        // An existing entry is never offered an "add" affordance
        state.visibility.submit = submit && !state.is_existing;
    }
    if let Some(sponsor) = patch.sponsor {
        state.visibility.sponsor = sponsor;
    }
    if let Some(update_color) = patch.update_color {
        state.visibility.update_color = update_color;
    }
    if let Some(preview) = patch.preview {
        state.visibility.preview = preview;
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
