//! Selection state machine — the core of the curation screen.
//!
//! The reducer owns every mutation of [`state::SelectionState`]; the
//! controller turns operator intents into gateway lookups and reducer
//! dispatches, reconciling the catalog and the provider into one consistent
//! on-screen record.

pub mod controller;
pub mod events;
pub mod reducer;
pub mod state;

pub use controller::{ScrubDirection, SelectionController};
pub use events::UiEvent;
pub use reducer::{reduce, Action};
pub use state::{RecordPatch, SelectionState, VisibilityPatch};
