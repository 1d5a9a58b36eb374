//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided by
//! [`components::PresenceView`](crate::components::PresenceView) via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use crate::controller::{SelectionTracker, ViewState};
use dioxus::prelude::*;
use pa_api::User;

/// Shared application state for one presence chart app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// User directory for the selection dropdown, in server order
    pub users: Signal<Vec<User>>,
    /// Whether the user directory is still being fetched
    pub users_loading: Signal<bool>,
    /// Error message if the user directory could not be fetched
    pub users_error: Signal<Option<String>>,
    /// Currently selected user id as submitted by the dropdown
    /// (empty string = no selection)
    pub selected_user: Signal<String>,
    /// Which UI region the view currently shows
    pub view_state: Signal<ViewState>,
    /// Avatar image URL of the selected user (None until the profile
    /// fetch of the current selection resolves)
    pub avatar_url: Signal<Option<String>>,
    /// Request generation counter; responses from superseded selections
    /// are discarded
    pub tracker: Signal<SelectionTracker>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            users: Signal::new(Vec::new()),
            users_loading: Signal::new(true),
            users_error: Signal::new(None),
            selected_user: Signal::new(String::new()),
            view_state: Signal::new(ViewState::Idle),
            avatar_url: Signal::new(None),
            tracker: Signal::new(SelectionTracker::default()),
        }
    }
}
