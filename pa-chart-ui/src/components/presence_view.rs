//! The shared page skeleton for a presence chart app.

use crate::components::{
    AvatarPanel, ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, NoDataNotice,
    UserSelector,
};
use crate::controller::{self, ViewSpec, ViewState, CHART_CONTAINER_ID};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PresenceViewProps {
    /// Page title shown in the header
    pub title: String,
    /// One-line description of the view
    #[props(default = String::new())]
    pub description: String,
    /// The per-view configuration (endpoint, chart kind, table builder)
    pub spec: ViewSpec,
}

/// One complete presence view: header, employee selector, and the
/// state-driven result region (spinner / chart + avatar / no-data notice).
///
/// All four chart apps are thin instantiations of this component; the
/// selection/fetch/render cycle itself lives in [`crate::controller`].
#[component]
pub fn PresenceView(props: PresenceViewProps) -> Element {
    let state = use_context_provider(AppState::new);
    let spec = props.spec;

    // Runs once on mount: kick off the chart loader and the user
    // directory fetch.
    use_effect(move || {
        js_bridge::init_charts(spec.chart_kind, spec.language);
        spawn(controller::load_user_directory(state));
    });

    // One controller cycle per selection change.
    use_effect(move || {
        let selected = (state.selected_user)();
        controller::on_selection_changed(state, spec, selected);
    });

    let view_state = (state.view_state)();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: props.title.clone(),
                description: props.description.clone(),
            }

            if let Some(err) = (state.users_error)() {
                ErrorDisplay { message: err }
            } else if (state.users_loading)() {
                LoadingSpinner {}
            } else {
                UserSelector {}

                if view_state == ViewState::Loading {
                    LoadingSpinner {}
                } else if view_state == ViewState::Empty {
                    NoDataNotice {}
                } else if view_state == ViewState::Populated {
                    AvatarPanel {}
                    ChartContainer {
                        id: CHART_CONTAINER_ID.to_string(),
                        min_height: 450,
                    }
                }
                // ViewState::Idle renders nothing below the selector.
            }
        }
    }
}
