//! The selection/fetch/render cycle shared by all four chart apps.
//!
//! Each app differs only in its [`ViewSpec`]: metric endpoint, chart kind,
//! category-axis title, chart language, and the table builder applied to
//! the metric payload. Everything else — the view state machine, the
//! racing metric/profile fetches, stale-response discarding — lives here.

use crate::js_bridge::{self, ChartKind};
use crate::state::AppState;
use dioxus::prelude::*;
use pa_data::table::ChartTable;
use serde_json::{json, Value};

/// DOM id of the chart container div; one view per page, so a fixed id.
pub const CHART_CONTAINER_ID: &str = "presence-chart";

/// Which UI region a view shows. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No user selected; all result panels hidden.
    Idle,
    /// A selection cycle is in flight; spinner shown.
    Loading,
    /// Chart and avatar panels shown.
    Populated,
    /// Metric returned no usable rows (or failed); no-data notice shown.
    Empty,
}

/// Per-view configuration. Instantiating one of these is all a chart app
/// has to do.
#[derive(Clone, Copy, PartialEq)]
pub struct ViewSpec {
    /// Metric endpoint path segment under the API base, e.g.
    /// `"mean_time_weekday"`.
    pub metric_path: &'static str,
    /// Which Google Charts visualization to draw.
    pub chart_kind: ChartKind,
    /// Title for the category axis; None for charts without one (pie).
    pub category_axis_title: Option<&'static str>,
    /// Language tag passed through to the chart loader.
    pub language: &'static str,
    /// Builder turning the raw metric payload into a chart table.
    pub build_table: fn(Value) -> anyhow::Result<ChartTable>,
}

/// Token identifying one selection cycle's requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic request-generation counter.
///
/// Selection changes can overlap: the user may pick another employee while
/// the previous cycle's responses are still in flight. Each cycle begins by
/// advancing the generation; a response whose token no longer matches is
/// discarded, so the UI always reflects the latest selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionTracker {
    current: u64,
}

impl SelectionTracker {
    /// Start a new cycle, superseding all outstanding requests.
    pub fn begin(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    /// Whether a response carrying this token may still apply.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == token.0
    }
}

/// Options object handed to the chart: a category-axis title where the
/// view has one, otherwise empty (pie).
pub fn chart_options(spec: &ViewSpec) -> Value {
    match spec.category_axis_title {
        Some(title) => json!({"hAxis": {"title": title}}),
        None => json!({}),
    }
}

/// Map a built table onto the resulting view state.
pub fn state_for_table(table: &ChartTable) -> ViewState {
    if table.is_empty() {
        ViewState::Empty
    } else {
        ViewState::Populated
    }
}

/// Map a metric cycle's outcome onto the resulting view state: a fetch or
/// parse failure shows the same no-data notice as a zero-row response.
pub fn state_for_result(result: &anyhow::Result<ChartTable>) -> ViewState {
    match result {
        Ok(table) => state_for_table(table),
        Err(_) => ViewState::Empty,
    }
}

/// Where a selection change leads before any request is issued: an empty
/// selection reverts to idle and fetches nothing, everything else starts
/// a loading cycle.
pub fn state_for_selection(selected: &str) -> ViewState {
    if selected.is_empty() {
        ViewState::Idle
    } else {
        ViewState::Loading
    }
}

/// Fetch the user directory once at startup and populate the selector.
pub async fn load_user_directory(mut state: AppState) {
    match pa_api::users().await {
        Ok(users) => {
            log::info!("user directory loaded: {} users", users.len());
            state.users.set(users);
        }
        Err(err) => {
            log::error!("user directory fetch failed: {err:#}");
            state
                .users_error
                .set(Some("Failed to load the employee list.".to_string()));
        }
    }
    state.users_loading.set(false);
}

/// React to a selection change. Runs once per change event, including the
/// initial empty selection.
pub fn on_selection_changed(mut state: AppState, spec: ViewSpec, selected: String) {
    // Every change supersedes whatever is still in flight.
    let token = state.tracker.write().begin();
    state.avatar_url.set(None);

    let next = state_for_selection(&selected);
    state.view_state.set(next);
    if next != ViewState::Loading {
        // No-selection case: all result panels hidden, no request issued.
        return;
    }

    // The metric and profile fetches are deliberately unordered: they
    // update disjoint UI regions, so whichever resolves first wins its own
    // region and nothing else.
    spawn(load_metric(state, spec, selected.clone(), token));
    spawn(load_avatar(state, selected, token));
}

/// Fetch and render the view's metric for one selection cycle.
async fn load_metric(mut state: AppState, spec: ViewSpec, user_id: String, token: RequestToken) {
    let result = pa_api::metric(spec.metric_path, &user_id)
        .await
        .and_then(spec.build_table);

    if !state.tracker.peek().is_current(token) {
        // A newer selection took over while this was in flight.
        return;
    }

    if let Err(err) = &result {
        log::error!("{} fetch for user {user_id} failed: {err:#}", spec.metric_path);
    }
    let next = state_for_result(&result);
    state.view_state.set(next);
    let Ok(table) = result else {
        return;
    };
    if next != ViewState::Populated {
        return;
    }

    let data_json = serde_json::to_string(&table).unwrap_or_default();
    let options_json = chart_options(&spec).to_string();
    log::info!(
        "rendering {:?} for user {user_id}: {} rows",
        spec.chart_kind,
        table.row_count()
    );
    js_bridge::render_chart(
        spec.chart_kind,
        CHART_CONTAINER_ID,
        &data_json,
        &options_json,
        token.value(),
    );
}

/// Fetch the selected user's profile for the avatar panel.
///
/// Independent of the metric outcome: the URL is set even when the metric
/// cycle ends in the empty state, where no panel displays it.
async fn load_avatar(mut state: AppState, user_id: String, token: RequestToken) {
    match pa_api::user_profile(&user_id).await {
        Ok(profile) => {
            if state.tracker.peek().is_current(token) {
                state.avatar_url.set(Some(profile.image));
            }
        }
        Err(err) => {
            log::warn!("profile fetch for user {user_id} failed: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pa_data::views;

    #[test]
    fn test_tracker_discards_superseded_tokens() {
        let mut tracker = SelectionTracker::default();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        // Selecting again before the first response arrives: the first
        // cycle's responses must no longer apply.
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_tokens_are_monotonic() {
        let mut tracker = SelectionTracker::default();
        let a = tracker.begin();
        let b = tracker.begin();
        assert!(b.value() > a.value());
    }

    #[test]
    fn test_chart_options_with_axis_title() {
        let spec = ViewSpec {
            metric_path: "mean_time_weekday",
            chart_kind: ChartKind::Column,
            category_axis_title: Some("Weekday"),
            language: "pl",
            build_table: views::mean_time_weekday,
        };
        assert_eq!(
            chart_options(&spec),
            json!({"hAxis": {"title": "Weekday"}})
        );
    }

    #[test]
    fn test_chart_options_empty_for_pie() {
        let spec = ViewSpec {
            metric_path: "presence_weekday",
            chart_kind: ChartKind::Pie,
            category_axis_title: None,
            language: "en",
            build_table: views::presence_weekday,
        };
        assert_eq!(chart_options(&spec), json!({}));
    }

    #[test]
    fn test_state_for_table() {
        let empty = views::presence_start_end(json!([])).unwrap();
        assert_eq!(state_for_table(&empty), ViewState::Empty);

        let populated =
            views::presence_start_end(json!([["Mon", 33134.0, 57257.0]])).unwrap();
        assert_eq!(state_for_table(&populated), ViewState::Populated);
    }

    #[test]
    fn test_metric_failure_shows_no_data() {
        // A failed fetch (non-2xx, network error, malformed payload) ends
        // in the same no-data state as a zero-row response.
        let failed: anyhow::Result<ChartTable> = Err(anyhow::anyhow!("503 for /presence_start_end/10"));
        assert_eq!(state_for_result(&failed), ViewState::Empty);

        let malformed = views::mean_time_weekday(json!({"not": "rows"}));
        assert_eq!(state_for_result(&malformed), ViewState::Empty);

        let ok = views::mean_time_weekday(json!([["Mon", 3600]]));
        assert_eq!(state_for_result(&ok), ViewState::Populated);
    }

    #[test]
    fn test_empty_selection_goes_idle_without_fetch() {
        // The blank dropdown option reverts to idle; only a Loading
        // outcome lets the selection handler spawn requests.
        assert_eq!(state_for_selection(""), ViewState::Idle);
        assert_eq!(state_for_selection("10"), ViewState::Loading);
    }
}
