//! Presence Share by Weekday
//!
//! Pie chart of how the selected employee's total presence time is
//! distributed across weekdays.
//!
//! Data flow:
//! 1. On mount, `/api/v1/users` populates the employee dropdown.
//! 2. On selection, `/api/v1/presence_weekday/{id}` returns an already
//!    tabular payload (header row plus `[weekday, seconds]` rows) that is
//!    consumed as-is; an empty payload shows the no-data notice.

use dioxus::prelude::*;
use pa_chart_ui::components::PresenceView;
use pa_chart_ui::controller::ViewSpec;
use pa_chart_ui::js_bridge::ChartKind;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("presence-weekday-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        PresenceView {
            title: "Presence by weekday".to_string(),
            description: "Share of total presence time per weekday".to_string(),
            spec: ViewSpec {
                metric_path: "presence_weekday",
                chart_kind: ChartKind::Pie,
                category_axis_title: None,
                language: "en",
                build_table: pa_data::views::presence_weekday,
            },
        }
    }
}
