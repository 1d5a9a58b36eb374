//! Presence Start/End Times by Weekday
//!
//! Timeline chart of the selected employee's average clock-in and
//! clock-out times for each weekday.
//!
//! Data flow:
//! 1. On mount, `/api/v1/users` populates the employee dropdown.
//! 2. On selection, `/api/v1/presence_start_end/{id}` returns
//!    `[weekday, start_seconds, end_seconds]` rows; both second columns
//!    go through the interval formatter. The endpoint may return an empty
//!    array or an error status for employees without data, which shows
//!    the no-data notice instead of a chart.

use dioxus::prelude::*;
use pa_chart_ui::components::PresenceView;
use pa_chart_ui::controller::ViewSpec;
use pa_chart_ui::js_bridge::ChartKind;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("presence-start-end-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        PresenceView {
            title: "Presence start-end times by weekday".to_string(),
            description: "Average clock-in and clock-out time per weekday".to_string(),
            spec: ViewSpec {
                metric_path: "presence_start_end",
                chart_kind: ChartKind::Timeline,
                category_axis_title: Some("Weekday"),
                language: "pl",
                build_table: pa_data::views::presence_start_end,
            },
        }
    }
}
