//! Mean Presence Time by Weekday
//!
//! Column chart with a time-of-day axis: how long the selected employee
//! is present on average for each weekday.
//!
//! Data flow:
//! 1. On mount, `/api/v1/users` populates the employee dropdown.
//! 2. On selection, `/api/v1/mean_time_weekday/{id}` returns
//!    `[weekday, seconds]` rows; the seconds column goes through the
//!    interval formatter before charting.

use dioxus::prelude::*;
use pa_chart_ui::components::PresenceView;
use pa_chart_ui::controller::ViewSpec;
use pa_chart_ui::js_bridge::ChartKind;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("mean-time-weekday-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        PresenceView {
            title: "Presence mean time by weekday".to_string(),
            description: "Average time spent at the office per weekday".to_string(),
            spec: ViewSpec {
                metric_path: "mean_time_weekday",
                chart_kind: ChartKind::Column,
                category_axis_title: Some("Weekday"),
                language: "pl",
                build_table: pa_data::views::mean_time_weekday,
            },
        }
    }
}
