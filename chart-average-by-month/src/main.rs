//! Average Presence Hours by Month
//!
//! Column chart of the selected employee's average presence hours per
//! month, months in chronological order as served by the backend.
//!
//! Data flow:
//! 1. On mount, `/api/v1/users` populates the employee dropdown.
//! 2. On selection, `/api/v1/average_by_month/{id}` is fetched together
//!    with the employee profile (avatar), and the `[month, hours]` rows
//!    are charted as-is.

use dioxus::prelude::*;
use pa_chart_ui::components::PresenceView;
use pa_chart_ui::controller::ViewSpec;
use pa_chart_ui::js_bridge::ChartKind;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("average-by-month-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        PresenceView {
            title: "Average presence hours by month".to_string(),
            description: "Mean hours spent at the office per month".to_string(),
            spec: ViewSpec {
                metric_path: "average_by_month",
                chart_kind: ChartKind::Column,
                category_axis_title: Some("Month"),
                language: "pl",
                build_table: pa_data::views::average_by_month,
            },
        }
    }
}
