//! No-data notice component.

use dioxus::prelude::*;

/// Shown when the selected employee has no rows for this view, or the
/// metric fetch failed.
#[component]
pub fn NoDataNotice() -> Element {
    rsx! {
        div {
            id: "no-data",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #795548; border-radius: 4px; border: 1px solid #FFE082;",
            "No presence data to display for this employee."
        }
    }
}
