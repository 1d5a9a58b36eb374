//! Loading indicator component.

use dioxus::prelude::*;

/// Loading indicator, shown while the employee directory or a selection
/// cycle's presence data is in flight. Mounted under the page's fixed
/// `loading` element id.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            id: "loading",
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading presence data, please wait..."
        }
    }
}
