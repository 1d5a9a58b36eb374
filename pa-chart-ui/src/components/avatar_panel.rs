//! Avatar panel for the selected employee.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the selected employee's avatar once the profile fetch resolves.
///
/// The profile request races the metric request, so the panel may mount
/// before the URL is known; it stays blank until then.
#[component]
pub fn AvatarPanel() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            id: "avatar",
            style: "margin: 8px 0; min-height: 80px;",
            if let Some(url) = (state.avatar_url)() {
                img {
                    src: "{url}",
                    alt: "employee avatar",
                    style: "width: 80px; height: 80px; border-radius: 4px;",
                }
            }
        }
    }
}
