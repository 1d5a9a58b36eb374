//! Dropdown selector for choosing an employee.

use crate::state::AppState;
use dioxus::prelude::*;

/// Employee dropdown selector.
/// Reads the user directory from AppState and updates selected_user on
/// change. The blank option maps to the no-selection case.
#[component]
pub fn UserSelector() -> Element {
    let mut state = use_context::<AppState>();
    let users = state.users.read().clone();
    let selected = (state.selected_user)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.selected_user.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "user-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Employee: "
            }
            select {
                id: "user-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "-- select an employee --"
                }
                for user in users.iter() {
                    option {
                        value: "{user.id}",
                        selected: user.id.to_string() == selected,
                        "{user.name}"
                    }
                }
            }
        }
    }
}
