//! Typed client for the presence analytics REST API.
//!
//! All endpoints are GET + JSON under `/api/v1`, served by the same origin
//! as the dashboard pages. On wasm32 `reqwest` wraps the browser fetch
//! API, so requests are asynchronous and never block the page thread.

pub mod models;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use models::{User, UserProfile};

/// Base path of the analytics API, same-origin with the dashboard.
pub const API_BASE: &str = "/api/v1";

async fn get_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let url = format!("{API_BASE}{path}");
    log::debug!("GET {url}");
    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()
        .with_context(|| format!("request to {url} returned an error status"))?;
    response
        .json::<T>()
        .await
        .with_context(|| format!("response from {url} is not valid JSON for its schema"))
}

/// Fetch the user directory for the selection dropdown, in server order.
pub async fn users() -> anyhow::Result<Vec<User>> {
    get_json("/users").await
}

/// Fetch one user's profile (avatar image URL).
pub async fn user_profile(user_id: &str) -> anyhow::Result<UserProfile> {
    get_json(&format!("/users/{user_id}")).await
}

/// Fetch a metric payload for one user.
///
/// The payload shape differs per endpoint, so this returns raw JSON; the
/// per-view builders in `pa-data` do the typed parsing.
pub async fn metric(path: &str, user_id: &str) -> anyhow::Result<Value> {
    get_json(&format!("/{path}/{user_id}")).await
}
