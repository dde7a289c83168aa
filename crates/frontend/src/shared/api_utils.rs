//! API utilities for frontend-backend communication
//!
//! URL construction, the bearer header and the response checks shared by all
//! `api.rs` modules. Errors are plain strings shown to the user as-is.

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::config;
use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the portal config; when that is empty the URL is
/// built from the current window location with port 3000.
pub fn api_base() -> String {
    let configured = &config().api.base_url;
    if !configured.is_empty() {
        return configured.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `path?query` with the query serialized by `serde_qs`.
pub fn api_url_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    if qs.is_empty() {
        Ok(api_url(path))
    } else {
        Ok(format!("{}?{}", api_url(path), qs))
    }
}

pub fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Adds `Authorization: Bearer …` when a token is stored.
pub fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match auth_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

pub fn ensure_ok(response: &Response) -> Result<(), String> {
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()))
    }
}

/// Checks the status, then parses the JSON body.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    ensure_ok(&response)?;
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
