use contracts::domain::a003_visitor::{Visitor, VisitorDto, VisitorQuery};
use contracts::shared::paging::PagedResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, api_url_with_query, authorized, ensure_ok, read_json};

pub async fn fetch_visitors(query: &VisitorQuery) -> Result<PagedResponse<Visitor>, String> {
    let url = api_url_with_query("/api/visitors", query)?;
    let response = authorized(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// Check-in.
pub async fn create_visitor(dto: &VisitorDto) -> Result<Visitor, String> {
    let response = authorized(Request::post(&api_url("/api/visitors")))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn update_visitor(id: i64, dto: &VisitorDto) -> Result<Visitor, String> {
    let response = authorized(Request::put(&api_url(&format!("/api/visitors/{}", id))))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// Server stamps the exit time and returns the closed visit.
pub async fn checkout_visitor(id: i64) -> Result<Visitor, String> {
    let response = authorized(Request::post(&api_url(&format!("/api/visitors/{}/checkout", id))))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn delete_visitor(id: i64) -> Result<(), String> {
    let response = authorized(Request::delete(&api_url(&format!("/api/visitors/{}", id))))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(&response)
}
