use contracts::domain::a001_item::{Item, ItemDto, ItemListQuery};
use contracts::shared::paging::PagedResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, api_url_with_query, authorized, ensure_ok, read_json};

pub async fn fetch_items(query: &ItemListQuery) -> Result<PagedResponse<Item>, String> {
    let url = api_url_with_query("/api/items", query)?;
    let response = authorized(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn create_item(dto: &ItemDto) -> Result<Item, String> {
    let response = authorized(Request::post(&api_url("/api/items")))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn update_item(id: i64, dto: &ItemDto) -> Result<Item, String> {
    let response = authorized(Request::put(&api_url(&format!("/api/items/{}", id))))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn delete_item(id: i64) -> Result<(), String> {
    let response = authorized(Request::delete(&api_url(&format!("/api/items/{}", id))))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(&response)
}
