use contracts::domain::a004_bom::{
    BomDetail, BomHeader, BomImportPreview, BomListQuery, CreateBomRequest,
};
use contracts::shared::paging::PagedResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, api_url_with_query, authorized, ensure_ok, read_json};
use crate::shared::upload::upload_file;

pub async fn fetch_boms(query: &BomListQuery) -> Result<PagedResponse<BomHeader>, String> {
    let url = api_url_with_query("/api/boms", query)?;
    let response = authorized(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn fetch_bom(id: i64) -> Result<BomDetail, String> {
    let response = authorized(Request::get(&api_url(&format!("/api/boms/{}", id))))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// Parses the uploaded Excel file server-side; nothing is stored yet.
pub async fn import_bom(file: web_sys::File) -> Result<BomImportPreview, String> {
    upload_file("/api/boms/import", file).await
}

pub async fn create_bom(request: &CreateBomRequest) -> Result<BomHeader, String> {
    let response = authorized(Request::post(&api_url("/api/boms")))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn delete_bom(id: i64) -> Result<(), String> {
    let response = authorized(Request::delete(&api_url(&format!("/api/boms/{}", id))))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(&response)
}
