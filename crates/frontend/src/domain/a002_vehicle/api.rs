use contracts::domain::a002_vehicle::{
    FuelImportResult, FuelPurchase, FuelPurchaseQuery, Vehicle, VehicleDto, VehicleListQuery,
};
use contracts::shared::paging::PagedResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, api_url_with_query, authorized, ensure_ok, read_json};
use crate::shared::upload::upload_file;

pub async fn fetch_vehicles(query: &VehicleListQuery) -> Result<PagedResponse<Vehicle>, String> {
    let url = api_url_with_query("/api/vehicles", query)?;
    let response = authorized(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn fetch_vehicle(id: i64) -> Result<Vehicle, String> {
    let response = authorized(Request::get(&api_url(&format!("/api/vehicles/{}", id))))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn create_vehicle(dto: &VehicleDto) -> Result<Vehicle, String> {
    let response = authorized(Request::post(&api_url("/api/vehicles")))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn update_vehicle(id: i64, dto: &VehicleDto) -> Result<Vehicle, String> {
    let response = authorized(Request::put(&api_url(&format!("/api/vehicles/{}", id))))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

pub async fn delete_vehicle(id: i64) -> Result<(), String> {
    let response = authorized(Request::delete(&api_url(&format!("/api/vehicles/{}", id))))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    ensure_ok(&response)
}

pub async fn fetch_fuel_purchases(
    vehicle_id: i64,
    query: &FuelPurchaseQuery,
) -> Result<Vec<FuelPurchase>, String> {
    let url = api_url_with_query(&format!("/api/vehicles/{}/fuel-purchases", vehicle_id), query)?;
    let response = authorized(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// Excel file with fuel card transactions; rows are matched to vehicles by plate.
pub async fn import_fuel_purchases(file: web_sys::File) -> Result<FuelImportResult, String> {
    upload_file("/api/vehicles/fuel-purchases/import", file).await
}
