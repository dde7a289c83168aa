use contracts::dashboards::d400_production_calendar::{
    WeeklyCalendarRequest, WeeklyCalendarResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, authorized, read_json};

/// Seven-day grouped view of the week starting at `request.start_date`.
pub async fn fetch_weekly_calendar(
    request: &WeeklyCalendarRequest,
) -> Result<WeeklyCalendarResponse, String> {
    let response = authorized(Request::post(&api_url("/api/production/weekly-calendar")))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}
