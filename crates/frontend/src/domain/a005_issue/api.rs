use contracts::domain::a005_issue::{
    Issue, IssueListResponse, IssuesByDateRequest, IssuesByGroupRequest, UpdateIssueDatesRequest,
    UpdateIssueDatesResponse,
};
use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::shared::api_utils::{api_url, authorized, read_json};

/// Issues of one project and production type on one day.
///
/// `abort` lets the overdue pass cancel the request when it is superseded.
pub async fn fetch_issues_by_group(
    request: &IssuesByGroupRequest,
    abort: Option<&AbortSignal>,
) -> Result<Vec<Issue>, String> {
    let response = authorized(Request::post(&api_url("/api/production/issues/by-date-and-type")))
        .abort_signal(abort)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let list: IssueListResponse = read_json(response).await?;
    Ok(list.issues)
}

/// Every issue planned on one day.
pub async fn fetch_issues_by_date(request: &IssuesByDateRequest) -> Result<Vec<Issue>, String> {
    let response = authorized(Request::post(&api_url("/api/production/issues/by-date")))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let list: IssueListResponse = read_json(response).await?;
    Ok(list.issues)
}

/// `{ success: false }` is reported as an error.
pub async fn update_issue_dates(request: &UpdateIssueDatesRequest) -> Result<(), String> {
    let response = authorized(Request::post(&api_url("/api/production/issues/update-dates")))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let result: UpdateIssueDatesResponse = read_json(response).await?;
    if result.success {
        Ok(())
    } else {
        Err(result
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "The server rejected the update".to_string()))
    }
}
