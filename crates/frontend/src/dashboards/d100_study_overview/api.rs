use contracts::dashboards::d100_study_overview::StudyOverviewResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the overview counts
pub async fn get_study_overview() -> Result<StudyOverviewResponse, String> {
    let response = Request::get(&api_url("/api/d100/overview"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
