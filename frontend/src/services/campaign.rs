//! Draft validation on the backend.

use gloo_net::http::Request;
use mailblast_core::CampaignDraft;

use crate::{AppError, AppResult, DraftReport};

/// Send the draft to `POST /api/campaigns/validate`.
///
/// Both 200 and 422 carry a [`DraftReport`]; any other status is a
/// network error.
pub async fn validate_draft(draft: &CampaignDraft, backend_url: &str) -> AppResult<DraftReport> {
    let url = format!("{}/api/campaigns/validate", backend_url);

    let response = Request::post(&url)
        .json(draft)
        .map_err(|e| AppError::Validation(format!("Failed to encode draft: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() && response.status() != 422 {
        let text = response.text().await.unwrap_or_default();
        return Err(AppError::Network(format!(
            "Server error {}: {}",
            response.status(),
            text
        )));
    }

    response
        .json::<DraftReport>()
        .await
        .map_err(|e| AppError::Network(format!("Failed to parse response: {}", e)))
}
