use crate::shared::api_utils::api_url;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_ask_question::{AskQuestion, SearchRequest, SearchResponse};
use gloo_net::http::Request;

/// Ask a question over the selected documents
pub async fn search(req: &SearchRequest) -> Result<SearchResponse, String> {
    let response = Request::post(&api_url(AskQuestion::endpoint()))
        .json(req)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
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
