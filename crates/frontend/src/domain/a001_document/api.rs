use crate::shared::api_utils::api_url;
use contracts::domain::a001_document::{Document, DocumentListResponse, DOCUMENTS_ENDPOINT};
use gloo_net::http::Request;

/// Fetch all documents known to the backend
pub async fn fetch_documents() -> Result<Vec<Document>, String> {
    let response = Request::get(&api_url(DOCUMENTS_ENDPOINT))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: DocumentListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.documents)
}
