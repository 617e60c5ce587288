use crate::shared::api_utils::api_url;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_documents::{UploadDocuments, UploadResponse, UPLOAD_FIELD};
use gloo_net::http::Request;
use web_sys::FormData;

/// Upload a batch of files as one multipart request
pub async fn upload_files(files: Vec<web_sys::File>) -> Result<UploadResponse, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for file in &files {
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }

    // Content-Type with the multipart boundary is set by the browser
    let response = Request::post(&api_url(UploadDocuments::endpoint()))
        .body(form_data)
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    // Any 2xx is success, even when the body cannot be read
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Upload succeeded but the reply body was unreadable: {}", e);
            String::new()
        }
    };

    Ok(UploadResponse::from_body(&body))
}
