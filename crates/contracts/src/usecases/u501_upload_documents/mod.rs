pub mod response;

pub use response::UploadResponse;

use crate::usecases::common::UseCaseMetadata;

/// Multipart form field carrying each uploaded file
pub const UPLOAD_FIELD: &str = "files";

/// Extensions offered by the file picker. Not enforced on submit.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg"];

pub struct UploadDocuments;

impl UseCaseMetadata for UploadDocuments {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "upload_documents"
    }

    fn display_name() -> &'static str {
        "Upload Documents"
    }

    fn description() -> &'static str {
        "Upload PDFs or scanned images (.pdf, .png, .jpg, .jpeg)"
    }

    fn endpoint() -> &'static str {
        "/upload/"
    }
}

/// Value for the `accept` attribute of a file input: ".pdf,.png,.jpg,.jpeg"
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".pdf,.png,.jpg,.jpeg");
    }

    #[test]
    fn test_multipart_field_name() {
        assert_eq!(UPLOAD_FIELD, "files");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(UploadDocuments::full_name(), "u501_upload_documents");
        assert_eq!(UploadDocuments::endpoint(), "/upload/");
    }
}
