use serde::{Deserialize, Serialize};

/// Path of the document collection on the backend
pub const DOCUMENTS_ENDPOINT: &str = "/documents/";

/// Uploaded document as known to the backend.
///
/// `doc_id` is assigned server-side and is unique within the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: String,
    pub filename: String,
}

impl Document {
    pub fn new(doc_id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            filename: filename.into(),
        }
    }
}

/// Response of `GET /documents/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentListResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
}
