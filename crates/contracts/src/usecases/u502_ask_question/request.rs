use serde::{Deserialize, Serialize};

/// Question over a subset of the uploaded documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,

    /// Documents to search; empty means the backend decides
    #[serde(default)]
    pub doc_ids: Vec<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, doc_ids: Vec<String>) -> Self {
        Self {
            query: query.into(),
            doc_ids,
        }
    }
}
