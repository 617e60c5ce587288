use serde::{Deserialize, Serialize};

/// Per-document answer extracted by the backend.
///
/// Field names follow the backend's column titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultRow {
    #[serde(rename = "Document ID", default)]
    pub document_id: String,

    #[serde(rename = "Extracted Answer", default)]
    pub extracted_answer: String,

    #[serde(rename = "Citation", default)]
    pub citation: String,
}

/// Response of the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResultRow>,

    /// Cross-document theme summary
    #[serde(default)]
    pub themes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_columns() {
        let raw = r#"{
            "results": [
                {"Document ID": "doc1", "Extracted Answer": "X", "Citation": "p.1"}
            ],
            "themes": "Theme 1 – Regulation:\nDocuments doc1 highlight..."
        }"#;
        let resp: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].document_id, "doc1");
        assert_eq!(resp.results[0].extracted_answer, "X");
        assert_eq!(resp.results[0].citation, "p.1");
        assert!(resp.themes.starts_with("Theme 1"));
    }

    #[test]
    fn test_decode_partial_response() {
        let resp: SearchResponse = serde_json::from_str(r#"{"themes":"only themes"}"#).unwrap();
        assert!(resp.results.is_empty());
        assert_eq!(resp.themes, "only themes");

        let resp: SearchResponse =
            serde_json::from_str(r#"{"results":[{"Document ID":"doc2"}]}"#).unwrap();
        assert_eq!(resp.results[0].document_id, "doc2");
        assert_eq!(resp.results[0].citation, "");
        assert_eq!(resp.themes, "");
    }
}
