use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `POST /upload/`.
///
/// The backend decides the payload; the client only logs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadResponse(pub Value);

impl UploadResponse {
    /// `message` field of the payload, when the backend sends one
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Payload of a 2xx reply body: JSON when it parses, the raw text otherwise,
    /// `Null` for an empty body
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }
        serde_json::from_str(body).unwrap_or_else(|_| Self(Value::String(body.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_any_payload() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"message":"2 files processed","doc_ids":["DOC001","DOC002"]}"#)
                .unwrap();
        assert_eq!(resp.message(), Some("2 files processed"));

        let resp: UploadResponse = serde_json::from_str(r#"["DOC001"]"#).unwrap();
        assert_eq!(resp.message(), None);
    }

    #[test]
    fn test_from_body() {
        let resp = UploadResponse::from_body(r#"{"message":"ok"}"#);
        assert_eq!(resp.message(), Some("ok"));

        let resp = UploadResponse::from_body("Uploaded 2 files");
        assert_eq!(resp.0, Value::String("Uploaded 2 files".to_string()));

        assert_eq!(UploadResponse::from_body(""), UploadResponse::default());
        assert_eq!(UploadResponse::from_body("  \n"), UploadResponse(Value::Null));
    }
}
