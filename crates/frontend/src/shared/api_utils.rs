//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use wasm_bindgen::JsCast;

/// `<meta name="docqa-api-base" content="https://host:port">` overrides the default base
pub const API_BASE_META: &str = "docqa-api-base";

/// Port of the document Q&A backend when no override is given
pub const DEFAULT_API_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// Uses the `docqa-api-base` meta tag of the host page when present,
/// otherwise the current window location with port 8000.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let meta_override = window
        .document()
        .and_then(|doc| {
            doc.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                .ok()
                .flatten()
        })
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content());

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    resolve_api_base(meta_override.as_deref(), &protocol, &hostname)
}

/// Pick the API base from an optional override and the page location
pub fn resolve_api_base(meta_override: Option<&str>, protocol: &str, hostname: &str) -> String {
    match meta_override.map(str::trim).filter(|s| !s.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT),
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/documents/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
