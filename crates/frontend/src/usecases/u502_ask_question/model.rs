use crate::shared::format::count_label;

/// Trimmed query, or `None` when there is nothing to ask
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn submit_label(searching: bool) -> &'static str {
    if searching {
        "Searching..."
    } else {
        "Search"
    }
}

/// Badge text of the results table
pub fn results_label(rows: usize) -> String {
    count_label(rows, "result")
}
