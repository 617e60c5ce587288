//! Text formatting helpers for labels

/// "1 result", "0 results", "3 documents"
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// File size in kilobytes with one decimal, e.g. "1.5 KB"
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1, "result"), "1 result");
        assert_eq!(count_label(0, "result"), "0 results");
        assert_eq!(count_label(12, "document"), "12 documents");
    }

    #[test]
    fn test_format_kilobytes() {
        assert_eq!(format_kilobytes(1536), "1.5 KB");
        assert_eq!(format_kilobytes(0), "0.0 KB");
        assert_eq!(format_kilobytes(1_048_576), "1024.0 KB");
    }
}
