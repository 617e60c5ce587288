//! List helpers: case-insensitive search and match highlighting

use leptos::prelude::*;

/// Trait for rows that can be matched against a search filter
pub trait Searchable {
    /// `filter` is already lowercased and non-empty
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive substring test
pub fn contains_ignore_case(text: &str, filter_lower: &str) -> bool {
    text.to_lowercase().contains(filter_lower)
}

/// Returns the rows matching the filter. An empty filter keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }
    let filter_lower = filter.to_lowercase();

    items
        .iter()
        .filter(|item| item.matches_filter(&filter_lower))
        .cloned()
        .collect()
}

/// Split `text` into `(segment, is_match)` pairs for a case-insensitive filter.
///
/// Matching runs on the lowercased text; each lowercased byte remembers the
/// source character it came from, so segment bounds always sit on char
/// boundaries of `text` even when lowercasing changes byte lengths.
pub fn highlight_segments(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter_lower = filter.to_lowercase();
    if filter_lower.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let mut lower = String::with_capacity(text.len());
    // (start, end) in `text` of the char each byte of `lower` came from
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        let span = (i, i + c.len_utf8());
        for lc in c.to_lowercase() {
            lower.push(lc);
            origin.extend(std::iter::repeat(span).take(lc.len_utf8()));
        }
    }

    let mut segments = Vec::new();
    let mut last_pos = 0;
    let mut search_from = 0;

    while let Some(pos) = lower[search_from..].find(&filter_lower) {
        let lower_start = search_from + pos;
        let lower_end = lower_start + filter_lower.len();
        search_from = lower_end;

        let start = origin[lower_start].0;
        let end = origin[lower_end - 1].1;
        // Two matches inside one expanded char
        if start < last_pos {
            continue;
        }

        if start > last_pos {
            segments.push((text[last_pos..start].to_string(), false));
        }
        segments.push((text[start..end].to_string(), true));
        last_pos = end;
    }

    if last_pos < text.len() || segments.is_empty() {
        segments.push((text[last_pos..].to_string(), false));
    }
    segments
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = highlight_segments(text, filter)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="doc-list__match">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ignore_case(self.0, filter)
        }
    }

    #[test]
    fn test_empty_filter_keeps_all() {
        let rows = vec![Row("Alpha"), Row("beta")];
        assert_eq!(filter_list(&rows, ""), rows);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![Row("Annual Report.PDF"), Row("scan.png")];
        assert_eq!(filter_list(&rows, "report.pdf"), vec![Row("Annual Report.PDF")]);
        assert_eq!(filter_list(&rows, "SCAN"), vec![Row("scan.png")]);
        assert!(filter_list(&rows, "missing").is_empty());
    }

    #[test]
    fn test_short_filters_apply() {
        let rows = vec![Row("a.pdf"), Row("b.png")];
        assert_eq!(filter_list(&rows, "b"), vec![Row("b.png")]);
    }

    fn marked(segments: &[(String, bool)]) -> Vec<&str> {
        segments
            .iter()
            .filter(|(_, is_match)| *is_match)
            .map(|(s, _)| s.as_str())
            .collect()
    }

    #[test]
    fn test_segments_plain() {
        let segments = highlight_segments("Annual Report.pdf", "REPORT");
        assert_eq!(
            segments,
            vec![
                ("Annual ".to_string(), false),
                ("Report".to_string(), true),
                (".pdf".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_segments_every_occurrence() {
        let segments = highlight_segments("aXaXa", "a");
        assert_eq!(marked(&segments), vec!["a", "a", "a"]);
        let joined: String = segments.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(joined, "aXaXa");
    }

    #[test]
    fn test_segments_no_match_or_empty_filter() {
        assert_eq!(highlight_segments("scan.png", "zzz"), vec![("scan.png".to_string(), false)]);
        assert_eq!(highlight_segments("scan.png", ""), vec![("scan.png".to_string(), false)]);
        assert_eq!(highlight_segments("", "a"), vec![(String::new(), false)]);
    }

    #[test]
    fn test_segments_when_lowercase_changes_byte_lengths() {
        // Kelvin sign shrinks 3 -> 1 byte, dotted capital I grows 2 -> 3
        let name = "\u{212A}\u{130}\u{130}.pdf";
        let rows = vec![Row("\u{212A}\u{130}\u{130}.pdf")];
        assert_eq!(filter_list(&rows, "k").len(), 1);

        let segments = highlight_segments(name, "k");
        assert_eq!(marked(&segments), vec!["\u{212A}"]);
        let joined: String = segments.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(joined, name);

        let segments = highlight_segments(name, ".PDF");
        assert_eq!(marked(&segments), vec![".pdf"]);
    }

    #[test]
    fn test_segments_match_inside_expanded_char() {
        // 'İ' lowercases to "i" + combining dot; a bare "i" marks the whole char
        let segments = highlight_segments("\u{130}stanbul.pdf", "i");
        assert_eq!(marked(&segments), vec!["\u{130}"]);
    }
}
