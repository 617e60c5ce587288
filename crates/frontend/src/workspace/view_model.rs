use crate::domain::a001_document::Selection;
use crate::shared::op_status::OpStatus;
use crate::shared::request_tracker::{RequestTicket, RequestTracker};
use crate::usecases::u502_ask_question::api;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_ask_question::{AskQuestion, SearchRequest, SearchResponse, SearchResultRow};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Theme text worth showing, `None` when the backend sent nothing
pub fn theme_text(themes: String) -> Option<String> {
    if themes.trim().is_empty() {
        None
    } else {
        Some(themes)
    }
}

#[derive(Clone, Copy)]
pub struct WorkspaceVm {
    /// Documents included in the next question
    pub selected: RwSignal<Selection>,
    /// Bumped after uploads; the document list refetches on change
    pub refresh_trigger: RwSignal<u64>,
    /// `None` until the first successful search
    pub results: RwSignal<Option<Vec<SearchResultRow>>>,
    pub themes: RwSignal<Option<String>>,
    pub search_status: RwSignal<OpStatus>,
    search_tracker: StoredValue<RequestTracker>,
}

impl WorkspaceVm {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(Selection::new()),
            refresh_trigger: RwSignal::new(0),
            results: RwSignal::new(None),
            themes: RwSignal::new(None),
            search_status: RwSignal::new(OpStatus::Idle),
            search_tracker: StoredValue::new(RequestTracker::new()),
        }
    }

    pub fn request_refresh(&self) {
        self.refresh_trigger.update(|n| *n += 1);
    }

    pub fn is_searching(&self) -> bool {
        self.search_status.with(|s| s.is_busy())
    }

    /// Ask `query` over the current selection
    pub fn search(&self, query: String) {
        let request = SearchRequest::new(query, self.selected.with_untracked(|s| s.to_vec()));
        log::info!(
            "{}: {} document(s), {:?}",
            AskQuestion::full_name(),
            request.doc_ids.len(),
            request.query
        );
        let (tracker, ticket) = self.begin_search();

        let vm = *self;
        spawn_local(async move {
            let result = api::search(&request).await;
            if !vm.finish_search(&tracker, ticket, result) {
                log::debug!("Dropping superseded search response for {:?}", request.query);
            }
        });
    }

    fn begin_search(&self) -> (RequestTracker, RequestTicket) {
        let tracker = self.search_tracker.get_value();
        let ticket = tracker.begin();
        self.search_status.set(OpStatus::InFlight);
        (tracker, ticket)
    }

    /// Apply `result` if `ticket` is still the latest search. Returns whether it was applied.
    fn finish_search(
        &self,
        tracker: &RequestTracker,
        ticket: RequestTicket,
        result: Result<SearchResponse, String>,
    ) -> bool {
        if !tracker.is_current(ticket) {
            return false;
        }
        self.apply_search(result);
        true
    }

    fn apply_search(&self, result: Result<SearchResponse, String>) {
        match result {
            Ok(resp) => {
                log::info!("Search returned {} row(s)", resp.results.len());
                self.results.set(Some(resp.results));
                self.themes.set(theme_text(resp.themes));
                self.search_status.set(OpStatus::Idle);
            }
            Err(e) => {
                // Previous results stay on screen
                log::error!("Search failed: {}", e);
                self.search_status.set(OpStatus::Failed(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_theme_text() {
        assert_eq!(theme_text(String::new()), None);
        assert_eq!(theme_text("  \n ".to_string()), None);
        assert_eq!(
            theme_text("Theme 1: funding".to_string()),
            Some("Theme 1: funding".to_string())
        );
    }

    fn row(id: &str) -> SearchResultRow {
        SearchResultRow {
            document_id: id.to_string(),
            extracted_answer: format!("answer from {}", id),
            citation: "Page 1, Para 2".to_string(),
        }
    }

    fn response(ids: &[&str], themes: &str) -> SearchResponse {
        SearchResponse {
            results: ids.iter().map(|id| row(id)).collect(),
            themes: themes.to_string(),
        }
    }

    #[test]
    fn test_search_success_then_failure_keeps_results() {
        let owner = Owner::new();
        owner.set();
        let vm = WorkspaceVm::new();
        assert_eq!(vm.results.get_untracked(), None);

        let (tracker, ticket) = vm.begin_search();
        assert!(vm.is_searching());
        assert!(vm.finish_search(&tracker, ticket, Ok(response(&["DOC001", "DOC002"], "Theme 1"))));
        assert_eq!(vm.search_status.get_untracked(), OpStatus::Idle);
        assert_eq!(vm.results.get_untracked().map(|r| r.len()), Some(2));
        assert_eq!(vm.themes.get_untracked(), Some("Theme 1".to_string()));

        let (tracker, ticket) = vm.begin_search();
        assert!(vm.finish_search(&tracker, ticket, Err("HTTP error: 500".to_string())));
        assert_eq!(vm.search_status.get_untracked().error(), Some("HTTP error: 500"));
        assert!(!vm.is_searching());
        assert_eq!(
            vm.results.get_untracked(),
            Some(vec![row("DOC001"), row("DOC002")])
        );
        assert_eq!(vm.themes.get_untracked(), Some("Theme 1".to_string()));
    }

    #[test]
    fn test_blank_themes_hidden() {
        let owner = Owner::new();
        owner.set();
        let vm = WorkspaceVm::new();

        let (tracker, ticket) = vm.begin_search();
        vm.finish_search(&tracker, ticket, Ok(response(&[], "  ")));
        assert_eq!(vm.results.get_untracked(), Some(Vec::new()));
        assert_eq!(vm.themes.get_untracked(), None);
    }

    #[test]
    fn test_superseded_search_is_dropped() {
        let owner = Owner::new();
        owner.set();
        let vm = WorkspaceVm::new();

        let (tracker, first) = vm.begin_search();
        let (_, second) = vm.begin_search();

        assert!(!vm.finish_search(&tracker, first, Ok(response(&["OLD"], "old"))));
        assert_eq!(vm.results.get_untracked(), None);
        assert!(vm.is_searching());

        assert!(vm.finish_search(&tracker, second, Ok(response(&["NEW"], "new"))));
        assert_eq!(vm.results.get_untracked(), Some(vec![row("NEW")]));
        assert!(!vm.is_searching());
    }

    #[test]
    fn test_request_refresh_bumps_counter() {
        let owner = Owner::new();
        owner.set();
        let vm = WorkspaceVm::new();
        vm.request_refresh();
        vm.request_refresh();
        assert_eq!(vm.refresh_trigger.get_untracked(), 2);
    }
}
