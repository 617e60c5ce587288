use crate::domain::a001_document::Selection;
use crate::shared::format::count_label;
use crate::shared::list_utils::filter_list;
use crate::shared::op_status::OpStatus;
use contracts::domain::a001_document::Document;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentListState {
    pub docs: Vec<Document>,
    pub load_status: OpStatus,
}

impl DocumentListState {
    /// Rows to show for the current filter. Never touches the selection.
    pub fn visible(&self, filter: &str) -> Vec<Document> {
        filter_list(&self.docs, filter)
    }

    /// "N document(s)" over the full list
    pub fn count_label(&self) -> String {
        count_label(self.docs.len(), "document")
    }

    /// Replace the list with a fresh fetch and return the default selection (all)
    pub fn apply_loaded(&mut self, docs: Vec<Document>) -> Selection {
        let selection = Selection::all_of(&docs);
        self.docs = docs;
        self.load_status = OpStatus::Idle;
        selection
    }

    /// Keep the last good list; only the status changes
    pub fn apply_failed(&mut self, error: String) {
        self.load_status = OpStatus::Failed(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> DocumentListState {
        let mut st = DocumentListState::default();
        st.apply_loaded(vec![
            Document::new("DOC001", "Climate Policy.pdf"),
            Document::new("DOC002", "budget_scan.png"),
            Document::new("REPORT-9", "notes.jpg"),
        ]);
        st
    }

    #[test]
    fn test_loaded_selects_all_returned_ids() {
        let mut st = DocumentListState::default();
        let sel = st.apply_loaded(vec![
            Document::new("a", "a.pdf"),
            Document::new("b", "b.pdf"),
        ]);
        assert_eq!(sel.ids(), &["a", "b"]);
        assert_eq!(st.load_status, OpStatus::Idle);
    }

    #[test]
    fn test_reload_replaces_list() {
        let mut st = loaded();
        let sel = st.apply_loaded(vec![Document::new("DOC004", "new.pdf")]);
        assert_eq!(st.docs.len(), 1);
        assert_eq!(sel.ids(), &["DOC004"]);
    }

    #[test]
    fn test_failure_keeps_last_good_list() {
        let mut st = loaded();
        st.apply_failed("HTTP error: 502".to_string());
        assert_eq!(st.docs.len(), 3);
        assert_eq!(st.load_status.error(), Some("HTTP error: 502"));
    }

    #[test]
    fn test_filter_matches_filename_or_id() {
        let st = loaded();
        let by_name = st.visible("climate");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].doc_id, "DOC001");

        let by_id = st.visible("report");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].filename, "notes.jpg");

        assert_eq!(st.visible("DOC").len(), 2);
        assert!(st.visible("zzz").is_empty());
        assert_eq!(st.visible("").len(), 3);
    }

    #[test]
    fn test_filter_does_not_change_selection() {
        let mut st = DocumentListState::default();
        let sel = st.apply_loaded(vec![
            Document::new("a", "alpha.pdf"),
            Document::new("b", "beta.pdf"),
        ]);
        let before = sel.clone();
        let _ = st.visible("alpha");
        assert_eq!(sel, before);
    }

    #[test]
    fn test_count_label() {
        let mut st = DocumentListState::default();
        assert_eq!(st.count_label(), "0 documents");
        st.apply_loaded(vec![Document::new("a", "a.pdf")]);
        assert_eq!(st.count_label(), "1 document");
        assert_eq!(loaded().count_label(), "3 documents");
    }
}
