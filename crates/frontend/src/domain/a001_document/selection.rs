use contracts::domain::a001_document::Document;

/// Documents chosen for the next question.
///
/// Keeps insertion order; an id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every document in the list, in list order
    pub fn all_of(docs: &[Document]) -> Self {
        let mut selection = Self::new();
        for doc in docs {
            if !selection.contains(&doc.doc_id) {
                selection.ids.push(doc.doc_id.clone());
            }
        }
        selection
    }

    pub fn contains(&self, doc_id: &str) -> bool {
        self.ids.iter().any(|id| id == doc_id)
    }

    /// Remove `doc_id` if present, add it otherwise
    pub fn toggle(&mut self, doc_id: &str) {
        if let Some(pos) = self.ids.iter().position(|id| id == doc_id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(doc_id.to_string());
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.clone()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<Document> {
        vec![
            Document::new("DOC001", "policy.pdf"),
            Document::new("DOC002", "scan.png"),
            Document::new("DOC003", "minutes.jpg"),
        ]
    }

    #[test]
    fn test_all_of_selects_every_id() {
        let sel = Selection::all_of(&docs());
        assert_eq!(sel.ids(), &["DOC001", "DOC002", "DOC003"]);
    }

    #[test]
    fn test_all_of_empty_list() {
        assert!(Selection::all_of(&[]).is_empty());
    }

    #[test]
    fn test_toggle_removes_only_that_id() {
        let mut sel = Selection::all_of(&docs());
        sel.toggle("DOC002");
        assert_eq!(sel.ids(), &["DOC001", "DOC003"]);
    }

    #[test]
    fn test_toggle_adds_only_that_id() {
        let mut sel = Selection::all_of(&docs()[..1]);
        sel.toggle("DOC003");
        assert_eq!(sel.ids(), &["DOC001", "DOC003"]);
        assert!(!sel.contains("DOC002"));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let original = Selection::all_of(&docs());
        let mut sel = original.clone();
        sel.toggle("DOC001");
        sel.toggle("DOC001");
        assert_eq!(sel.len(), original.len());
        assert!(sel.contains("DOC001"));
    }
}
