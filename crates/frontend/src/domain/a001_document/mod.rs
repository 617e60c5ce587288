pub mod api;
pub mod selection;
pub mod ui;

use crate::shared::list_utils::{contains_ignore_case, Searchable};
use contracts::domain::a001_document::Document;

pub use selection::Selection;

impl Searchable for Document {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.filename, filter) || contains_ignore_case(&self.doc_id, filter)
    }
}
