pub mod aggregate;

pub use aggregate::{Document, DocumentListResponse, DOCUMENTS_ENDPOINT};
