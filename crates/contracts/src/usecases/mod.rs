pub mod common;
pub mod u501_upload_documents;
pub mod u502_ask_question;
