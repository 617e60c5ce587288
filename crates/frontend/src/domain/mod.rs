pub mod a001_document;
