//! Wire types shared by the document Q&A client and its backend.

pub mod domain;
pub mod usecases;
