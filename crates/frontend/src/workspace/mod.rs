//! Workspace page: owns selection and search state for all panels (MVVM)
//!
//! Structure:
//! - view_model.rs: WorkspaceVm with RwSignals, search orchestration
//! - view.rs: WorkspacePage (upload, question, results, insights)

mod view;
mod view_model;

pub use view::WorkspacePage;
pub use view_model::WorkspaceVm;
