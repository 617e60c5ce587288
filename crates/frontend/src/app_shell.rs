//! Application Shell - root layout of the single page
//!
//! - left drawer: `DocumentList` bound to the workspace selection
//! - center: `WorkspacePage`

use crate::domain::a001_document::ui::list::DocumentList;
use crate::layout::Shell;
use crate::workspace::{WorkspacePage, WorkspaceVm};
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let vm = leptos::context::use_context::<WorkspaceVm>()
        .expect("WorkspaceVm context not found");

    view! {
        <Shell
            left=move || view! {
                <DocumentList
                    selected=vm.selected
                    refresh_trigger=vm.refresh_trigger
                />
            }.into_any()
            center=|| view! { <WorkspacePage /> }.into_any()
        />
    }
}
