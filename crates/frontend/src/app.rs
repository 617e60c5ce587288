use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::workspace::WorkspaceVm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Layout state (drawer visibility) for the shell
    provide_context(AppGlobalContext::new());

    // Selection and search state shared by the drawer and the workspace page
    provide_context(WorkspaceVm::new());

    view! {
        <AppShell />
    }
}
