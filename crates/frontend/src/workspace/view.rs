use super::view_model::WorkspaceVm;
use crate::usecases::u501_upload_documents::UploadPage;
use crate::usecases::u502_ask_question::{ResultsTable, SearchBar, ThemeDisplay};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let vm = leptos::context::use_context::<WorkspaceVm>()
        .expect("WorkspaceVm context not found");

    let search_error = move || {
        vm.search_status
            .with(|s| s.error().map(str::to_string))
            .map(|e| {
                view! {
                    <div class="workspace__error">
                        <MessageBar intent=MessageBarIntent::Error>
                            <span>{format!("Search failed: {}", e)}</span>
                        </MessageBar>
                    </div>
                }
            })
    };

    view! {
        <div class="workspace">
            <UploadPage on_upload_success=Callback::new(move |_| vm.request_refresh()) />

            <SearchBar
                on_search=Callback::new(move |q: String| vm.search(q))
                searching=Signal::derive(move || vm.is_searching())
            />

            {search_error}

            <Show when=move || vm.results.with(|r| r.is_some())>
                <ResultsTable rows=Signal::derive(move || vm.results.get().unwrap_or_default()) />
            </Show>

            <Show when=move || vm.themes.with(|t| t.is_some())>
                <ThemeDisplay text=Signal::derive(move || vm.themes.get().unwrap_or_default()) />
            </Show>
        </div>
    }
}
