use super::model::{normalize_query, submit_label};
use crate::shared::components::SectionHeader;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_ask_question::AskQuestion;
use leptos::prelude::*;
use thaw::*;

/// Question input. The parent runs the search and reports `searching`.
#[component]
pub fn SearchBar(
    /// Receives the trimmed, non-empty query
    on_search: Callback<String>,
    /// True while the parent's request is in flight
    #[prop(into)]
    searching: Signal<bool>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());

    let handle_submit = Callback::new(move |_: ()| {
        if searching.get_untracked() {
            return;
        }
        if let Some(q) = normalize_query(&query.get_untracked()) {
            on_search.run(q);
        }
    });

    let submit_disabled =
        Signal::derive(move || searching.get() || query.with(|q| normalize_query(q).is_none()));

    view! {
        <div class="card search-card">
            <SectionHeader
                icon=icon("sparkles")
                title=AskQuestion::display_name()
                subtitle=AskQuestion::description().to_string()
                centered=true
            />

            <div class="search-card__form">
                <div class="search-card__field">
                    <label class="search-card__label">"Type your question here..."</label>
                    <Textarea
                        value=query
                        placeholder="e.g., What are the main themes discussed in these documents?"
                        attr:style="width: 100%; min-height: 56px; max-height: 120px; resize: vertical;"
                        disabled=searching
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && ev.ctrl_key() {
                                ev.prevent_default();
                                handle_submit.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submit_disabled
                    on_click=move |_| handle_submit.run(())
                >
                    {move || if searching.get() {
                        view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                    } else {
                        icon("search")
                    }}
                    {move || format!(" {}", submit_label(searching.get()))}
                </Button>
            </div>

            <Show when=move || searching.get()>
                <div class="search-card__caption">
                    "Analyzing documents and generating insights..."
                </div>
            </Show>
        </div>
    }
}
