mod state;

pub use state::DocumentListState;

use crate::domain::a001_document::{api, Selection};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::op_status::OpStatus;
use crate::shared::request_tracker::RequestTracker;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Knowledge base panel: filterable checklist of uploaded documents.
///
/// Refetches whenever `refresh_trigger` changes and resets `selected` to
/// every returned document. Fetch errors are logged only.
#[component]
pub fn DocumentList(
    /// Parent-owned selection
    selected: RwSignal<Selection>,
    /// Bumped by the parent to force a refetch
    #[prop(into)]
    refresh_trigger: Signal<u64>,
    /// Show the header and the filter box
    #[prop(default = true)]
    show_filter: bool,
) -> impl IntoView {
    let state = RwSignal::new(DocumentListState::default());
    let filter = RwSignal::new(String::new());
    let tracker = StoredValue::new(RequestTracker::new());

    Effect::new(move |_| {
        let refresh = refresh_trigger.get();
        let tracker = tracker.get_value();
        let ticket = tracker.begin();
        state.update(|s| s.load_status = OpStatus::InFlight);

        spawn_local(async move {
            let result = api::fetch_documents().await;
            if !tracker.is_current(ticket) {
                log::debug!("Dropping superseded document list (refresh #{})", refresh);
                return;
            }
            match result {
                Ok(docs) => {
                    log::info!("Loaded {} documents", docs.len());
                    let mut next = None;
                    state.update(|s| next = Some(s.apply_loaded(docs)));
                    if let Some(selection) = next {
                        selected.set(selection);
                    }
                }
                Err(e) => {
                    log::error!("Failed to fetch documents: {}", e);
                    state.update(|s| s.apply_failed(e));
                }
            }
        });
    });

    let visible = Memo::new(move |_| {
        let f = filter.get();
        state.with(|s| s.visible(&f))
    });

    view! {
        <div class="doc-list">
            {show_filter.then(|| view! {
                <div class="doc-list__header">
                    <span class="doc-list__header-icon">{icon("folder")}</span>
                    <h2 class="doc-list__title">"Knowledge Base"</h2>
                    <div class="doc-list__meta">
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            <span>{move || state.with(|s| s.count_label())}</span>
                        </Badge>
                        {move || state.with(|s| s.load_status.is_busy()).then(|| view! {
                            <Spinner size=SpinnerSize::Small />
                        })}
                    </div>
                </div>

                <div class="doc-list__filter">
                    {icon("search")}
                    <Input value=filter placeholder="Search documents…" />
                </div>
            })}

            <ul class="doc-list__items">
                <For
                    each=move || visible.get()
                    key=|doc| doc.doc_id.clone()
                    let:doc
                >
                    {{
                        let row_id = doc.doc_id.clone();
                        let marked_id = doc.doc_id.clone();
                        let check_id = doc.doc_id.clone();
                        let change_id = doc.doc_id.clone();
                        let filename = doc.filename.clone();
                        view! {
                            <li
                                class="doc-list__item"
                                class:doc-list__item--selected=move || selected.with(|s| s.contains(&marked_id))
                                on:click=move |_| selected.update(|s| s.toggle(&row_id))
                            >
                                <input
                                    type="checkbox"
                                    class="doc-list__checkbox"
                                    tabindex="-1"
                                    prop:checked=move || selected.with(|s| s.contains(&check_id))
                                    on:click=|e| e.stop_propagation()
                                    on:change=move |_| selected.update(|s| s.toggle(&change_id))
                                />
                                <div class="doc-list__text">
                                    <span class="doc-list__filename">
                                        {move || highlight_matches(&filename, &filter.get())}
                                    </span>
                                    <span class="doc-list__id">{doc.doc_id.clone()}</span>
                                </div>
                            </li>
                        }
                    }}
                </For>
            </ul>

            <Show when=move || visible.with(|v| v.is_empty())>
                <div class="doc-list__empty">"No documents match your search"</div>
            </Show>
        </div>
    }
}
