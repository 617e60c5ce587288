use crate::shared::icons::icon;
use leptos::prelude::*;

/// Generated cross-document summary, shown as plain text with line breaks kept
#[component]
pub fn ThemeDisplay(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! {
        <div class="insights">
            <div class="insights__header">
                <span class="insights__icon">{icon("lightbulb")}</span>
                <h2 class="insights__title">"AI-Generated Insights"</h2>
            </div>

            <div class="insights__card">
                <div class="insights__text" style="white-space: pre-wrap;">
                    {move || text.get()}
                </div>
                <hr class="insights__divider" />
                <div class="insights__footer">"Generated using AI-powered semantic analysis"</div>
            </div>
        </div>
    }
}
