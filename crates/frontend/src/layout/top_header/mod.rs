//! TopHeader component - application top bar.
//!
//! Contains the drawer toggle and the application title.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_drawer_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_left()
                title=move || if is_drawer_visible() { "Hide documents" } else { "Show documents" }
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">"Document Research & Theme Identifier"</span>
            </div>
        </header>
    }
}
