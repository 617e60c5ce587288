use leptos::prelude::*;

/// SectionHeader - icon, title and trailing content (badges, counters)
#[component]
pub fn SectionHeader(
    /// Icon rendered before the title
    icon: AnyView,

    /// Section title (required)
    #[prop(into)]
    title: String,

    /// Optional hint under the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Center the block (card headers) instead of a left-aligned row
    #[prop(optional)]
    centered: bool,

    /// Trailing content (badges, counters)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="section-header" class:section-header--centered=centered>
            <div class="section-header__title-row">
                <span class="section-header__icon">{icon}</span>
                <h2 class="section-header__title">{title}</h2>
            </div>
            {move || subtitle.get().map(|s| view! {
                <div class="section-header__subtitle">{s}</div>
            })}
            {children.map(|children| view! {
                <div class="section-header__extra">{children()}</div>
            })}
        </div>
    }
}
