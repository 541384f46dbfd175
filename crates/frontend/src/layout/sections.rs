use leptos::prelude::*;

use crate::shared::config::header_config;

/// One `<section>` per menu entry; the header tracks and scrolls to these.
#[component]
pub fn PortfolioSections() -> impl IntoView {
    header_config()
        .entries
        .iter()
        .map(|entry| {
            view! {
                <section id=entry.section_id.as_str() class="page-section">
                    <h2 class="page-section__title">{entry.label.as_str()}</h2>
                </section>
            }
        })
        .collect_view()
}
