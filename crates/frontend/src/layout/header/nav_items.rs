use contracts::shared::navigation::NavEntry;
use leptos::prelude::*;

use crate::shared::components::ui::Button;

/// Menu buttons, one per entry, in configuration order.
///
/// Stateless: the entry matching `active` is rendered bold and a click
/// reports the entry's section id through `on_navigate`.
#[component]
pub fn NavItems(
    entries: &'static [NavEntry],
    #[prop(into)] active: Signal<String>,
    on_navigate: Callback<String>,
) -> impl IntoView {
    entries
        .iter()
        .map(|entry| {
            let section_id = entry.section_id.as_str();
            let is_active = move || active.with(|a| entry.is_active(a));
            view! {
                <Button
                    class="nav-item"
                    on_click=Callback::new(move |_| on_navigate.run(section_id.to_string()))
                >
                    <span class="nav-item__label" class:nav-item__label--active=is_active>
                        {entry.label.as_str()}
                    </span>
                </Button>
            }
        })
        .collect_view()
}
