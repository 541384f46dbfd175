use leptos::ev::{self, KeyboardEvent, MouseEvent};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::listeners::use_window_listener;

const CLOSE_LABEL: &str = "Fermer";

/// Panel sliding in from the right edge over a dimmed overlay.
///
/// Closed through `on_close` by the close button, a click on the overlay or
/// the Escape key. `title` and `description` are only exposed to assistive
/// technologies.
#[component]
pub fn Sheet(
    /// Whether the panel is shown
    #[prop(into)]
    open: Signal<bool>,
    /// Callback when the panel should close
    on_close: Callback<()>,
    title: &'static str,
    description: &'static str,
    /// Panel content
    children: ChildrenFn,
) -> impl IntoView {
    use_window_listener(ev::keydown, move |event: KeyboardEvent| {
        if open.get_untracked() && event.key() == "Escape" {
            on_close.run(());
        }
    });

    view! {
        <Show when=move || open.get()>
            <div class="sheet-overlay" on:click=move |_| on_close.run(())>
                <aside
                    class="sheet sheet--right"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="sheet-title"
                    aria-describedby="sheet-description"
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                >
                    <button
                        class="sheet__close"
                        aria-label=CLOSE_LABEL
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                    <h2 id="sheet-title" class="sheet__title sr-only">{title}</h2>
                    <p id="sheet-description" class="sheet__description sr-only">{description}</p>
                    {children()}
                </aside>
            </div>
        </Show>
    }
}
