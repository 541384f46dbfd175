use leptos::prelude::*;

/// Vertically scrollable container that keeps its content inside the parent.
#[component]
pub fn ScrollArea(children: Children) -> impl IntoView {
    view! {
        <div class="scroll-area">
            <div class="scroll-area__viewport">{children()}</div>
        </div>
    }
}
