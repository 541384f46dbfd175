use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::{Button as ThawButton, ButtonAppearance};

/// Borderless (ghost) button used for every control of the header.
#[component]
pub fn Button(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Accessible name, for icon-only buttons
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Click event handler
    on_click: Callback<MouseEvent>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    view! {
        <ThawButton
            appearance=ButtonAppearance::Subtle
            class=class
            on_click=move |ev: MouseEvent| on_click.run(ev)
            attr:aria-label=aria_label
        >
            {children()}
        </ThawButton>
    }
}
