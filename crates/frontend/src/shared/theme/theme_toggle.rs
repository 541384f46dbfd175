use contracts::enums::ThemeMode;
use contracts::shared::theme::ThemeSource;
use leptos::prelude::*;

use super::use_theme;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

const TOGGLE_LABEL: &str = "Changer le thème";

/// Light/dark switch. Shows the sun in light mode and the moon in dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <Button
            class="theme-toggle"
            aria_label=TOGGLE_LABEL
            on_click=Callback::new(move |_| {
                ctx.toggle_theme();
            })
        >
            {move || match ctx.mode() {
                ThemeMode::Light => icon("sun"),
                ThemeMode::Dark => icon("moon"),
            }}
        </Button>
    }
}
