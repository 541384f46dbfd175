//! Theme management module for the application.
//!
//! Provides a context-based light/dark theme. The initial mode follows the
//! system `prefers-color-scheme`; the active mode is applied to `<html>` as
//! a `dark` class plus a `data-theme` attribute, and to the thaw theme.

mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use contracts::enums::ThemeMode;
use contracts::shared::theme::ThemeSource;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};
use web_sys::window;

/// Read the system color scheme.
fn system_preference() -> ThemeMode {
    let prefers_dark = window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Apply the mode to the document element.
fn apply_theme(mode: ThemeMode) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.class_list().toggle_with_force("dark", mode.is_dark());
    let _ = root.set_attribute("data-theme", mode.as_str());
}

fn toolkit_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::light(),
        ThemeMode::Dark => Theme::dark(),
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
    toolkit: RwSignal<Theme>,
}

impl ThemeContext {
    /// Current mode, tracked.
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }
}

impl ThemeSource for ThemeContext {
    fn current_theme(&self) -> ThemeMode {
        self.mode.get_untracked()
    }

    fn set_theme(&self, mode: ThemeMode) {
        log::debug!("theme -> {}", mode.as_str());
        self.mode.set(mode);
        self.toolkit.set(toolkit_theme(mode));
        apply_theme(mode);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = system_preference();
    apply_theme(initial);

    let toolkit = RwSignal::new(toolkit_theme(initial));
    provide_context(ThemeContext {
        mode: RwSignal::new(initial),
        toolkit,
    });

    view! {
        <ConfigProvider theme=toolkit>
            {children()}
        </ConfigProvider>
    }
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
