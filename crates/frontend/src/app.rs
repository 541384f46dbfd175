use crate::layout::sections::PortfolioSections;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <Shell>
                <PortfolioSections />
            </Shell>
        </ThemeProvider>
    }
}
