pub mod header;
pub mod sections;

use header::Header;
use leptos::prelude::*;

/// Page shell: sticky header on top of the page content.
///
/// ```text
/// +------------------------------------------+
/// |  VE   nav ...                  theme  ☰  |
/// +------------------------------------------+
/// |              <main> sections             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
