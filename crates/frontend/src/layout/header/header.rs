use contracts::enums::LayoutMode;
use contracts::shared::page_metrics::PageMetrics;
use leptos::prelude::*;

use super::header_store::HeaderStore;
use super::nav_items::NavItems;
use crate::shared::components::ui::{Button, ScrollArea, Sheet};
use crate::shared::config::header_config;
use crate::shared::icons::icon;
use crate::shared::page::BrowserPage;
use crate::shared::theme::ThemeToggle;
use crate::shared::viewport::{use_page_scroll, use_viewport_width};

const OPEN_MENU_LABEL: &str = "Ouvrir le menu";
const MENU_TITLE: &str = "Menu de navigation";
const MENU_DESCRIPTION: &str = "Liste des sections du site";

/// Sticky site header: brand, section menu and theme toggle.
///
/// The menu is inline on wide viewports; on compact ones it moves into a
/// slide-in panel behind a trigger button.
#[component]
pub fn Header() -> impl IntoView {
    let config = header_config();
    let initial_width = BrowserPage::current()
        .map(|page| page.viewport_width())
        .unwrap_or(config.breakpoint);
    let store = HeaderStore::new(config, initial_width);

    log::debug!(
        "header mounted, layout {}",
        LayoutMode::classify(initial_width, config.breakpoint).code()
    );
    on_cleanup(|| log::debug!("header unmounted"));

    use_viewport_width(move |width| store.on_resize(width));
    use_page_scroll(move |page| store.on_scroll(page));

    let navigate = Callback::new(move |section_id: String| {
        let Some(page) = BrowserPage::current() else {
            store.select_section(&section_id);
            return;
        };
        if let Some(request) = store.navigate_to(&section_id, &page) {
            page.smooth_scroll_to(request);
        }
    });
    let active = Signal::derive(move || store.active_section());
    let entries = config.entries.as_slice();

    view! {
        <header data-zone="header" class="site-header">
            <div class="site-header__bar">
                <div class="site-header__start">
                    <span class="site-header__brand">{config.brand.as_str()}</span>
                    <Show when=move || !store.is_compact()>
                        <nav class="site-header__nav">
                            <NavItems entries=entries active=active on_navigate=navigate />
                        </nav>
                    </Show>
                </div>
                <div class="site-header__actions">
                    <ThemeToggle />
                    <Show when=move || store.is_compact()>
                        <Button
                            class="site-header__menu-trigger"
                            aria_label=OPEN_MENU_LABEL
                            on_click=Callback::new(move |_| store.set_menu_open(true))
                        >
                            {icon("menu")}
                        </Button>
                        <Sheet
                            open=Signal::derive(move || store.menu_open())
                            on_close=Callback::new(move |_| store.set_menu_open(false))
                            title=MENU_TITLE
                            description=MENU_DESCRIPTION
                        >
                            <ScrollArea>
                                <div class="mobile-menu">
                                    <NavItems entries=entries active=active on_navigate=navigate />
                                </div>
                            </ScrollArea>
                        </Sheet>
                    </Show>
                </div>
            </div>
        </header>
    }
}
