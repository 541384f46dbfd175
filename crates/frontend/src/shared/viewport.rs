//! Resize and scroll observation.

use contracts::shared::page_metrics::PageMetrics;
use leptos::ev;

use super::listeners::use_window_listener;
use super::page::BrowserPage;

/// Calls `on_width` with `window.innerWidth` right away and after every resize.
pub fn use_viewport_width(on_width: impl Fn(f64) + 'static) {
    if let Some(page) = BrowserPage::current() {
        on_width(page.viewport_width());
    }
    use_window_listener(ev::resize, move |_| {
        if let Some(page) = BrowserPage::current() {
            on_width(page.viewport_width());
        }
    });
}

/// Calls `on_scroll` with a fresh page snapshot on every scroll event.
pub fn use_page_scroll(on_scroll: impl Fn(&BrowserPage) + 'static) {
    use_window_listener(ev::scroll, move |_| {
        if let Some(page) = BrowserPage::current() {
            on_scroll(&page);
        }
    });
}
