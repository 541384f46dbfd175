//! Browser implementation of [`PageMetrics`].

use contracts::shared::navigator::ScrollRequest;
use contracts::shared::page_metrics::{PageMetrics, SectionBounds};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

/// Snapshot handle on the current window and document.
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// Animated scroll to `request.top`.
    pub fn smooth_scroll_to(&self, request: ScrollRequest) {
        let options = ScrollToOptions::new();
        options.set_top(request.top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn html_element(&self, selector: &str) -> Option<HtmlElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }
}

impl PageMetrics for BrowserPage {
    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn header_height(&self) -> f64 {
        self.html_element("header")
            .map(|header| header.offset_height() as f64)
            .unwrap_or(0.0)
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        let section = self.document.get_element_by_id(id)?;
        let page_offset = self.window.page_y_offset().unwrap_or(0.0);
        Some(section.get_bounding_client_rect().top() + page_offset)
    }

    fn sections(&self) -> Vec<SectionBounds> {
        let Ok(nodes) = self.document.query_selector_all("section") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|el| {
                SectionBounds::new(el.id(), el.offset_top() as f64, el.offset_height() as f64)
            })
            .collect()
    }
}
