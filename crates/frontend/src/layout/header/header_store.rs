use contracts::enums::LayoutMode;
use contracts::shared::config::HeaderConfig;
use contracts::shared::header_state::HeaderState;
use contracts::shared::navigator::ScrollRequest;
use contracts::shared::page_metrics::PageMetrics;
use leptos::prelude::*;

/// Reactive wrapper around [`HeaderState`], owned by one mounted header.
///
/// Every transition goes through `maybe_update`, so subscribers only rerun
/// when the state machine reports an actual change.
#[derive(Clone, Copy)]
pub struct HeaderStore {
    state: RwSignal<HeaderState>,
}

impl HeaderStore {
    pub fn new(config: &HeaderConfig, viewport_width: f64) -> Self {
        Self {
            state: RwSignal::new(HeaderState::new(config, viewport_width)),
        }
    }

    pub fn layout(&self) -> LayoutMode {
        self.state.with(|s| s.layout())
    }

    pub fn is_compact(&self) -> bool {
        self.layout().is_compact()
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(|s| s.menu_open())
    }

    pub fn active_section(&self) -> String {
        self.state.with(|s| s.active_section().to_string())
    }

    pub fn on_resize(&self, viewport_width: f64) {
        let mut layout = None;
        self.state.maybe_update(|s| {
            let changed = s.on_resize(viewport_width);
            if changed {
                layout = Some(s.layout());
            }
            changed
        });
        if let Some(layout) = layout {
            log::debug!("header layout -> {}", layout.code());
        }
    }

    pub fn on_scroll(&self, page: &impl PageMetrics) {
        self.state.maybe_update(|s| s.on_scroll(page));
    }

    pub fn set_menu_open(&self, open: bool) {
        let mut changed = false;
        self.state.maybe_update(|s| {
            changed = s.set_menu_open(open);
            changed
        });
        if changed {
            log::debug!("mobile menu {}", if open { "opened" } else { "closed" });
        }
    }

    /// State half of a navigation, for when there is no page to scroll.
    pub fn select_section(&self, section_id: &str) {
        log::debug!("select -> #{section_id}");
        self.state.update(|s| s.select_section(section_id));
    }

    /// Applies the navigation and returns the scroll the caller must run.
    pub fn navigate_to(
        &self,
        section_id: &str,
        page: &impl PageMetrics,
    ) -> Option<ScrollRequest> {
        log::debug!("navigate -> #{section_id}");
        self.state
            .try_update(|s| s.navigate_to(section_id, page))
            .flatten()
    }
}
