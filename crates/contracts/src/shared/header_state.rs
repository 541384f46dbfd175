//! State machine behind the site header.
//!
//! ```text
//!              resize >= breakpoint
//!   +----------------------------------------+
//!   v                                        |
//! Wide ----resize < breakpoint----> Compact/Closed <--close/navigate-- Compact/Open
//!                                        |                               ^
//!                                        +------------open_menu----------+
//! ```
//!
//! Any layout change closes the menu, and the menu can never be open while
//! the layout is wide.

use super::config::HeaderConfig;
use super::navigator::{plan_scroll, ScrollRequest};
use super::page_metrics::PageMetrics;
use super::section_tracker::{active_section_at, probe_position};
use crate::enums::LayoutMode;

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderState {
    breakpoint: f64,
    scroll_margin: f64,
    section_ids: Vec<String>,
    layout: LayoutMode,
    menu_open: bool,
    active_section: String,
}

impl HeaderState {
    /// Initial state for the first viewport measurement.
    pub fn new(config: &HeaderConfig, viewport_width: f64) -> Self {
        Self {
            breakpoint: config.breakpoint,
            scroll_margin: config.scroll_margin,
            section_ids: config
                .entries
                .iter()
                .map(|e| e.section_id.clone())
                .collect(),
            layout: LayoutMode::classify(viewport_width, config.breakpoint),
            menu_open: false,
            active_section: config.initial_section().to_string(),
        }
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn is_compact(&self) -> bool {
        self.layout.is_compact()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    /// Reclassifies the layout. Returns `true` when anything changed.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        let layout = LayoutMode::classify(viewport_width, self.breakpoint);
        if layout == self.layout {
            return false;
        }
        self.layout = layout;
        self.menu_open = false;
        true
    }

    /// Opens the mobile menu. Refused in the wide layout.
    pub fn open_menu(&mut self) -> bool {
        if !self.is_compact() || self.menu_open {
            return false;
        }
        self.menu_open = true;
        true
    }

    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// Open-change handler of the slide-in panel.
    pub fn set_menu_open(&mut self, open: bool) -> bool {
        if open {
            self.open_menu()
        } else {
            self.close_menu()
        }
    }

    /// Updates the active section from the current scroll position.
    ///
    /// Only sections that have a menu entry are considered. When no section
    /// contains the viewport midpoint the active section is kept.
    pub fn on_scroll(&mut self, page: &impl PageMetrics) -> bool {
        let probe = probe_position(page.scroll_y(), page.viewport_height());
        let sections = page.sections();
        let tracked = sections.iter().filter(|s| self.tracks(&s.id));
        match active_section_at(tracked, probe) {
            Some(section) if section.id != self.active_section => {
                self.active_section = section.id.clone();
                true
            }
            _ => false,
        }
    }

    /// Navigates to `section_id`.
    ///
    /// Returns the scroll the host has to animate, or `None` when the page
    /// has no such section. The active section and the closed menu are
    /// applied either way.
    pub fn navigate_to(
        &mut self,
        section_id: &str,
        page: &impl PageMetrics,
    ) -> Option<ScrollRequest> {
        let request = plan_scroll(page, section_id, self.scroll_margin);
        self.select_section(section_id);
        request
    }

    /// Marks `section_id` active and closes the menu, without scrolling.
    pub fn select_section(&mut self, section_id: &str) {
        self.active_section = section_id.to_string();
        self.menu_open = false;
    }

    fn tracks(&self, section_id: &str) -> bool {
        self.section_ids.iter().any(|id| id == section_id)
    }
}
