//! Measurement provider consumed by the header state machine.
//!
//! Window size, scroll offset and element geometry are sampled through
//! [`PageMetrics`] at the moment an event is handled, so the logic in this
//! crate never touches global browser state.

/// Geometry of one page section, as laid out in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    /// Distance from the top of the document (`offsetTop`)
    pub top: f64,
    /// Rendered height (`offsetHeight`)
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open test: `[top, top + height)`.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub trait PageMetrics {
    /// `window.innerWidth`
    fn viewport_width(&self) -> f64;

    /// `window.innerHeight`
    fn viewport_height(&self) -> f64;

    /// Current vertical scroll offset
    fn scroll_y(&self) -> f64;

    /// Rendered height of the header bar, 0 when it is not mounted
    fn header_height(&self) -> f64;

    /// Document-relative top of the section with `id`, if it exists
    fn section_top(&self, id: &str) -> Option<f64>;

    /// All page sections, in document order
    fn sections(&self) -> Vec<SectionBounds>;
}
