use super::page_metrics::{PageMetrics, SectionBounds};

/// In-memory page used by the unit tests.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
    pub header_height: f64,
    pub sections: Vec<SectionBounds>,
}

impl FakePage {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_sections(mut self, sections: Vec<SectionBounds>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_header_height(mut self, height: f64) -> Self {
        self.header_height = height;
        self
    }

    pub fn scrolled_to(mut self, y: f64) -> Self {
        self.scroll_y = y;
        self
    }
}

impl PageMetrics for FakePage {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn header_height(&self) -> f64 {
        self.header_height
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.top)
    }

    fn sections(&self) -> Vec<SectionBounds> {
        self.sections.clone()
    }
}
