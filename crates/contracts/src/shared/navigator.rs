//! Scroll target computation for in-page navigation.

use super::page_metrics::PageMetrics;

/// Gap kept between the bottom of the header and the top of the section.
pub const DEFAULT_SCROLL_MARGIN: f64 = 40.0;

/// Animated scroll the host should perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Target `scrollY`. Not clamped; the browser clamps to the document.
    pub top: f64,
}

pub fn scroll_target(section_top: f64, header_height: f64, margin: f64) -> f64 {
    section_top - header_height - margin
}

/// Plans the scroll to `section_id`, or `None` when the page has no such section.
pub fn plan_scroll(
    page: &impl PageMetrics,
    section_id: &str,
    margin: f64,
) -> Option<ScrollRequest> {
    let section_top = page.section_top(section_id)?;
    Some(ScrollRequest {
        top: scroll_target(section_top, page.header_height(), margin),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page_metrics::SectionBounds;
    use crate::shared::test_support::FakePage;

    #[test]
    fn test_target_subtracts_header_and_margin() {
        assert_eq!(scroll_target(1000.0, 56.0, DEFAULT_SCROLL_MARGIN), 904.0);
        assert_eq!(scroll_target(0.0, 56.0, DEFAULT_SCROLL_MARGIN), -96.0);
    }

    #[test]
    fn test_plan_uses_live_header_height() {
        let page = FakePage::new(1200.0, 800.0)
            .with_sections(vec![SectionBounds::new("projects", 1500.0, 700.0)])
            .with_header_height(64.0);
        let request = plan_scroll(&page, "projects", DEFAULT_SCROLL_MARGIN);
        assert_eq!(request, Some(ScrollRequest { top: 1396.0 }));
    }

    #[test]
    fn test_unmounted_header_counts_as_zero() {
        let page = FakePage::new(1200.0, 800.0)
            .with_sections(vec![SectionBounds::new("contact", 300.0, 200.0)]);
        let request = plan_scroll(&page, "contact", DEFAULT_SCROLL_MARGIN);
        assert_eq!(request, Some(ScrollRequest { top: 260.0 }));
    }

    #[test]
    fn test_missing_section_plans_nothing() {
        let page = FakePage::new(1200.0, 800.0);
        assert_eq!(plan_scroll(&page, "skills", DEFAULT_SCROLL_MARGIN), None);
    }
}
