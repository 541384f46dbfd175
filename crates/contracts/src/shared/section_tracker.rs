//! Active section detection from the scroll position.

use super::page_metrics::SectionBounds;

/// Document y coordinate of the viewport's vertical midpoint.
pub fn probe_position(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height / 2.0
}

/// Section containing `probe`.
///
/// Sections are visited in document order and the last match wins, so when
/// two sections overlap the later one is reported.
pub fn active_section_at<'a, I>(sections: I, probe: f64) -> Option<&'a SectionBounds>
where
    I: IntoIterator<Item = &'a SectionBounds>,
{
    let mut active = None;
    for section in sections {
        if section.contains(probe) {
            active = Some(section);
        }
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("about", 0.0, 600.0),
            SectionBounds::new("skills", 600.0, 400.0),
            SectionBounds::new("projects", 1000.0, 800.0),
        ]
    }

    #[test]
    fn test_probe_is_viewport_midpoint() {
        assert_eq!(probe_position(0.0, 800.0), 400.0);
        assert_eq!(probe_position(250.0, 600.0), 550.0);
    }

    #[test]
    fn test_interval_is_half_open() {
        let sections = stacked();
        assert_eq!(active_section_at(&sections, 0.0).map(|s| s.id.as_str()), Some("about"));
        assert_eq!(active_section_at(&sections, 599.9).map(|s| s.id.as_str()), Some("about"));
        assert_eq!(active_section_at(&sections, 600.0).map(|s| s.id.as_str()), Some("skills"));
        assert_eq!(active_section_at(&sections, 1799.0).map(|s| s.id.as_str()), Some("projects"));
        assert!(active_section_at(&sections, 1800.0).is_none());
        assert!(active_section_at(&sections, -1.0).is_none());
    }

    #[test]
    fn test_overlap_later_section_wins() {
        let sections = vec![
            SectionBounds::new("about", 0.0, 1000.0),
            SectionBounds::new("skills", 500.0, 1000.0),
            SectionBounds::new("projects", 2000.0, 100.0),
        ];
        let hit = active_section_at(&sections, 750.0).map(|s| s.id.as_str());
        assert_eq!(hit, Some("skills"));

        let reversed: Vec<_> = sections.iter().rev().cloned().collect();
        let hit = active_section_at(&reversed, 750.0).map(|s| s.id.as_str());
        assert_eq!(hit, Some("about"));
    }

    #[test]
    fn test_zero_height_section_never_matches() {
        let sections = vec![SectionBounds::new("contact", 100.0, 0.0)];
        assert!(active_section_at(&sections, 100.0).is_none());
    }
}
