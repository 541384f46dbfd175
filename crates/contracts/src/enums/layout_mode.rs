use serde::{Deserialize, Serialize};

/// Viewport width below which the header switches to the compact layout.
pub const DEFAULT_BREAKPOINT: f64 = 1024.0;

/// Responsive layout of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Menu lives in a slide-in panel behind a trigger button
    Compact,
    /// Menu is rendered inline in the bar
    Wide,
}

impl LayoutMode {
    /// Classify a viewport width against `breakpoint`.
    ///
    /// The breakpoint itself already counts as wide.
    pub fn classify(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, LayoutMode::Compact)
    }

    pub fn code(&self) -> &'static str {
        match self {
            LayoutMode::Compact => "compact",
            LayoutMode::Wide => "wide",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_against_breakpoint() {
        for width in [0.0, 320.0, 800.0, 1023.0, 1023.9] {
            assert_eq!(
                LayoutMode::classify(width, DEFAULT_BREAKPOINT),
                LayoutMode::Compact,
                "width {width}"
            );
        }
        for width in [1024.0, 1200.0, 2560.0] {
            assert_eq!(
                LayoutMode::classify(width, DEFAULT_BREAKPOINT),
                LayoutMode::Wide,
                "width {width}"
            );
        }
    }

    #[test]
    fn test_is_compact_matches_width_rule() {
        let mut width = 0.0;
        while width < 3000.0 {
            let mode = LayoutMode::classify(width, DEFAULT_BREAKPOINT);
            assert_eq!(mode.is_compact(), width < DEFAULT_BREAKPOINT);
            width += 7.5;
        }
    }

    #[test]
    fn test_custom_breakpoint() {
        assert_eq!(LayoutMode::classify(700.0, 768.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::classify(800.0, 768.0), LayoutMode::Wide);
    }
}
