use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::navigation::{default_entries, NavEntry};
use super::navigator::DEFAULT_SCROLL_MARGIN;
use crate::enums::layout_mode::DEFAULT_BREAKPOINT;

/// Static description of the header: brand, responsive breakpoint and menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Brand mark shown at the left of the bar
    pub brand: String,
    /// Viewport width (px) from which the menu is rendered inline
    pub breakpoint: f64,
    /// Space (px) left above a section after navigating to it
    pub scroll_margin: f64,
    #[serde(rename = "entry")]
    pub entries: Vec<NavEntry>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            brand: "VE".to_string(),
            breakpoint: DEFAULT_BREAKPOINT,
            scroll_margin: DEFAULT_SCROLL_MARGIN,
            entries: default_entries(),
        }
    }
}

impl HeaderConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: HeaderConfig =
            toml::from_str(contents).context("failed to parse header config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.breakpoint.is_nan() || self.breakpoint <= 0.0 {
            bail!("breakpoint must be positive, got {}", self.breakpoint);
        }
        if !self.scroll_margin.is_finite() {
            bail!("scroll_margin must be finite");
        }
        if self.entries.is_empty() {
            bail!("at least one navigation entry is required");
        }
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.section_id.trim().is_empty() {
                bail!("entry '{}' has an empty section_id", entry.label);
            }
            if !seen.insert(entry.section_id.as_str()) {
                bail!("duplicate section_id '{}'", entry.section_id);
            }
        }
        Ok(())
    }

    /// Section the header considers active before anything was observed.
    pub fn initial_section(&self) -> &str {
        self.entries
            .first()
            .map(|e| e.section_id.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = HeaderConfig::from_toml("").unwrap();
        assert_eq!(config, HeaderConfig::default());
        assert_eq!(config.breakpoint, 1024.0);
        assert_eq!(config.scroll_margin, 40.0);
        assert_eq!(config.initial_section(), "about");
    }

    #[test]
    fn test_overrides() {
        let config = HeaderConfig::from_toml(
            r#"
brand = "JD"
breakpoint = 768
scroll_margin = 24.5

[[entry]]
label = "Work"
section_id = "work"

[[entry]]
label = "Contact"
section_id = "contact"
"#,
        )
        .unwrap();
        assert_eq!(config.brand, "JD");
        assert_eq!(config.breakpoint, 768.0);
        assert_eq!(config.scroll_margin, 24.5);
        assert_eq!(
            config.entries,
            vec![NavEntry::new("Work", "work"), NavEntry::new("Contact", "contact")]
        );
        assert_eq!(config.initial_section(), "work");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = HeaderConfig::from_toml(
            r#"
[[entry]]
label = "A"
section_id = "about"

[[entry]]
label = "B"
section_id = "about"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate section_id 'about'"));
    }

    #[test]
    fn test_rejects_empty_menu_and_bad_breakpoint() {
        let config = HeaderConfig {
            entries: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(HeaderConfig::from_toml("breakpoint = 0").is_err());
        assert!(HeaderConfig::from_toml("breakpoint = -5.0").is_err());
    }

    #[test]
    fn test_rejects_blank_section_id() {
        let err = HeaderConfig::from_toml(
            r#"
[[entry]]
label = "Nowhere"
section_id = "  "
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty section_id"));
    }

    #[test]
    fn test_syntax_error_has_context() {
        let err = HeaderConfig::from_toml("brand = ").unwrap_err();
        assert_eq!(err.to_string(), "failed to parse header config");
    }
}
