use serde::{Deserialize, Serialize};

/// One link of the header menu, pointing at an in-page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Text shown on the button
    pub label: String,
    /// `id` of the `<section>` element the link scrolls to
    pub section_id: String,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            section_id: section_id.into(),
        }
    }

    /// Whether this entry is rendered emphasized for `active_section`.
    pub fn is_active(&self, active_section: &str) -> bool {
        self.section_id == active_section
    }
}

/// Sections of the portfolio page, in display order.
pub fn default_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("À propos", "about"),
        NavEntry::new("Compétences", "skills"),
        NavEntry::new("Projets", "projects"),
        NavEntry::new("Expériences", "experiences"),
        NavEntry::new("Formations", "educations"),
        NavEntry::new("Contact", "contact"),
    ]
}
