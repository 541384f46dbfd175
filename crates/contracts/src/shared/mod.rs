pub mod config;
pub mod header_state;
pub mod navigation;
pub mod navigator;
pub mod page_metrics;
pub mod section_tracker;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_support;
