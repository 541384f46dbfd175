//! Shared model of the portfolio header.
//!
//! Everything in this crate is free of browser dependencies: the frontend
//! feeds measurements in through [`shared::page_metrics::PageMetrics`] and
//! renders whatever [`shared::header_state::HeaderState`] decides.

pub mod enums;
pub mod shared;
