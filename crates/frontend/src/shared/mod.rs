pub mod components;
pub mod config;
pub mod icons;
pub mod listeners;
pub mod page;
pub mod theme;
pub mod viewport;
