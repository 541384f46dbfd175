pub mod layout_mode;
pub mod theme_mode;

pub use layout_mode::LayoutMode;
pub use theme_mode::ThemeMode;
