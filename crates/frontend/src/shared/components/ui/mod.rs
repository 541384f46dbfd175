pub mod button;
pub mod scroll_area;
pub mod sheet;

pub use button::Button;
pub use scroll_area::ScrollArea;
pub use sheet::Sheet;
