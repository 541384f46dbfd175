pub mod header;
pub mod header_store;
pub mod nav_items;

pub use header::Header;
pub use header_store::HeaderStore;
pub use nav_items::NavItems;
