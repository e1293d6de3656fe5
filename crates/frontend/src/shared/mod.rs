pub mod page_frame;
pub mod page_standard;
