pub mod frame;
pub mod pixmap;
pub mod plan;
pub mod surface;
