pub mod packing;
pub mod svg;

pub use packing::{pack_circles, Circle};
pub use svg::render_bubble_chart;
