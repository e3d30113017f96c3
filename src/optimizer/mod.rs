pub mod model;

pub use model::{satisfies_bounds, solve_combo, QUANTITY_MAX};
