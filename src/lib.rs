pub mod catalog;
pub mod chart;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod optimizer;

pub use error::{ComboError, Result};
pub use models::{ComboSolution, ConstraintBounds, MenuItem};
