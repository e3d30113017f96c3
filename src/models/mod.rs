pub mod bounds;
pub mod item;
pub mod solution;

pub use bounds::ConstraintBounds;
pub use item::{MenuItem, Nutrient};
pub use solution::{ComboItem, ComboSolution, NutrientTotals};
