pub mod prompts;
pub mod render;

pub use prompts::{collect_bounds, prompt_limit, prompt_restaurant};
pub use render::{display_combo, display_menu, display_no_solution};
