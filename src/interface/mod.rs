pub mod prompts;
pub mod render;

pub use prompts::{prompt_profile, prompt_yes_no};
pub use render::{display_macros, display_recipe, write_recipe_csv};
