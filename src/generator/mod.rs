pub mod allocation;
pub mod constants;
pub mod table;

pub use allocation::generate_recipe;
pub use constants::*;
pub use table::{IngredientTable, Nutrients, STANDARD_TABLE};
