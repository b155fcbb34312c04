pub mod calculator;
pub mod cli;
pub mod error;
pub mod generator;
pub mod interface;
pub mod models;
pub mod persistence;

pub use calculator::{calculate_calories, calculate_macros};
pub use error::{MixerError, Result};
pub use generator::{IngredientTable, STANDARD_TABLE, generate_recipe};
pub use models::{Gender, Macros, Profile, Recipe, Regime};
