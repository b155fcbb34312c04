pub mod calculations;
pub mod constants;

pub use calculations::{calculate_calories, calculate_macros};
pub use constants::*;
