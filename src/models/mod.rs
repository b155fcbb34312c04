pub mod macros;
pub mod profile;
pub mod recipe;

pub use macros::Macros;
pub use profile::{Gender, Profile, Regime};
pub use recipe::Recipe;
