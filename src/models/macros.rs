use serde::{Deserialize, Serialize};

/// Recommended daily macro-nutrient intake.
///
/// Produced by the calculator and consumed by the recipe generator; all fields
/// are non-negative in a well-formed result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    /// Daily energy target in kcal.
    pub calories: f64,

    /// Daily protein in grams.
    pub protein_g: f64,

    /// Daily fat in grams.
    pub fat_g: f64,

    /// Daily carbohydrate in grams.
    pub carbs_g: f64,
}
