/// Kilogram to pound conversion factor.
pub const KG_TO_LB: f64 = 2.204_622_62;

/// Grams of protein per pound of lean body mass.
pub const PROTEIN_G_PER_LB_LEAN_MASS: f64 = 1.5;

/// Grams of fat per pound of body weight.
pub const FAT_G_PER_LB_BODY_WEIGHT: f64 = 0.45;

/// Energy content per gram of each macro-nutrient (kcal).
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;
pub const CARB_KCAL_PER_G: f64 = 4.0;

/// Calorie modifiers for the bulk and cut regimes (maintain is 1.0).
pub const BULK_MODIFIER: f64 = 1.1;
pub const CUT_MODIFIER: f64 = 0.9;
