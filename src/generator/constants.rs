/// Oat flour at the lower calorie anchor (g).
pub const OAT_BASE_G: f64 = 200.0;

/// Additional oat flour spread across the anchor range (g).
pub const OAT_SCALE_G: f64 = 150.0;

/// Calorie anchors for oat scaling (kcal/day). The interpolation is not
/// clamped; targets outside the range extrapolate linearly.
pub const OAT_CAL_LOWER: f64 = 1600.0;
pub const OAT_CAL_UPPER: f64 = 3400.0;

/// Dietary fibre target per 1000 kcal of intake (g).
pub const FIBRE_G_PER_1000_KCAL: f64 = 14.0;

/// Fixed daily doses (g). These contribute trace micronutrients whose exact
/// amount is not critical within tolerance.
pub const SALT_DOSE_G: f64 = 4.0;
pub const MULTIVITAMIN_DOSE_G: f64 = 1.8;
pub const CHOLINE_DOSE_G: f64 = 1.0;

/// Daily elemental potassium requirement (mg).
pub const POTASSIUM_TARGET_MG: f64 = 2500.0;
