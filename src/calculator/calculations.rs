use crate::calculator::constants::*;
use crate::error::{MixerError, Result};
use crate::models::{Gender, Macros, Profile, Regime};

/// Harris-Benedict basal metabolic rate estimate (kcal/day).
fn harris_benedict(profile: &Profile) -> f64 {
    match profile.gender {
        Gender::Male => {
            66.0 + 13.7 * profile.weight_kg + 5.0 * profile.height_cm - 6.76 * profile.age
        }
        Gender::Female => {
            655.0 + 9.6 * profile.weight_kg + 1.8 * profile.height_cm - 4.7 * profile.age
        }
    }
}

/// Mifflin-St Jeor basal metabolic rate estimate (kcal/day).
fn mifflin_st_jeor(profile: &Profile) -> f64 {
    let base = 9.99 * profile.weight_kg + 6.25 * profile.height_cm - 4.92 * profile.age;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Katch-McArdle basal metabolic rate estimate (kcal/day).
///
/// The only estimate of the three that accounts for body composition.
fn katch_mcardle(profile: &Profile) -> f64 {
    370.0 + 21.6 * profile.lean_body_mass_kg()
}

fn regime_modifier(regime: Regime) -> f64 {
    match regime {
        Regime::Bulk => BULK_MODIFIER,
        Regime::Maintain => 1.0,
        Regime::Cut => CUT_MODIFIER,
    }
}

/// Daily calorie target for an already-validated profile.
///
/// Averages the three basal-rate estimates, scales by activity level, then
/// applies the regime modifier.
fn daily_calories(profile: &Profile) -> f64 {
    let average =
        (harris_benedict(profile) + mifflin_st_jeor(profile) + katch_mcardle(profile)) / 3.0;
    profile.activity_level * average * regime_modifier(profile.regime)
}

/// Calculate the recommended daily calorie intake for a profile.
pub fn calculate_calories(profile: &Profile) -> Result<f64> {
    profile.validate()?;
    Ok(daily_calories(profile))
}

/// Calculate the recommended daily macro-nutrient intake for a profile.
///
/// Protein scales with lean body mass and fat with body weight, at fixed
/// grams-per-pound ratios. Carbohydrate is whatever remains of the calorie
/// budget once protein and fat are funded; when the budget cannot cover them
/// the combination of metrics and goal is infeasible and reported as such
/// rather than returned as a negative quantity.
pub fn calculate_macros(profile: &Profile) -> Result<Macros> {
    profile.validate()?;

    let lean_mass_lb = profile.lean_body_mass_kg() * KG_TO_LB;
    let protein_g = PROTEIN_G_PER_LB_LEAN_MASS * lean_mass_lb;
    let fat_g = FAT_G_PER_LB_BODY_WEIGHT * profile.weight_kg * KG_TO_LB;
    let calories = daily_calories(profile);
    let carbs_g =
        (calories - PROTEIN_KCAL_PER_G * protein_g - FAT_KCAL_PER_G * fat_g) / CARB_KCAL_PER_G;

    if !carbs_g.is_finite() || carbs_g < 0.0 {
        return Err(MixerError::InfeasibleTarget {
            field: "carbs_g".to_string(),
            value: carbs_g,
        });
    }

    Ok(Macros {
        calories,
        protein_g,
        fat_g,
        carbs_g,
    })
}
