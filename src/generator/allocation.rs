use crate::error::{MixerError, Result};
use crate::generator::constants::*;
use crate::generator::table::IngredientTable;
use crate::models::{Macros, Recipe};

/// Derive ingredient quantities for a macro target by forward substitution.
///
/// Quantities are solved in a fixed order, each from the targets and the
/// quantities already fixed, and never revisited:
///
/// 1. Salt, multivitamin and choline take their fixed doses.
/// 2. Oat flour anchors the recipe's micronutrient profile and scales
///    linearly with the calorie target between the two anchors (unclamped, so
///    extreme targets extrapolate).
/// 3. Whey covers the protein still missing after oats; every other
///    ingredient's protein is treated as negligible.
/// 4. Psyllium husk covers the fibre target (scaling with calories) net of
///    the fibre in whey and oats.
/// 5. Oil covers the fat still missing after oats and whey.
/// 6. Maltodextrin covers the carbohydrate still missing after oats, whey and
///    psyllium.
/// 7. Potassium gluconate covers the potassium requirement net of oats and
///    the multivitamin, in mg of elemental potassium.
///
/// A step that produces a negative or non-finite quantity means the targets
/// cannot be met with these ingredients; the offending ingredient is reported
/// and no earlier quantity is revised.
pub fn generate_recipe(macros: &Macros, table: &IngredientTable) -> Result<Recipe> {
    let salt = SALT_DOSE_G;
    let multivitamin = MULTIVITAMIN_DOSE_G;
    let choline = CHOLINE_DOSE_G;

    let oats = quantity(
        "oats",
        OAT_BASE_G
            + OAT_SCALE_G * (macros.calories - OAT_CAL_LOWER) / (OAT_CAL_UPPER - OAT_CAL_LOWER),
    )?;

    let whey = quantity(
        "whey",
        (macros.protein_g - oats * table.oats.protein) / table.whey.protein,
    )?;

    let fibre_target = FIBRE_G_PER_1000_KCAL * macros.calories / 1000.0;
    let psyllium = quantity(
        "psyllium",
        (fibre_target - whey * table.whey.fibre - oats * table.oats.fibre) / table.psyllium.fibre,
    )?;

    let oil = quantity(
        "oil",
        macros.fat_g - oats * table.oats.fat - whey * table.whey.fat,
    )?;

    let maltodextrin = quantity(
        "maltodextrin",
        macros.carbs_g
            - oats * table.oats.carbs
            - whey * table.whey.carbs
            - psyllium * table.psyllium.carbs,
    )?;

    let potassium_gluconate = quantity(
        "potassium_gluconate",
        POTASSIUM_TARGET_MG
            - oats * table.oats.potassium_mg
            - multivitamin * table.multivitamin.potassium_mg,
    )?;

    Ok(Recipe {
        oats,
        whey,
        maltodextrin,
        oil,
        psyllium,
        salt,
        multivitamin,
        choline,
        potassium_gluconate,
    })
}

/// Accept a computed quantity, or report it as infeasible.
fn quantity(ingredient: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MixerError::InfeasibleTarget {
            field: ingredient.to_string(),
            value,
        })
    }
}
