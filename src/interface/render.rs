use std::path::Path;

use crate::calculator::constants::{CARB_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use crate::error::Result;
use crate::models::{Macros, Recipe};

/// Display daily macro targets in a formatted table.
pub fn display_macros(macros: &Macros) {
    println!();
    println!("=== Daily Macros ===");
    println!();

    let rows = [
        ("Protein", macros.protein_g, PROTEIN_KCAL_PER_G),
        ("Fat", macros.fat_g, FAT_KCAL_PER_G),
        ("Carbs", macros.carbs_g, CARB_KCAL_PER_G),
    ];

    for (name, grams, kcal_per_g) in rows {
        let kcal = grams * kcal_per_g;
        let share = if macros.calories > 0.0 {
            100.0 * kcal / macros.calories
        } else {
            0.0
        };
        println!(
            "  {:<8} {:>7.1} g  {:>5.0} kcal  ({:>4.1}%)",
            name, grams, kcal, share
        );
    }

    println!();
    println!("Daily target: {:.0} kcal", macros.calories);
    println!();
}

/// Display a recipe in a formatted table.
pub fn display_recipe(recipe: &Recipe) {
    println!();
    println!("=== Recipe ===");
    println!();

    let items = recipe.items();
    let max_name_len = items.iter().map(|(name, _, _)| name.len()).max().unwrap_or(10);

    for (name, quantity, unit) in items {
        println!(
            "  {:<width$} {:>8.1} {}",
            name,
            quantity,
            unit,
            width = max_name_len
        );
    }

    println!();
    println!("Total mix weight: {:.0} g", recipe.total_grams());
    println!();
}

/// Write a recipe to a CSV file, one row per ingredient.
pub fn write_recipe_csv(path: &Path, recipe: &Recipe) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["ingredient", "quantity", "unit"])?;
    for (name, quantity, unit) in recipe.items() {
        wtr.write_record([name.to_string(), format!("{:.1}", quantity), unit.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
