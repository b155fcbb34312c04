use serde::{Deserialize, Serialize};

/// Ingredient quantities for one day of shake mix.
///
/// Powders, oil and husk are measured in grams. Salt, multivitamin and choline
/// are fixed doses in grams. Potassium gluconate is expressed as milligrams of
/// elemental potassium to supply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub oats: f64,
    pub whey: f64,
    pub maltodextrin: f64,
    pub oil: f64,
    pub psyllium: f64,
    pub salt: f64,
    pub multivitamin: f64,
    pub choline: f64,
    pub potassium_gluconate: f64,
}

impl Recipe {
    /// Ingredient name, quantity and display unit, in mixing order.
    pub fn items(&self) -> [(&'static str, f64, &'static str); 9] {
        [
            ("Oat flour", self.oats, "g"),
            ("Whey isolate", self.whey, "g"),
            ("Maltodextrin", self.maltodextrin, "g"),
            ("Oil", self.oil, "g"),
            ("Psyllium husk", self.psyllium, "g"),
            ("Salt", self.salt, "g"),
            ("Multivitamin", self.multivitamin, "g"),
            ("Choline bitartrate", self.choline, "g"),
            ("Potassium gluconate", self.potassium_gluconate, "mg potassium"),
        ]
    }

    /// Combined weight of the gram-denominated ingredients.
    pub fn total_grams(&self) -> f64 {
        self.items()
            .into_iter()
            .filter(|(_, _, unit)| *unit == "g")
            .map(|(_, quantity, _)| quantity)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            oats: 295.0,
            whey: 200.0,
            maltodextrin: 100.0,
            oil: 51.0,
            psyllium: 11.0,
            salt: 4.0,
            multivitamin: 1.8,
            choline: 1.0,
            potassium_gluconate: 1300.0,
        }
    }

    #[test]
    fn test_items_cover_all_ingredients() {
        let items = sample_recipe().items();
        assert_eq!(items.len(), 9);

        let names: Vec<&str> = items.iter().map(|(name, _, _)| *name).collect();
        assert!(names.contains(&"Oat flour"));
        assert!(names.contains(&"Potassium gluconate"));
    }

    #[test]
    fn test_total_grams_excludes_potassium() {
        let total = sample_recipe().total_grams();
        assert!((total - 663.8).abs() < 1e-9);
    }
}
