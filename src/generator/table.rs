use serde::{Deserialize, Serialize};

/// Per-unit nutrient content of one ingredient.
///
/// Grams of protein, carbohydrate, fat and fibre plus milligrams of potassium,
/// per native unit of the ingredient (one gram for the powders, oil and husk;
/// one dose for the fixed-dose items).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fibre: f64,
    pub potassium_mg: f64,
}

impl Nutrients {
    /// No tracked nutrient content.
    pub const NONE: Nutrients = Nutrients {
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
        fibre: 0.0,
        potassium_mg: 0.0,
    };
}

/// Read-only nutrient contents for every recipe ingredient.
///
/// Passed explicitly to the generator so callers can substitute their own
/// product labels; [`STANDARD_TABLE`] covers the stock ingredient list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientTable {
    pub oats: Nutrients,
    pub whey: Nutrients,
    pub maltodextrin: Nutrients,
    pub oil: Nutrients,
    pub psyllium: Nutrients,
    pub salt: Nutrients,
    pub multivitamin: Nutrients,
    pub choline: Nutrients,
    pub potassium_gluconate: Nutrients,
}

/// Label values for the stock ingredients.
///
/// The table is kept consistent with the allocation's assumptions: oil counts
/// as pure fat and maltodextrin as pure carbohydrate, psyllium's label
/// carbohydrate is all dietary fibre, and salt/choline contribute nothing the
/// allocation tracks. Potassium gluconate is dosed directly in milligrams of
/// elemental potassium, so its per-unit potassium is 1.
pub const STANDARD_TABLE: IngredientTable = IngredientTable {
    oats: Nutrients {
        protein: 0.15,
        carbs: 0.60,
        fat: 0.09,
        fibre: 0.10,
        potassium_mg: 3.7,
    },
    whey: Nutrients {
        protein: 0.90,
        carbs: 0.025,
        fat: 0.01,
        fibre: 0.0,
        potassium_mg: 1.5,
    },
    maltodextrin: Nutrients {
        carbs: 1.0,
        ..Nutrients::NONE
    },
    oil: Nutrients {
        fat: 1.0,
        ..Nutrients::NONE
    },
    psyllium: Nutrients {
        fibre: 0.80,
        ..Nutrients::NONE
    },
    salt: Nutrients::NONE,
    multivitamin: Nutrients {
        potassium_mg: 40.0,
        ..Nutrients::NONE
    },
    choline: Nutrients::NONE,
    potassium_gluconate: Nutrients {
        potassium_mg: 1.0,
        ..Nutrients::NONE
    },
};
