use serde::Serialize;

use crate::models::{MenuItem, Nutrient};

/// One ordered item in a solved combo.
#[derive(Debug, Clone, Serialize)]
pub struct ComboItem {
    pub name: String,
    pub quantity: u32,
}

/// Achieved nutrient sums for a solved combo.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NutrientTotals {
    pub total_fat: f64,
    pub sat_fat: f64,
    pub total_carb: f64,
    pub sugar: f64,
    pub protein: f64,
    pub sodium: f64,
}

impl NutrientTotals {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::TotalFat => self.total_fat,
            Nutrient::SatFat => self.sat_fat,
            Nutrient::TotalCarb => self.total_carb,
            Nutrient::Sugar => self.sugar,
            Nutrient::Protein => self.protein,
            Nutrient::Sodium => self.sodium,
        }
    }
}

/// An optimal combo: positive quantities only, plus the objective value and
/// the per-nutrient sums the quantities achieve.
#[derive(Debug, Clone, Serialize)]
pub struct ComboSolution {
    pub total_calories: f64,
    pub items: Vec<ComboItem>,
    pub totals: NutrientTotals,
}

impl ComboSolution {
    /// The empty combo: nothing ordered, zero calories.
    pub fn empty() -> Self {
        Self {
            total_calories: 0.0,
            items: Vec::new(),
            totals: NutrientTotals::default(),
        }
    }

    /// Build a solution from per-item quantities aligned with `menu`.
    /// Items with quantity 0 are dropped; menu order is preserved.
    pub fn from_quantities(menu: &[MenuItem], quantities: &[u32]) -> Self {
        let mut solution = Self::empty();

        for (item, &qty) in menu.iter().zip(quantities) {
            if qty == 0 {
                continue;
            }
            let q = qty as f64;
            solution.total_calories += item.calories * q;
            solution.totals.total_fat += item.total_fat * q;
            solution.totals.sat_fat += item.sat_fat * q;
            solution.totals.total_carb += item.total_carb * q;
            solution.totals.sugar += item.sugar * q;
            solution.totals.protein += item.protein * q;
            solution.totals.sodium += item.sodium * q;
            solution.items.push(ComboItem {
                name: item.name.clone(),
                quantity: qty,
            });
        }

        solution
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
