use serde::{Deserialize, Serialize};

/// A single menu item row from the nutrition CSV.
///
/// Units: calories in kcal, sodium in mg, everything else in grams.
/// Extra CSV columns are ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub restaurant: String,

    #[serde(rename = "item")]
    pub name: String,

    pub calories: f64,
    pub total_fat: f64,
    pub sat_fat: f64,
    pub total_carb: f64,
    pub sugar: f64,
    pub protein: f64,
    pub sodium: f64,
}

impl MenuItem {
    /// Basic validation: all nutrient values non-negative.
    pub fn is_valid(&self) -> bool {
        Nutrient::ALL.iter().all(|n| n.value_in(self) >= 0.0) && self.calories >= 0.0
    }
}

/// The six nutrients with user-adjustable limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    TotalFat,
    SatFat,
    TotalCarb,
    Sugar,
    Protein,
    Sodium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 6] = [
        Nutrient::TotalFat,
        Nutrient::SatFat,
        Nutrient::TotalCarb,
        Nutrient::Sugar,
        Nutrient::Protein,
        Nutrient::Sodium,
    ];

    /// This nutrient's value for a given item.
    pub fn value_in(&self, item: &MenuItem) -> f64 {
        match self {
            Nutrient::TotalFat => item.total_fat,
            Nutrient::SatFat => item.sat_fat,
            Nutrient::TotalCarb => item.total_carb,
            Nutrient::Sugar => item.sugar,
            Nutrient::Protein => item.protein,
            Nutrient::Sodium => item.sodium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::TotalFat => "Total fat",
            Nutrient::SatFat => "Saturated fat",
            Nutrient::TotalCarb => "Total carb",
            Nutrient::Sugar => "Sugar",
            Nutrient::Protein => "Protein",
            Nutrient::Sodium => "Sodium",
        }
    }

    /// Display unit (sodium is tracked in mg, the rest in g).
    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Sodium => "mg",
            _ => "g",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> MenuItem {
        MenuItem {
            restaurant: "Mcdonalds".to_string(),
            name: "Hamburger".to_string(),
            calories: 250.0,
            total_fat: 9.0,
            sat_fat: 3.5,
            total_carb: 31.0,
            sugar: 6.0,
            protein: 13.0,
            sodium: 480.0,
        }
    }

    #[test]
    fn test_nutrient_accessors() {
        let item = sample_item();
        assert_eq!(Nutrient::TotalFat.value_in(&item), 9.0);
        assert_eq!(Nutrient::SatFat.value_in(&item), 3.5);
        assert_eq!(Nutrient::TotalCarb.value_in(&item), 31.0);
        assert_eq!(Nutrient::Sugar.value_in(&item), 6.0);
        assert_eq!(Nutrient::Protein.value_in(&item), 13.0);
        assert_eq!(Nutrient::Sodium.value_in(&item), 480.0);
    }

    #[test]
    fn test_is_valid() {
        let item = sample_item();
        assert!(item.is_valid());

        let mut invalid = sample_item();
        invalid.protein = -1.0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_sodium_unit() {
        assert_eq!(Nutrient::Sodium.unit(), "mg");
        assert_eq!(Nutrient::Protein.unit(), "g");
    }
}
