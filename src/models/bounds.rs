use serde::Serialize;

use crate::error::{ComboError, Result};

/// Sodium's limit is entered in the control's coarse unit and multiplied by
/// 1000 before it is applied as the mg constraint bound. A unit-convention
/// artifact; no other nutrient bound is scaled.
pub const SODIUM_SCALE: f64 = 1000.0;

// Documented control ranges (inclusive).
pub const MAX_FAT_RANGE: (f64, f64) = (0.0, 141.0);
pub const MAX_SAT_FAT_RANGE: (f64, f64) = (0.0, 47.0);
pub const SUGAR_RANGE: (f64, f64) = (0.0, 87.0);
pub const CARB_RANGE: (f64, f64) = (0.0, 156.0);
pub const PROTEIN_RANGE: (f64, f64) = (1.0, 186.0);
pub const MAX_SODIUM_RANGE: (f64, f64) = (15.0, 6080.0);

// Control defaults.
pub const DEFAULT_MAX_FAT: f64 = 5.0;
pub const DEFAULT_MAX_SAT_FAT: f64 = 3.0;
pub const DEFAULT_MIN_SUGAR: f64 = 0.0;
pub const DEFAULT_MAX_SUGAR: f64 = 5.0;
pub const DEFAULT_MIN_CARB: f64 = 0.0;
pub const DEFAULT_MAX_CARB: f64 = 10.0;
pub const DEFAULT_MIN_PROTEIN: f64 = 18.0;
pub const DEFAULT_MAX_PROTEIN: f64 = 43.0;
pub const DEFAULT_MAX_SODIUM: f64 = 503.0;

/// User-supplied nutrient limits for a combo.
///
/// Restaurant-independent. A min greater than its paired max is not rejected
/// here: it flows to the optimizer and surfaces as infeasibility, the same
/// path as any other unsatisfiable limit combination.
#[derive(Debug, Clone, Serialize)]
pub struct ConstraintBounds {
    pub max_fat: f64,
    pub max_sat_fat: f64,
    pub min_sugar: f64,
    pub max_sugar: f64,
    pub min_carb: f64,
    pub max_carb: f64,
    pub min_protein: f64,
    pub max_protein: f64,
    pub max_sodium: f64,
}

impl Default for ConstraintBounds {
    fn default() -> Self {
        Self {
            max_fat: DEFAULT_MAX_FAT,
            max_sat_fat: DEFAULT_MAX_SAT_FAT,
            min_sugar: DEFAULT_MIN_SUGAR,
            max_sugar: DEFAULT_MAX_SUGAR,
            min_carb: DEFAULT_MIN_CARB,
            max_carb: DEFAULT_MAX_CARB,
            min_protein: DEFAULT_MIN_PROTEIN,
            max_protein: DEFAULT_MAX_PROTEIN,
            max_sodium: DEFAULT_MAX_SODIUM,
        }
    }
}

impl ConstraintBounds {
    /// The sodium bound in mg, as applied to the constraint.
    pub fn scaled_max_sodium(&self) -> f64 {
        self.max_sodium * SODIUM_SCALE
    }

    /// Check every value against its documented control range.
    pub fn validate(&self) -> Result<()> {
        check_range("max fat", self.max_fat, MAX_FAT_RANGE)?;
        check_range("max saturated fat", self.max_sat_fat, MAX_SAT_FAT_RANGE)?;
        check_range("min sugar", self.min_sugar, SUGAR_RANGE)?;
        check_range("max sugar", self.max_sugar, SUGAR_RANGE)?;
        check_range("min carb", self.min_carb, CARB_RANGE)?;
        check_range("max carb", self.max_carb, CARB_RANGE)?;
        check_range("min protein", self.min_protein, PROTEIN_RANGE)?;
        check_range("max protein", self.max_protein, PROTEIN_RANGE)?;
        check_range("max sodium", self.max_sodium, MAX_SODIUM_RANGE)?;
        Ok(())
    }
}

fn check_range(label: &str, value: f64, (lo, hi): (f64, f64)) -> Result<()> {
    if !(lo..=hi).contains(&value) {
        return Err(ComboError::InvalidInput(format!(
            "{} must be between {} and {}, got {}",
            label, lo, hi, value
        )));
    }
    Ok(())
}
