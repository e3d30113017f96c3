use dialoguer::{Input, Select};

use crate::error::{ComboError, Result};
use crate::models::bounds::{
    CARB_RANGE, DEFAULT_MAX_CARB, DEFAULT_MAX_FAT, DEFAULT_MAX_PROTEIN, DEFAULT_MAX_SAT_FAT,
    DEFAULT_MAX_SODIUM, DEFAULT_MAX_SUGAR, DEFAULT_MIN_CARB, DEFAULT_MIN_PROTEIN,
    DEFAULT_MIN_SUGAR, MAX_FAT_RANGE, MAX_SAT_FAT_RANGE, MAX_SODIUM_RANGE, PROTEIN_RANGE,
    SUGAR_RANGE,
};
use crate::models::ConstraintBounds;

/// Index pre-selected in the restaurant picker.
const DEFAULT_RESTAURANT_INDEX: usize = 6;

/// Pick a restaurant from the catalog's list.
pub fn prompt_restaurant(names: &[String]) -> Result<String> {
    if names.is_empty() {
        return Err(ComboError::InvalidInput(
            "no restaurants to choose from".to_string(),
        ));
    }

    let default = DEFAULT_RESTAURANT_INDEX.min(names.len() - 1);
    let selection = Select::new()
        .with_prompt("Please choose your restaurant")
        .items(names)
        .default(default)
        .interact()?;

    Ok(names[selection].clone())
}

/// Prompt for one nutrient limit, enforcing its control range.
pub fn prompt_limit(label: &str, (lo, hi): (f64, f64), default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{} [{:.0}-{:.0}]", label, lo, hi))
        .default(format!("{}", default))
        .interact_text()?;

    let value: f64 = input
        .parse()
        .map_err(|_| ComboError::InvalidInput("Invalid number".to_string()))?;

    if !(lo..=hi).contains(&value) {
        return Err(ComboError::InvalidInput(format!(
            "{} must be between {} and {}",
            label, lo, hi
        )));
    }

    Ok(value)
}

/// Collect every limit for the combo, one prompt per control.
pub fn collect_bounds() -> Result<ConstraintBounds> {
    println!("Limits for Combo");

    let max_fat = prompt_limit("Max Fat", MAX_FAT_RANGE, DEFAULT_MAX_FAT)?;
    let max_sat_fat = prompt_limit("Max Sat Fat", MAX_SAT_FAT_RANGE, DEFAULT_MAX_SAT_FAT)?;
    let min_sugar = prompt_limit("Sugar Min", SUGAR_RANGE, DEFAULT_MIN_SUGAR)?;
    let max_sugar = prompt_limit("Sugar Max", SUGAR_RANGE, DEFAULT_MAX_SUGAR)?;
    let min_carb = prompt_limit("Total Carb Min", CARB_RANGE, DEFAULT_MIN_CARB)?;
    let max_carb = prompt_limit("Total Carb Max", CARB_RANGE, DEFAULT_MAX_CARB)?;
    let min_protein = prompt_limit("Protein Min", PROTEIN_RANGE, DEFAULT_MIN_PROTEIN)?;
    let max_protein = prompt_limit("Protein Max", PROTEIN_RANGE, DEFAULT_MAX_PROTEIN)?;
    let max_sodium = prompt_limit("Sodium Max", MAX_SODIUM_RANGE, DEFAULT_MAX_SODIUM)?;

    Ok(ConstraintBounds {
        max_fat,
        max_sat_fat,
        min_sugar,
        max_sugar,
        min_carb,
        max_carb,
        min_protein,
        max_protein,
        max_sodium,
    })
}
