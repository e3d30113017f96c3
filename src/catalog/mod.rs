use std::collections::HashMap;
use std::path::Path;

use crate::error::{ComboError, Result};
use crate::models::MenuItem;

/// Columns the nutrition CSV must carry. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 9] = [
    "restaurant",
    "item",
    "calories",
    "total_fat",
    "sat_fat",
    "total_carb",
    "sugar",
    "protein",
    "sodium",
];

/// Row-ordered index over the nutrition data for every restaurant.
///
/// Rebuilt fresh from the CSV on every run; holds no other state.
pub struct NutrientCatalog {
    items: Vec<MenuItem>,
}

impl NutrientCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Distinct restaurant names in first-appearance order.
    pub fn restaurants(&self) -> Vec<String> {
        let mut seen: HashMap<&str, ()> = HashMap::new();
        let mut names = Vec::new();
        for item in &self.items {
            if seen.insert(&item.restaurant, ()).is_none() {
                names.push(item.restaurant.clone());
            }
        }
        names
    }

    /// The menu for one restaurant, in row order.
    ///
    /// Duplicate item names collapse to a single entry: the first
    /// occurrence's position is kept, the last occurrence's values win.
    /// An unknown restaurant yields an empty menu, not an error.
    pub fn menu(&self, restaurant: &str) -> Vec<MenuItem> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut menu: Vec<MenuItem> = Vec::new();

        for item in self.items.iter().filter(|i| i.restaurant == restaurant) {
            match positions.get(&item.name) {
                Some(&pos) => menu[pos] = item.clone(),
                None => {
                    positions.insert(item.name.clone(), menu.len());
                    menu.push(item.clone());
                }
            }
        }

        menu
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load the nutrition CSV into a catalog.
///
/// A missing file, missing required columns, or an unparseable row is a
/// fatal data-load error.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<NutrientCatalog> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ComboError::DataLoad(format!(
            "nutrition data file not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(ComboError::DataLoad(format!(
            "missing required columns: {}",
            missing.join(", ")
        )));
    }

    let mut items = Vec::new();
    for (row, record) in reader.deserialize::<MenuItem>().enumerate() {
        let item = record.map_err(|e| {
            ComboError::DataLoad(format!("bad row {}: {}", row + 2, e))
        })?;
        items.push(item);
    }

    Ok(NutrientCatalog::new(items))
}
