use crate::models::{ComboSolution, MenuItem, Nutrient};

/// Display a solved combo in a formatted table.
pub fn display_combo(solution: &ComboSolution) {
    println!();
    println!("Total calories: {:.0}", solution.total_calories);

    if solution.is_empty() {
        println!("Nothing to order: the empty combo already satisfies the limits.");
        return;
    }

    println!();
    println!("=== McHealthy Combo ===");
    println!();

    let max_name_len = solution
        .items
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    for item in &solution.items {
        println!(
            "  {:<width$}  x {:>2}",
            item.name,
            item.quantity,
            width = max_name_len
        );
    }

    println!();
    println!("--- Nutrient totals ---");
    for nutrient in Nutrient::ALL {
        println!(
            "{}: {:.1} {}",
            nutrient.label(),
            solution.totals.get(nutrient),
            nutrient.unit()
        );
    }
    println!();
}

/// Message shown when no quantity assignment satisfies the limits.
/// No chart is rendered on this path.
pub fn display_no_solution() {
    println!();
    println!("No solution found: no combination of menu items satisfies the limits.");
    println!("Try loosening a limit and running again.");
}

/// Display a restaurant's menu items with their nutrient values.
pub fn display_menu(items: &[MenuItem], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    for item in items {
        println!(
            "  {} - {} cal, fat:{} satfat:{} carb:{} sugar:{} protein:{} sodium:{}",
            item.name,
            item.calories,
            item.total_fat,
            item.sat_fat,
            item.total_carb,
            item.sugar,
            item.protein,
            item.sodium
        );
    }

    println!();
}
