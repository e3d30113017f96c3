use assert_float_eq::assert_float_absolute_eq;

use fastfood_combo_rs::error::ComboError;
use fastfood_combo_rs::models::{ConstraintBounds, MenuItem};
use fastfood_combo_rs::optimizer::{satisfies_bounds, solve_combo, QUANTITY_MAX};

fn burger() -> MenuItem {
    MenuItem {
        restaurant: "Testaurant".to_string(),
        name: "Burger".to_string(),
        calories: 300.0,
        total_fat: 10.0,
        sat_fat: 3.0,
        total_carb: 30.0,
        sugar: 5.0,
        protein: 15.0,
        sodium: 500.0,
    }
}

fn salad() -> MenuItem {
    MenuItem {
        restaurant: "Testaurant".to_string(),
        name: "Salad".to_string(),
        calories: 150.0,
        total_fat: 5.0,
        sat_fat: 1.0,
        total_carb: 10.0,
        sugar: 2.0,
        protein: 8.0,
        sodium: 200.0,
    }
}

fn scenario_bounds() -> ConstraintBounds {
    ConstraintBounds {
        max_fat: 20.0,
        max_sat_fat: 10.0,
        min_sugar: 0.0,
        max_sugar: 10.0,
        min_carb: 0.0,
        max_carb: 50.0,
        min_protein: 15.0,
        max_protein: 30.0,
        max_sodium: 1.0, // scaled to 1000 mg
    }
}

#[test]
fn test_burger_salad_scenario() {
    let menu = vec![burger(), salad()];
    let solution = solve_combo(&menu, &scenario_bounds()).unwrap();

    assert!(
        solution.total_calories <= 450.0,
        "expected <= 450 cal, got {}",
        solution.total_calories
    );
    assert!(solution.totals.protein >= 15.0 - 1e-6);
    assert!(solution.totals.protein <= 30.0 + 1e-6);
    assert!(satisfies_bounds(&solution, &scenario_bounds(), 1e-6));
    assert!(!solution.is_empty());

    // The optimal objective here is determinate (two salads or one burger
    // both reach the protein floor at 300 cal; nothing cheaper does).
    assert_float_absolute_eq!(solution.total_calories, 300.0, 1e-6);
}

#[test]
fn test_quantities_are_integers_in_domain() {
    let menu = vec![burger(), salad()];
    let solution = solve_combo(&menu, &scenario_bounds()).unwrap();

    for item in &solution.items {
        assert!(item.quantity >= 1);
        assert!(item.quantity as f64 <= QUANTITY_MAX);
    }
}

#[test]
fn test_contradictory_protein_bounds_are_infeasible() {
    let bounds = ConstraintBounds {
        min_protein: 100.0,
        max_protein: 50.0,
        ..scenario_bounds()
    };

    let menu = vec![burger(), salad()];
    assert!(matches!(
        solve_combo(&menu, &bounds),
        Err(ComboError::Infeasible)
    ));

    // Contradictory bounds are infeasible regardless of catalog contents.
    assert!(matches!(
        solve_combo(&[], &bounds),
        Err(ComboError::Infeasible)
    ));
}

#[test]
fn test_sodium_scaled_bound_forces_infeasibility() {
    // Protein min forces at least 500 mg sodium (burger) or 400 mg
    // (two salads); a scaled bound of 0.3 * 1000 = 300 mg is below both.
    let bounds = ConstraintBounds {
        max_sodium: 0.3,
        ..scenario_bounds()
    };

    let menu = vec![burger(), salad()];
    assert!(matches!(
        solve_combo(&menu, &bounds),
        Err(ComboError::Infeasible)
    ));
}

#[test]
fn test_zero_assignment_optimal_when_mins_are_zero() {
    let bounds = ConstraintBounds {
        min_protein: 0.0,
        ..scenario_bounds()
    };

    let menu = vec![burger(), salad()];
    let solution = solve_combo(&menu, &bounds).unwrap();

    // All coefficients are non-negative, so the all-zero assignment is
    // optimal once every lower bound is zero.
    assert_eq!(solution.total_calories, 0.0);
    assert!(solution.is_empty());
}

#[test]
fn test_idempotent_objective() {
    let menu = vec![burger(), salad()];
    let first = solve_combo(&menu, &scenario_bounds()).unwrap();
    let second = solve_combo(&menu, &scenario_bounds()).unwrap();

    assert_eq!(first.total_calories, second.total_calories);
}

#[test]
fn test_empty_catalog_with_zero_mins_is_feasible_and_empty() {
    let bounds = ConstraintBounds {
        min_protein: 0.0,
        min_carb: 0.0,
        min_sugar: 0.0,
        ..scenario_bounds()
    };

    let solution = solve_combo(&[], &bounds).unwrap();
    assert_eq!(solution.total_calories, 0.0);
    assert!(solution.is_empty());
}

#[test]
fn test_prefers_cheaper_calories() {
    // Two salads (300 cal, 16 g protein) beat one burger (300 cal, 15 g)
    // only on ties; with protein min at 8 a single salad (150 cal) wins.
    let bounds = ConstraintBounds {
        min_protein: 8.0,
        ..scenario_bounds()
    };

    let menu = vec![burger(), salad()];
    let solution = solve_combo(&menu, &bounds).unwrap();

    assert_float_absolute_eq!(solution.total_calories, 150.0, 1e-6);
}

#[test]
fn test_quantity_cap_limits_feasibility() {
    // Only the salad is orderable under a 6 g fat cap, and 15 of them top
    // out at 120 g protein; a min above that is unreachable.
    let bounds = ConstraintBounds {
        max_fat: 6.0 * 15.0,
        max_sat_fat: 15.0 * 1.0,
        min_sugar: 0.0,
        max_sugar: 2.0 * 15.0,
        min_carb: 0.0,
        max_carb: 10.0 * 15.0,
        min_protein: 121.0,
        max_protein: 186.0,
        max_sodium: 6.0,
    };

    let menu = vec![salad()];
    assert!(matches!(
        solve_combo(&menu, &bounds),
        Err(ComboError::Infeasible)
    ));
}
