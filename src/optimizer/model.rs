use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError,
    Solution, SolverModel, Variable,
};

use crate::error::{ComboError, Result};
use crate::models::{ComboSolution, ConstraintBounds, MenuItem, Nutrient};

/// Per-item quantity cap. Fixed design choice, not user-configurable.
pub const QUANTITY_MAX: f64 = 15.0;

/// Find the minimum-calorie combo for a menu under the given limits.
///
/// One integer decision variable per menu item, domain [0, QUANTITY_MAX];
/// objective minimizes total calories; one inequality per limit in
/// `bounds` (sodium's bound is applied pre-scaled to mg).
///
/// Infeasibility is a normal outcome and is reported as
/// `ComboError::Infeasible`; any other solver condition is reported as
/// `ComboError::Solver`, never as a zero-calorie solution.
pub fn solve_combo(menu: &[MenuItem], bounds: &ConstraintBounds) -> Result<ComboSolution> {
    if menu.is_empty() {
        return solve_empty_menu(bounds);
    }

    let mut vars = ProblemVariables::new();
    let quantities: Vec<Variable> = menu
        .iter()
        .map(|_| vars.add(variable().integer().min(0.0).max(QUANTITY_MAX)))
        .collect();

    let weighted_sum = |value: fn(&MenuItem) -> f64| -> Expression {
        menu.iter()
            .zip(&quantities)
            .map(|(item, &qty)| value(item) * qty)
            .sum()
    };

    let calories = weighted_sum(|i| i.calories);
    let total_fat = weighted_sum(|i| i.total_fat);
    let sat_fat = weighted_sum(|i| i.sat_fat);
    let total_carb = weighted_sum(|i| i.total_carb);
    let sugar = weighted_sum(|i| i.sugar);
    let protein = weighted_sum(|i| i.protein);
    let sodium = weighted_sum(|i| i.sodium);

    let solution = vars
        .minimise(calories)
        .using(default_solver)
        .with(constraint!(total_fat <= bounds.max_fat))
        .with(constraint!(sat_fat <= bounds.max_sat_fat))
        .with(constraint!(total_carb.clone() >= bounds.min_carb))
        .with(constraint!(total_carb <= bounds.max_carb))
        .with(constraint!(sugar.clone() >= bounds.min_sugar))
        .with(constraint!(sugar <= bounds.max_sugar))
        .with(constraint!(protein.clone() >= bounds.min_protein))
        .with(constraint!(protein <= bounds.max_protein))
        .with(constraint!(sodium <= bounds.scaled_max_sodium()))
        .solve()
        .map_err(|e| match e {
            ResolutionError::Infeasible => ComboError::Infeasible,
            other => ComboError::Solver(other.to_string()),
        })?;

    // Round the solver's float values back to the integer domain; totals
    // and the objective are recomputed from the rounded quantities so the
    // reported numbers stay consistent with each other.
    let chosen: Vec<u32> = quantities
        .iter()
        .map(|&qty| solution.value(qty).round().max(0.0) as u32)
        .collect();

    Ok(ComboSolution::from_quantities(menu, &chosen))
}

/// With no items every nutrient sum is vacuously zero, so feasibility is
/// exactly whether the all-zero assignment satisfies the bounds. The solver
/// is not invoked for a zero-variable model.
fn solve_empty_menu(bounds: &ConstraintBounds) -> Result<ComboSolution> {
    let lower_bound_violated =
        bounds.min_carb > 0.0 || bounds.min_sugar > 0.0 || bounds.min_protein > 0.0;
    let upper_bound_violated = bounds.max_fat < 0.0
        || bounds.max_sat_fat < 0.0
        || bounds.max_carb < 0.0
        || bounds.max_sugar < 0.0
        || bounds.max_protein < 0.0
        || bounds.scaled_max_sodium() < 0.0;

    if lower_bound_violated || upper_bound_violated {
        return Err(ComboError::Infeasible);
    }

    Ok(ComboSolution::empty())
}

/// Report whether a solution's totals satisfy the bounds within `eps`.
/// Used for post-solve sanity in tests and callers.
pub fn satisfies_bounds(solution: &ComboSolution, bounds: &ConstraintBounds, eps: f64) -> bool {
    let t = &solution.totals;
    t.get(Nutrient::TotalFat) <= bounds.max_fat + eps
        && t.get(Nutrient::SatFat) <= bounds.max_sat_fat + eps
        && t.get(Nutrient::TotalCarb) >= bounds.min_carb - eps
        && t.get(Nutrient::TotalCarb) <= bounds.max_carb + eps
        && t.get(Nutrient::Sugar) >= bounds.min_sugar - eps
        && t.get(Nutrient::Sugar) <= bounds.max_sugar + eps
        && t.get(Nutrient::Protein) >= bounds.min_protein - eps
        && t.get(Nutrient::Protein) <= bounds.max_protein + eps
        && t.get(Nutrient::Sodium) <= bounds.scaled_max_sodium() + eps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_min_bounds() -> ConstraintBounds {
        ConstraintBounds {
            max_fat: 100.0,
            max_sat_fat: 40.0,
            min_sugar: 0.0,
            max_sugar: 80.0,
            min_carb: 0.0,
            max_carb: 150.0,
            min_protein: 0.0,
            max_protein: 180.0,
            max_sodium: 100.0,
        }
    }

    #[test]
    fn test_empty_menu_all_zero_mins_is_feasible() {
        let solution = solve_combo(&[], &zero_min_bounds()).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.total_calories, 0.0);
    }

    #[test]
    fn test_empty_menu_positive_min_is_infeasible() {
        let bounds = ConstraintBounds {
            min_protein: 10.0,
            ..zero_min_bounds()
        };
        match solve_combo(&[], &bounds) {
            Err(ComboError::Infeasible) => {}
            other => panic!("expected Infeasible, got {:?}", other),
        }
    }
}
