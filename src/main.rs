use clap::Parser;
use strsim::jaro_winkler;

use fastfood_combo_rs::catalog::load_catalog;
use fastfood_combo_rs::chart::render_bubble_chart;
use fastfood_combo_rs::cli::{Cli, Command, ComboArgs};
use fastfood_combo_rs::error::{ComboError, Result};
use fastfood_combo_rs::interface::{
    collect_bounds, display_combo, display_menu, display_no_solution, prompt_restaurant,
};
use fastfood_combo_rs::optimizer::solve_combo;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Combo(args) => cmd_combo(&cli.data, &args),
        Command::Restaurants => cmd_restaurants(&cli.data),
        Command::Menu { restaurant } => cmd_menu(&cli.data, &restaurant),
    }
}

/// Compute and present the minimum-calorie combo.
fn cmd_combo(data_path: &str, args: &ComboArgs) -> Result<()> {
    let catalog = load_catalog(data_path)?;
    let names = catalog.restaurants();

    if names.is_empty() {
        println!("No restaurants found in {}", data_path);
        return Ok(());
    }

    let restaurant = match &args.restaurant {
        Some(requested) => resolve_restaurant(&names, requested),
        None => prompt_restaurant(&names)?,
    };
    println!("You selected: {}", restaurant);

    let menu = catalog.menu(&restaurant);
    if menu.is_empty() {
        println!("No menu items for '{}'; planning over an empty menu.", restaurant);
    } else {
        println!("{} menu items loaded", menu.len());
    }

    let bounds = if args.interactive {
        collect_bounds()?
    } else {
        args.bounds()
    };
    bounds.validate()?;

    match solve_combo(&menu, &bounds) {
        Ok(solution) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&solution)?);
            } else {
                display_combo(&solution);
            }

            if !args.no_chart && !solution.is_empty() {
                let chart_path = args.chart.as_deref().unwrap_or("combo.svg");
                render_bubble_chart(&solution, chart_path)?;
                println!("Chart written to {}", chart_path);
            }
            Ok(())
        }
        // Infeasibility is an expected outcome of arbitrary limit
        // combinations; report it and render no chart.
        Err(ComboError::Infeasible) => {
            display_no_solution();
            Ok(())
        }
        Err(ComboError::Solver(msg)) => {
            eprintln!("Solver failure: {}", msg);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// List the restaurants in the data file.
fn cmd_restaurants(data_path: &str) -> Result<()> {
    let catalog = load_catalog(data_path)?;
    let names = catalog.restaurants();

    if names.is_empty() {
        println!("No restaurants found in {}", data_path);
        return Ok(());
    }

    println!("{} restaurants:", names.len());
    for name in names {
        println!("  {}", name);
    }
    Ok(())
}

/// Show one restaurant's menu.
fn cmd_menu(data_path: &str, restaurant: &str) -> Result<()> {
    let catalog = load_catalog(data_path)?;
    let resolved = resolve_restaurant(&catalog.restaurants(), restaurant);
    let menu = catalog.menu(&resolved);
    display_menu(&menu, &resolved);
    Ok(())
}

/// Match a requested restaurant name against the catalog: exact
/// (case-insensitive) first, then the best fuzzy match above 0.7. An
/// unmatched name is passed through unchanged, which yields an empty menu
/// downstream.
fn resolve_restaurant(names: &[String], requested: &str) -> String {
    if let Some(name) = names
        .iter()
        .find(|n| n.to_lowercase() == requested.to_lowercase())
    {
        return name.clone();
    }

    let best = names
        .iter()
        .map(|n| (n, jaro_winkler(&n.to_lowercase(), &requested.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match best {
        Some((name, _)) => {
            println!("Matched '{}' to '{}'", requested, name);
            name.clone()
        }
        None => {
            println!("No restaurant matching '{}'", requested);
            requested.to_string()
        }
    }
}
