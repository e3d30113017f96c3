use clap::{Args, Parser, Subcommand};

use crate::models::bounds::{
    DEFAULT_MAX_CARB, DEFAULT_MAX_FAT, DEFAULT_MAX_PROTEIN, DEFAULT_MAX_SAT_FAT,
    DEFAULT_MAX_SODIUM, DEFAULT_MAX_SUGAR, DEFAULT_MIN_CARB, DEFAULT_MIN_PROTEIN,
    DEFAULT_MIN_SUGAR,
};
use crate::models::ConstraintBounds;

/// FastfoodCombo — finds the minimum-calorie fast-food order satisfying nutrient limits.
#[derive(Parser, Debug)]
#[command(name = "fastfood_combo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the fast-food nutrition CSV file.
    #[arg(short, long, default_value = "fastfood.csv")]
    pub data: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the minimum-calorie combo under the nutrient limits.
    Combo(ComboArgs),

    /// List the restaurants present in the data file.
    Restaurants,

    /// Show the menu for one restaurant.
    Menu {
        /// Restaurant name (fuzzy-matched).
        restaurant: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Combo(ComboArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct ComboArgs {
    /// Restaurant to order from (prompts if omitted).
    #[arg(short, long)]
    pub restaurant: Option<String>,

    /// Prompt for every limit instead of using flags and defaults.
    #[arg(short, long)]
    pub interactive: bool,

    /// Max total fat (g).
    #[arg(long)]
    pub max_fat: Option<f64>,

    /// Max saturated fat (g).
    #[arg(long)]
    pub max_sat_fat: Option<f64>,

    /// Min sugar (g).
    #[arg(long)]
    pub min_sugar: Option<f64>,

    /// Max sugar (g).
    #[arg(long)]
    pub max_sugar: Option<f64>,

    /// Min total carb (g).
    #[arg(long)]
    pub min_carb: Option<f64>,

    /// Max total carb (g).
    #[arg(long)]
    pub max_carb: Option<f64>,

    /// Min protein (g).
    #[arg(long)]
    pub min_protein: Option<f64>,

    /// Max protein (g).
    #[arg(long)]
    pub max_protein: Option<f64>,

    /// Max sodium (scaled by 1000 to mg before use).
    #[arg(long)]
    pub max_sodium: Option<f64>,

    /// Where to write the bubble chart SVG.
    #[arg(long)]
    pub chart: Option<String>,

    /// Skip writing the chart file.
    #[arg(long)]
    pub no_chart: bool,

    /// Print the solution as JSON instead of the table.
    #[arg(long)]
    pub json: bool,
}

impl ComboArgs {
    /// Resolve flags into bounds, filling unset limits with the control
    /// defaults.
    pub fn bounds(&self) -> ConstraintBounds {
        ConstraintBounds {
            max_fat: self.max_fat.unwrap_or(DEFAULT_MAX_FAT),
            max_sat_fat: self.max_sat_fat.unwrap_or(DEFAULT_MAX_SAT_FAT),
            min_sugar: self.min_sugar.unwrap_or(DEFAULT_MIN_SUGAR),
            max_sugar: self.max_sugar.unwrap_or(DEFAULT_MAX_SUGAR),
            min_carb: self.min_carb.unwrap_or(DEFAULT_MIN_CARB),
            max_carb: self.max_carb.unwrap_or(DEFAULT_MAX_CARB),
            min_protein: self.min_protein.unwrap_or(DEFAULT_MIN_PROTEIN),
            max_protein: self.max_protein.unwrap_or(DEFAULT_MAX_PROTEIN),
            max_sodium: self.max_sodium.unwrap_or(DEFAULT_MAX_SODIUM),
        }
    }
}
