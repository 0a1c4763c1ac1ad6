/// CLI argument definitions for the `sw` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sizewise::{CategoryId, FitPreference, Unit};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "sw", version, about = "Garment size recommendation")]
pub struct Cli {
    /// Log pipeline stages to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments of `sw recommend`.
#[derive(Args)]
pub struct RecommendArgs {
    /// Body measurements: a JSON file, or an inline JSON object
    #[arg(long)]
    pub body: String,

    /// Garment size chart JSON file
    #[arg(long)]
    pub chart: PathBuf,

    /// Brand size chart JSON file, used instead of --chart when it has sizes
    #[arg(long)]
    pub brand_chart: Option<PathBuf>,

    /// Garment category: upper_body, lower_body, dress, or a DeepFashion2 id (1-13)
    #[arg(long)]
    pub category: CategoryId,

    /// Fit preference: regular or tight (default: regular)
    #[arg(long, default_value = "regular")]
    pub fit: FitPreference,

    /// User height in centimeters (overrides a `height` key in the body)
    #[arg(long)]
    pub height: Option<f64>,

    /// Unit of the body measurements: cm or inch (default: cm)
    #[arg(long, default_value = "cm")]
    pub unit: Unit,

    /// Include the full decision trace
    #[arg(long)]
    pub debug: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Engine configuration TOML file (default: built-in configuration)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Recommend one size from a body measurement set and a size chart
    #[command(long_about = "\
Recommend one size (XS..XXL) from a body measurement set and a size chart.

Pipeline:
  1. Normalize   convert to cm, resolve chart_type (garment | body)
  2. Category    keep or switch the category by body-metric overlap
  3. Score       weighted |garment - body| per metric, lower is better
                 critical metrics weigh twice secondary ones,
                 missing metrics add a fixed penalty
  4. Select      lowest total wins, ties go to the larger size
  5. Guardrail   height >= 183 cm -> at least L, >= 190 cm -> at least XL
                 (advisory only with --fit tight)
  6. Confidence  1 - total/100, x0.8 per missing critical metric,
                 x0.85 when the guardrail overrode the scorer

Body JSON is an object of measurement name to number, e.g.
  {\"chest\": 100, \"waist\": 85, \"height\": 185}

Chart JSON carries a `sizes` array, `scale_cm` / `scale_in` tables,
or a legacy `scale` table with a chart-level `unit`.

Every result carries reason codes explaining the pick. Use --debug for
the per-size score table and guardrail trace.")]
    Recommend(RecommendArgs),

    /// List category profiles with their metrics, weights and ease
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the engine configuration as TOML
    Config {
        /// Validate and print this file instead of the defaults
        path: Option<PathBuf>,
    },
}
