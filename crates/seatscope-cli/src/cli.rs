//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use seatscope_types::{AnalysisMode, Feature, Material, OutputFormat, SeatPosition, WeightPreset};

#[derive(Parser)]
#[command(name = "seatscope")]
#[command(version)]
#[command(about = "Seat part catalog analytics: filter, compare, rank and estimate freight")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query the part catalog
    Parts {
        /// Filter by brand
        #[arg(long)]
        brand: Option<String>,

        /// Filter by series
        #[arg(long)]
        series: Option<String>,

        /// Filter by model year
        #[arg(long)]
        year: Option<u16>,

        /// Filter by seat position
        #[arg(long)]
        position: Option<SeatPosition>,

        /// Match any of these materials (repeatable)
        #[arg(long = "material")]
        materials: Vec<Material>,

        /// Require all of these features (repeatable)
        #[arg(long = "feature")]
        features: Vec<Feature>,

        /// Inclusive lower price bound
        #[arg(long)]
        min_price: Option<f64>,

        /// Inclusive upper price bound
        #[arg(long)]
        max_price: Option<f64>,

        /// Run a saved filter plan instead of the flags above
        #[arg(long)]
        plan: Option<String>,

        /// Save the filter flags as a named plan for reuse
        #[arg(long)]
        save_plan: Option<String>,
    },

    /// Show available filter options (brands, series, years)
    Options {
        /// Restrict series options to one brand
        #[arg(long)]
        brand: Option<String>,
    },

    /// Compare up to 5 parts side by side
    Compare {
        /// Part ids to compare
        #[arg(required = true)]
        ids: Vec<u32>,

        /// Export the comparison to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Rank the competitor set
    Analyze {
        /// Analysis mode
        #[arg(long, short = 'm', default_value = "comprehensive")]
        mode: AnalysisMode,

        /// Weight preset for comprehensive mode. Uses config value if
        /// not specified.
        #[arg(long, short = 'p')]
        preset: Option<WeightPreset>,

        /// Override the price weight
        #[arg(long)]
        w_price: Option<f64>,

        /// Override the feature weight
        #[arg(long)]
        w_feature: Option<f64>,

        /// Override the material weight
        #[arg(long)]
        w_material: Option<f64>,

        /// Override the weight-metric weight
        #[arg(long)]
        w_weight: Option<f64>,

        /// Cost-utility feature coefficient
        #[arg(long)]
        alpha: Option<f64>,

        /// Cost-utility material coefficient
        #[arg(long)]
        beta: Option<f64>,

        /// Cost-utility logistics coefficient
        #[arg(long)]
        gamma: Option<f64>,

        /// Export the ranking to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Estimate freight for a part or an arbitrary package
    Freight {
        /// Catalog part id; its dimensions, weight and price are used
        #[arg(long)]
        part: Option<u32>,

        /// Package length in cm
        #[arg(long, short = 'l')]
        length: Option<f64>,

        /// Package width in cm
        #[arg(long, short = 'w')]
        width: Option<f64>,

        /// Package height in cm
        #[arg(long, short = 'H')]
        height: Option<f64>,

        /// Actual weight in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Reference price for the cost ratio
        #[arg(long)]
        price: Option<f64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set part catalog CSV path
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set provider rate TOML path
        #[arg(long)]
        set_providers: Option<PathBuf>,

        /// Set default weight preset
        #[arg(long)]
        set_preset: Option<WeightPreset>,

        /// Delete a saved filter plan
        #[arg(long)]
        remove_plan: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
