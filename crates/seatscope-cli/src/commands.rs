//! Command handlers

use std::path::PathBuf;

use seatscope_app::{export, Config, Workbench};
use seatscope_domain::service::{FilterSpec, PackageInput};
use seatscope_domain::PartRecord;
use seatscope_types::{
    AnalysisMode, CostUtilityCoefficients, Error, Feature, Material, OutputFormat, Result,
    SeatPosition, WeightPreset,
};

use crate::cli::{Cli, Commands};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    let verbose = cli.verbose;

    match cli.command {
        Commands::Parts {
            brand,
            series,
            year,
            position,
            materials,
            features,
            min_price,
            max_price,
            plan,
            save_plan,
        } => cmd_parts(
            config,
            output_format,
            verbose,
            PartsArgs {
                brand,
                series,
                year,
                position,
                materials,
                features,
                min_price,
                max_price,
                plan,
                save_plan,
            },
        ),

        Commands::Options { brand } => cmd_options(&config, output_format, brand),

        Commands::Compare { ids, export } => {
            cmd_compare(&config, output_format, ids, export)
        }

        Commands::Analyze {
            mode,
            preset,
            w_price,
            w_feature,
            w_material,
            w_weight,
            alpha,
            beta,
            gamma,
            export,
        } => cmd_analyze(
            &config,
            output_format,
            AnalyzeArgs {
                mode,
                preset,
                w_price,
                w_feature,
                w_material,
                w_weight,
                alpha,
                beta,
                gamma,
                export,
            },
        ),

        Commands::Freight {
            part,
            length,
            width,
            height,
            weight,
            price,
        } => cmd_freight(&config, output_format, part, length, width, height, weight, price),

        Commands::Config {
            show,
            set_format,
            set_catalog,
            set_providers,
            set_preset,
            remove_plan,
            reset,
        } => cmd_config(
            show,
            set_format,
            set_catalog,
            set_providers,
            set_preset,
            remove_plan,
            reset,
        ),
    }
}

struct PartsArgs {
    brand: Option<String>,
    series: Option<String>,
    year: Option<u16>,
    position: Option<SeatPosition>,
    materials: Vec<Material>,
    features: Vec<Feature>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    plan: Option<String>,
    save_plan: Option<String>,
}

fn cmd_parts(
    mut config: Config,
    output_format: OutputFormat,
    verbose: bool,
    args: PartsArgs,
) -> Result<()> {
    let spec = match args.plan {
        Some(name) => config
            .plan(&name)
            .map(|p| p.spec.clone())
            .ok_or(Error::PlanNotFound(name))?,
        None => FilterSpec {
            brand: args.brand,
            series: args.series,
            year: args.year,
            position: args.position,
            materials: args.materials,
            features: args.features,
            min_price: args.min_price,
            max_price: args.max_price,
        },
    };

    if let Some(name) = args.save_plan {
        config.upsert_plan(&name, spec.clone());
        config.save()?;
        println!("Saved plan '{}': {}", name, spec.summary());
    }

    let mut bench = Workbench::from_config(&config)?;
    let results = bench.search_parts(&spec);

    if verbose {
        eprintln!(
            "{} of {} parts match: {}",
            results.len(),
            bench.catalog().len(),
            spec.summary()
        );
    }

    output::print_parts(output_format, &results)
}

fn cmd_options(config: &Config, output_format: OutputFormat, brand: Option<String>) -> Result<()> {
    let bench = Workbench::from_config(config)?;

    let brands = bench.brand_options();
    let series = bench.series_options(brand.as_deref());
    let years = bench.year_options();

    output::print_options(output_format, &brands, &series, &years, brand.as_deref())
}

fn cmd_compare(
    config: &Config,
    output_format: OutputFormat,
    ids: Vec<u32>,
    export_path: Option<PathBuf>,
) -> Result<()> {
    let mut bench = Workbench::from_config(config)?;

    for id in ids {
        match bench.add_to_compare(id) {
            Ok(()) => {}
            // Over-capacity and duplicate ids are skipped, not fatal
            Err(e @ Error::CapacityExceeded { .. }) | Err(e @ Error::DuplicateEntry { .. }) => {
                eprintln!("Warning: skipping part {}: {}", id, e);
            }
            Err(e) => return Err(e),
        }
    }

    let selection: Vec<PartRecord> = bench.selection().items().to_vec();
    let rows = bench.comparison_rows();
    output::print_comparison(output_format, &selection, &rows)?;

    if let Some(path) = export_path {
        export::export_comparison(&selection, &rows, &path)?;
        println!("Exported to: {}", path.display());
    }

    Ok(())
}

struct AnalyzeArgs {
    mode: AnalysisMode,
    preset: Option<WeightPreset>,
    w_price: Option<f64>,
    w_feature: Option<f64>,
    w_material: Option<f64>,
    w_weight: Option<f64>,
    alpha: Option<f64>,
    beta: Option<f64>,
    gamma: Option<f64>,
    export: Option<PathBuf>,
}

fn cmd_analyze(config: &Config, output_format: OutputFormat, args: AnalyzeArgs) -> Result<()> {
    let mut bench = Workbench::from_config(config)?;

    match args.mode {
        AnalysisMode::Comprehensive => {
            let mut weights = args.preset.unwrap_or(config.default_preset).weights();
            if let Some(v) = args.w_price {
                weights.price = v;
            }
            if let Some(v) = args.w_feature {
                weights.feature = v;
            }
            if let Some(v) = args.w_material {
                weights.material = v;
            }
            if let Some(v) = args.w_weight {
                weights.weight = v;
            }

            let scores = bench.analyze_comprehensive(&weights);
            output::print_comprehensive(output_format, &scores)?;

            if let Some(path) = args.export {
                export::export_comprehensive(&scores, &path)?;
                println!("Exported to: {}", path.display());
            }
        }
        AnalysisMode::CostUtility => {
            let mut coefficients = CostUtilityCoefficients::default();
            if let Some(v) = args.alpha {
                coefficients.alpha = v;
            }
            if let Some(v) = args.beta {
                coefficients.beta = v;
            }
            if let Some(v) = args.gamma {
                coefficients.gamma = v;
            }

            let scores = bench.analyze_cost_utility(&coefficients);
            output::print_cost_utility(output_format, &scores)?;

            if let Some(path) = args.export {
                export::export_cost_utility(&scores, &path)?;
                println!("Exported to: {}", path.display());
            }
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_freight(
    config: &Config,
    output_format: OutputFormat,
    part: Option<u32>,
    length: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    weight: Option<f64>,
    price: Option<f64>,
) -> Result<()> {
    let mut bench = Workbench::from_config(config)?;

    let estimate = match part {
        Some(id) => bench.estimate_for_part(id)?,
        None => {
            let package = PackageInput {
                length,
                width,
                height,
                actual_weight: weight,
            };
            bench.estimate(&package, price)?
        }
    };

    output::print_freight(output_format, &estimate)
}

fn cmd_config(
    show: bool,
    set_format: Option<OutputFormat>,
    set_catalog: Option<PathBuf>,
    set_providers: Option<PathBuf>,
    set_preset: Option<WeightPreset>,
    remove_plan: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_format {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_catalog {
        config.catalog_path = Some(path);
        modified = true;
    }

    if let Some(path) = set_providers {
        config.providers_path = Some(path);
        modified = true;
    }

    if let Some(preset) = set_preset {
        config.default_preset = preset;
        modified = true;
    }

    if let Some(name) = remove_plan {
        if config.remove_plan(&name) {
            modified = true;
        } else {
            return Err(Error::PlanNotFound(name));
        }
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
