use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueHint};
use torquey_core::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser, Debug)]
#[command(author, version, about = "Torque, power and road-speed curves from dyno data", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a car file and print its torque, power and speed curves
    Curves(CurvesArgs),
    /// Import a car file and write it back in canonical form
    Normalize(NormalizeArgs),
    /// Show rolling diameter and circumference for a tire size code
    Tire {
        /// Size code, e.g. 225/45R17
        code: String,
    },
    /// List the cars in a library file
    Library(LibraryArgs),
}

#[derive(Parser, Debug)]
struct CurvesArgs {
    /// Car JSON file
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Settings file with default units and filtering
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Unit standard: imperial, metric, metric-ps, si or custom
    #[arg(long)]
    standard: Option<UnitStandard>,

    /// Torque unit the data was entered in (lbft, nm)
    #[arg(long)]
    torque_unit: Option<TorqueUnit>,

    /// Power unit to report (kw, hp, ps)
    #[arg(long)]
    power_unit: Option<PowerUnit>,

    /// Speed unit to report (mph, kmh, ms)
    #[arg(long)]
    speed_unit: Option<SpeedUnit>,

    /// Skip samples with zero torque
    #[arg(long)]
    strict_torque: bool,
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Car JSON file
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output path (`-` for stdout, defaults to a name derived from the car)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LibraryArgs {
    /// Library JSON file
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Only list cars in this category
    #[arg(long)]
    category: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Curves(args) => run_curves(args),
        Command::Normalize(args) => run_normalize(args),
        Command::Tire { code } => run_tire(&code),
        Command::Library(args) => run_library(args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn import_car(path: &Path) -> Result<ImportedCar> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let car = parse_car_json(&text)
        .with_context(|| format!("Failed to import {}", path.display()))?;
    info!("Imported '{}' from {}", car.name, path.display());
    Ok(car)
}

/// Settings from `--config` (or defaults) with command line overrides applied
fn curve_options(args: &CurvesArgs) -> Result<CurveOptions> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if let Some(standard) = args.standard {
        settings.units.select_standard(standard);
    }
    if let Some(unit) = args.torque_unit {
        settings.units.set_torque_unit(unit);
    }
    if let Some(unit) = args.power_unit {
        settings.units.set_power_unit(unit);
    }
    if let Some(unit) = args.speed_unit {
        settings.units.set_speed_unit(unit);
    }
    if args.strict_torque {
        settings.torque_threshold = TorqueThreshold::Positive;
    }

    debug!("Curve settings: {:?}", settings);
    Ok(settings.curve_options())
}

fn run_curves(args: CurvesArgs) -> Result<()> {
    let options = curve_options(&args)?;
    let dataset = DataSet::from_imported(0, import_car(&args.input)?);

    let mut text = String::new();
    report::write_rpm_table(&mut text, &rpm_curves(&dataset, &options), &options)?;

    let speed = speed_curves(&dataset, &options);
    if speed.is_empty() {
        text.push_str("\nNo speed curves: final drive ratio and wheel size are both required.\n");
    }
    for curves in &speed {
        text.push('\n');
        report::write_speed_table(&mut text, curves, &options)?;
    }

    io::stdout().lock().write_all(text.as_bytes())?;
    Ok(())
}

fn run_normalize(args: NormalizeArgs) -> Result<()> {
    let dataset = DataSet::from_imported(0, import_car(&args.input)?);
    let json = export_car_to_json(&dataset).context("Failed to serialize car")?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(export_file_name(&dataset.name)));
    if output.as_os_str() == "-" {
        writeln!(io::stdout().lock(), "{}", json)?;
    } else {
        fs::write(&output, json)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Wrote {}", output.display());
    }
    Ok(())
}

fn run_tire(code: &str) -> Result<()> {
    let size: TireSize = code.parse()?;
    println!("{}", report::tire_summary(&size));
    Ok(())
}

fn run_library(args: LibraryArgs) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let library = CarLibrary::from_json(&text)
        .with_context(|| format!("Failed to load library {}", args.input.display()))?;

    let mut text = String::new();
    report::write_library_listing(&mut text, &library, args.category.as_deref())?;
    io::stdout().lock().write_all(text.as_bytes())?;
    Ok(())
}
