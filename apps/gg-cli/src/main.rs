use clap::{Parser, Subcommand, ValueEnum};
use gg_conduction::{DEFAULT_SWEEP_POINTS, ExecutionMode, RangePolicy, SweepResult};
use gg_gases::{GasProperties, filter_catalog};
use gg_scenario::{
    PressureSweepDef, Scenario, ScenarioReport, ScenarioResult, SeparationSweepDef, load_yaml,
    run_scenario, save_yaml, sweep_to_csv, to_json,
};
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gasgap")]
#[command(
    about = "Gas-gap heat transfer from continuum to free-molecular conduction",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

/// Operating point and evaluation options shared by the sweep commands.
#[derive(clap::Args)]
struct CommonArgs {
    /// Gas name or formula (e.g. "Air", "Carbon dioxide", "He")
    #[arg(long, default_value = "Air")]
    gas: String,
    /// Surface 1 temperature [K]
    #[arg(long, default_value_t = 293.0)]
    t1: f64,
    /// Surface 2 temperature [K]
    #[arg(long, default_value_t = 292.0)]
    t2: f64,
    /// Number of log-spaced samples
    #[arg(long, default_value_t = DEFAULT_SWEEP_POINTS)]
    points: usize,
    /// Fail instead of extrapolating outside the conductivity fit range
    #[arg(long)]
    strict: bool,
    /// Evaluate samples on all cores
    #[arg(long)]
    parallel: bool,
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,
    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CommonArgs {
    fn scenario(&self) -> Scenario {
        Scenario {
            gas: self.gas.clone(),
            surface_temp_1_k: self.t1,
            surface_temp_2_k: self.t2,
            range_policy: if self.strict {
                RangePolicy::Strict
            } else {
                RangePolicy::Extrapolate
            },
            execution: if self.parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Serial
            },
            separation_sweep: None,
            pressure_sweep: None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the gas catalog
    Gases {
        /// Only show gases whose name or formula contains this text
        query: Option<String>,
    },
    /// Show the constants of one gas and its conductivity at the average temperature
    Show {
        gas: String,
        #[arg(long, default_value_t = 293.0)]
        t1: f64,
        #[arg(long, default_value_t = 292.0)]
        t2: f64,
    },
    /// Sweep the wall separation at a fixed pressure
    Separation {
        #[command(flatten)]
        common: CommonArgs,
        /// Gas pressure [Pa]
        #[arg(long, default_value_t = 5.0)]
        pressure: f64,
        /// log10 of the smallest separation [m]
        #[arg(long, default_value_t = -6, allow_hyphen_values = true)]
        log_min: i32,
        /// log10 of the largest separation [m]
        #[arg(long, default_value_t = -3, allow_hyphen_values = true)]
        log_max: i32,
    },
    /// Sweep the gas pressure at a fixed wall separation
    Pressure {
        #[command(flatten)]
        common: CommonArgs,
        /// Wall separation [m]
        #[arg(long, default_value_t = 1e-6)]
        separation: f64,
        /// log10 of the smallest pressure [Pa]
        #[arg(long, default_value_t = -2, allow_hyphen_values = true)]
        log_min: i32,
        /// log10 of the largest pressure [Pa]
        #[arg(long, default_value_t = 6, allow_hyphen_values = true)]
        log_max: i32,
    },
    /// Run a scenario file
    Run {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Directory for separation.csv / pressure.csv, or report.json with --format json
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,
    },
    /// Write the default scenario to a file
    Init {
        /// Path of the scenario YAML file to create
        scenario_path: PathBuf,
    },
}

fn main() -> ScenarioResult<()> {
    // Logs go to stderr so sweep output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = dispatch(cli.command);
    if let Err(err) = &result {
        error!(%err, "command failed");
    }
    result
}

fn dispatch(command: Commands) -> ScenarioResult<()> {
    debug!(command = command.name(), "starting");
    match command {
        Commands::Gases { query } => cmd_gases(query.as_deref().unwrap_or("")),
        Commands::Show { gas, t1, t2 } => cmd_show(&gas, t1, t2),
        Commands::Separation {
            common,
            pressure,
            log_min,
            log_max,
        } => {
            let scenario = Scenario {
                separation_sweep: Some(SeparationSweepDef {
                    pressure_pa: pressure,
                    log_min,
                    log_max,
                    points: common.points,
                }),
                ..common.scenario()
            };
            let report = run_scenario(&scenario)?;
            emit_sweep(
                report.separation.as_ref(),
                common.format,
                common.output.as_deref(),
            )
        }
        Commands::Pressure {
            common,
            separation,
            log_min,
            log_max,
        } => {
            let scenario = Scenario {
                pressure_sweep: Some(PressureSweepDef {
                    separation_m: separation,
                    log_min,
                    log_max,
                    points: common.points,
                }),
                ..common.scenario()
            };
            let report = run_scenario(&scenario)?;
            emit_sweep(report.pressure.as_ref(), common.format, common.output.as_deref())
        }
        Commands::Run {
            scenario_path,
            output_dir,
            format,
        } => cmd_run(&scenario_path, output_dir.as_deref(), format),
        Commands::Init { scenario_path } => {
            save_yaml(&scenario_path, &Scenario::default())?;
            println!("✓ Wrote default scenario to {}", scenario_path.display());
            Ok(())
        }
    }
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Gases { .. } => "gases",
            Self::Show { .. } => "show",
            Self::Separation { .. } => "separation",
            Self::Pressure { .. } => "pressure",
            Self::Run { .. } => "run",
            Self::Init { .. } => "init",
        }
    }
}

fn cmd_gases(query: &str) -> ScenarioResult<()> {
    let entries = filter_catalog(query);
    if entries.is_empty() {
        println!("No gases match '{}'", query);
        return Ok(());
    }
    println!(
        "{:<16} {:>10} {:>7} {:>6} {:>12}",
        "gas", "M [kg/mol]", "gamma", "alpha", "T fit [K]"
    );
    for props in entries {
        println!(
            "{:<16} {:>10} {:>7} {:>6} {:>5}-{:<6}",
            props.name,
            props.molar_mass_kg_mol,
            props.gamma,
            props.alpha,
            props.t_min_k,
            props.t_max_k
        );
    }
    Ok(())
}

fn cmd_show(name: &str, t1: f64, t2: f64) -> ScenarioResult<()> {
    let gas = gg_gases::lookup(name)?;
    let temps = gg_conduction::SurfaceTemperatures::from_kelvin(t1, t2)?;
    let average = temps.average_temp();
    let kn = gg_conduction::thermal_conductivity_polynomial(gas, average);
    let free_lambda = gg_conduction::free_molecular_conductance(
        gas,
        temps.surface_temp_1(),
        temps.surface_temp_2(),
    )?;

    print_constants(gas);
    println!("  average temperature = {} K", average.value);
    if !gas.in_fit_range(average.value) {
        println!("  (outside fit range, extrapolated)");
    }
    println!("  Kn = {:e} W/(m·K)", kn.value);
    println!("  free-molecular conductance = {:e} W/(m²·K·Pa)", free_lambda);
    Ok(())
}

fn print_constants(gas: &GasProperties) {
    println!("{}:", gas.name);
    println!("  molar mass = {} kg/mol", gas.molar_mass_kg_mol);
    println!("  gamma = {}", gas.gamma);
    match gas.cp() {
        Some(cp) => println!("  cp = {} J/(kg·K)", cp.value),
        None => println!("  cp = n/a"),
    }
    println!(
        "  AA = {:e}, BB = {:e}, CC = {:e}, DD = {:e}",
        gas.fit.a, gas.fit.b, gas.fit.c, gas.fit.d
    );
    println!("  lambda = {} W/(m·K)", gas.lambda_ref_w_m_k);
    println!("  Tmin = {} K, Tmax = {} K", gas.t_min_k, gas.t_max_k);
    println!("  thermal accommodation factor, alpha = {}", gas.alpha);
}

fn render(result: &SweepResult, format: OutputFormat) -> ScenarioResult<String> {
    match format {
        OutputFormat::Csv => Ok(sweep_to_csv(result)),
        OutputFormat::Json => to_json(result),
    }
}

fn emit_sweep(
    result: Option<&SweepResult>,
    format: OutputFormat,
    output: Option<&Path>,
) -> ScenarioResult<()> {
    let Some(result) = result else {
        return Ok(());
    };
    let text = render(result, format)?;
    debug!(points = result.len(), bytes = text.len(), "rendered sweep");
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            eprintln!("✓ Exported {} points to {}", result.len(), path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn cmd_run(
    scenario_path: &Path,
    output_dir: Option<&Path>,
    format: OutputFormat,
) -> ScenarioResult<()> {
    let scenario = load_yaml(scenario_path)?;
    let report = run_scenario(&scenario)?;

    let Some(dir) = output_dir else {
        print_summary(&report);
        return Ok(());
    };
    std::fs::create_dir_all(dir)?;

    match format {
        OutputFormat::Json => {
            let path = dir.join("report.json");
            std::fs::write(&path, to_json(&report)?)?;
            println!("✓ Wrote {}", path.display());
        }
        OutputFormat::Csv => {
            for (file, result) in [
                ("separation.csv", report.separation.as_ref()),
                ("pressure.csv", report.pressure.as_ref()),
            ] {
                if let Some(result) = result {
                    let path = dir.join(file);
                    std::fs::write(&path, sweep_to_csv(result))?;
                    println!("✓ Wrote {} ({} points)", path.display(), result.len());
                }
            }
        }
    }
    Ok(())
}

fn print_summary(report: &ScenarioReport) {
    print_constants(&report.gas);
    println!("  average temperature = {} K", report.average_temp_k);
    println!("  Kn = {:e} W/(m·K)", report.kn_w_m_k);

    for result in [report.separation.as_ref(), report.pressure.as_ref()]
        .into_iter()
        .flatten()
    {
        let (Some(first), Some(last)) = (result.rows().next(), result.rows().last()) else {
            continue;
        };
        println!(
            "\n{} sweep at {:e} {} ({} points):",
            result.variable,
            result.fixed_value_si,
            result.variable.fixed_unit(),
            result.len()
        );
        for (x, hg, keff) in [first, last] {
            println!(
                "  {:e} {}: Hg = {:e} W/(m²·K), a·Hg = {:e} W/(m·K)",
                x,
                result.variable.unit(),
                hg,
                keff
            );
        }
    }
}
