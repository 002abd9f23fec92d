//! NAVFUSE: A batch simulator for GNSS/INS sensor-fusion navigation solutions.
//!
//! The simulator reads a ground-truth terrain path, runs a noisy GNSS model
//! and a dead-reckoning INS model concurrently, derives wind-disturbed
//! loosely/tightly coupled variants, and reports how far every derived path
//! strays from the truth.
//!
//! Two run modes select what the trajectory log and summary show:
//! - `coupling`: truth against the loosely and tightly wind-coupled variants
//! - `fusion`: truth against the GNSS and INS sensor estimates

mod common;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::error;

use navfuse::estimator::{DEFAULT_MEASUREMENT_NOISE, DEFAULT_PROCESS_NOISE};
use navfuse::sensors::{DEFAULT_NOISE_SCALE, DEFAULT_SEED, GnssConfig};
use navfuse::sim::{self, RunMode, SimulationConfig, SimulationResult};

const LONG_ABOUT: &str = "NAVFUSE: A batch simulator for GNSS/INS sensor-fusion navigation solutions.

The simulator compares a ground-truth terrain path against the estimates of two
concurrently simulated sensors: a GNSS receiver whose noisy measurements are
smoothed by a scalar recursive filter, and an idealized inertial dead-reckoning
model. A configurable wind disturbance additionally derives loosely- and
tightly-coupled variants of the truth path.

Run modes:
- coupling: log and report the wind-coupled variants (loose 0.8 / tight 0.5)
- fusion:   log and report the GNSS and INS sensor estimates

The terrain input is a JSON document with a 'terrain' list of latitude/longitude
waypoints. The output is a six-column CSV trajectory log plus two aggregate
deviation totals printed on the console.";

/// Command line arguments
#[derive(Parser)]
#[command(
    version,
    about = "A batch simulator for GNSS/INS sensor-fusion navigation solutions.",
    long_about = LONG_ABOUT
)]
struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Command,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Log file path (if not specified, logs to stderr)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

/// Top-level commands
#[derive(Subcommand, Clone)]
enum Command {
    #[command(
        name = "coupling",
        about = "Compare wind-coupled trajectory variants against truth",
        long_about = "Run the simulation in coupling mode. The trajectory log and console summary \
                      show the truth path against its loosely coupled (0.8 disturbance leak-through) \
                      and tightly coupled (0.5 leak-through) wind variants."
    )]
    Coupling(SimArgs),
    #[command(
        name = "fusion",
        about = "Compare GNSS and INS sensor estimates against truth",
        long_about = "Run the simulation in fusion mode. The trajectory log and console summary \
                      show the truth path against the smoothed noisy GNSS estimate and the \
                      dead-reckoned INS estimate."
    )]
    Fusion(SimArgs),
}

/// Common simulation arguments
#[derive(Args, Clone, Debug)]
struct SimArgs {
    /// Terrain document path
    #[arg(short, long, default_value = "terrain.json")]
    input: PathBuf,

    /// Trajectory log output path
    #[arg(short, long, default_value = "flight_log.csv")]
    output: PathBuf,

    /// Scenario code (1 - calm conditions, 2 - moderate wind, 3 - strong wind);
    /// prompts on the console when omitted
    #[arg(short, long)]
    scenario: Option<u8>,

    /// RNG seed (applies to any stochastic options)
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Half-width of the uniform GNSS measurement noise, degrees
    #[arg(long, default_value_t = DEFAULT_NOISE_SCALE)]
    noise_scale: f64,

    /// Process noise (Q) of the GNSS smoothing filters
    #[arg(long, default_value_t = DEFAULT_PROCESS_NOISE)]
    process_noise: f64,

    /// Measurement noise (R) of the GNSS smoothing filters
    #[arg(long, default_value_t = DEFAULT_MEASUREMENT_NOISE)]
    measurement_noise: f64,

    /// Route both GNSS axes through one shared filter instance
    #[arg(long)]
    shared_filter: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = common::init_logger(&cli.log_level, cli.log_file.as_ref()) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let (mode, args) = match cli.command {
        Command::Coupling(args) => (RunMode::Coupling, args),
        Command::Fusion(args) => (RunMode::Fusion, args),
    };
    let scenario_code = args.scenario.unwrap_or_else(common::prompt_scenario);

    let config = SimulationConfig {
        terrain_path: args.input,
        output_path: args.output,
        scenario_code,
        mode,
        gnss: GnssConfig {
            noise_scale: args.noise_scale,
            process_noise: args.process_noise,
            measurement_noise: args.measurement_noise,
            seed: args.seed,
            shared_filter: args.shared_filter,
        },
    };

    match sim::run(&config) {
        Ok(result) => {
            print_summary(mode, &result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("simulation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the two aggregate deviation totals for the active run mode.
fn print_summary(mode: RunMode, result: &SimulationResult) {
    match mode {
        RunMode::Coupling => {
            println!(
                "Total deviation (loosely coupled): {}",
                result.report.loosely
            );
            println!(
                "Total deviation (tightly coupled): {}",
                result.report.tightly
            );
        }
        RunMode::Fusion => {
            println!("Total deviation (GNSS): {}", result.report.gnss);
            println!("Total deviation (INS): {}", result.report.ins);
        }
    }
}
