//! Simulation orchestration.
//!
//! One run flows through a fixed pipeline: load the terrain truth path,
//! resolve the wind scenario, run the GNSS and INS models concurrently over
//! the same read-only truth sequence, join both, derive the wind-coupled
//! variants, score every derived path against truth, and write the
//! trajectory log for the active run mode. A run either fully succeeds or
//! produces no usable output; there is no partial-result or retry path.

use std::panic;
use std::path::PathBuf;
use std::thread;

use log::{debug, info};

use crate::deviation::{self, DeviationReport};
use crate::error::NavError;
use crate::recorder;
use crate::sensors::{GnssConfig, GnssSensor, InsSensor, SensorModel};
use crate::terrain;
use crate::wind::{self, LOOSE_COUPLING, TIGHT_COUPLING};
use crate::{Coordinate, Scenario};

/// Which pair of derived paths a run records and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Truth against the loosely and tightly wind-coupled variants.
    Coupling,
    /// Truth against the GNSS and INS sensor estimates.
    Fusion,
}

/// Full configuration for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Terrain document supplying the ground-truth path.
    pub terrain_path: PathBuf,
    /// Destination of the CSV trajectory log.
    pub output_path: PathBuf,
    /// Raw scenario code. Validated inside [`run`] so that an unrecognized
    /// code aborts before any sensor simulation starts.
    pub scenario_code: u8,
    /// Which derived paths the log and summary surface.
    pub mode: RunMode,
    /// GNSS sensor configuration.
    pub gnss: GnssConfig,
}

/// Every path produced by one run, plus the deviation totals.
///
/// All derived paths are index-aligned with `true_path` and have exactly
/// its length.
#[derive(Debug)]
pub struct SimulationResult {
    /// Ground-truth path from the terrain source.
    pub true_path: Vec<Coordinate>,
    /// Smoothed noisy GNSS estimate.
    pub gnss_path: Vec<Coordinate>,
    /// Dead-reckoned INS estimate.
    pub ins_path: Vec<Coordinate>,
    /// Truth under wind with loose coupling (0.8 leak-through).
    pub loosely_path: Vec<Coordinate>,
    /// Truth under wind with tight coupling (0.5 leak-through).
    pub tightly_path: Vec<Coordinate>,
    /// Scenario the run was resolved to.
    pub scenario: Scenario,
    /// Deviation totals of all four derived paths.
    pub report: DeviationReport,
}

/// Runs two sensor models concurrently over the same read-only truth path
/// and joins both before returning.
///
/// This is the only synchronization point in the pipeline: each worker owns
/// and returns its own output buffer, and nothing downstream can observe a
/// partial result. A panic inside either worker is resumed on the calling
/// thread, so a failed sensor crashes the whole run rather than degrading
/// it.
pub fn fuse_sensors(
    truth: &[Coordinate],
    gnss: &mut impl SensorModel,
    ins: &mut impl SensorModel,
) -> (Vec<Coordinate>, Vec<Coordinate>) {
    thread::scope(|scope| {
        let gnss_task = scope.spawn(move || {
            let path = gnss.simulate(truth);
            debug!("{} worker produced {} waypoints", gnss.label(), path.len());
            path
        });
        let ins_task = scope.spawn(move || {
            let path = ins.simulate(truth);
            debug!("{} worker produced {} waypoints", ins.label(), path.len());
            path
        });
        let gnss_path = gnss_task
            .join()
            .unwrap_or_else(|payload| panic::resume_unwind(payload));
        let ins_path = ins_task
            .join()
            .unwrap_or_else(|payload| panic::resume_unwind(payload));
        (gnss_path, ins_path)
    })
}

/// Runs one complete simulation.
///
/// # Errors
/// * [`NavError::SourceUnavailable`] / [`NavError::MalformedInput`] if the
///   terrain document cannot be read; nothing else runs.
/// * [`NavError::InvalidScenario`] if the scenario code is unrecognized;
///   no sensor simulation starts.
/// * [`NavError::SinkUnavailable`] if the trajectory log cannot be written;
///   the in-memory results are discarded.
///
/// # Example
/// ```no_run
/// use navfuse::sensors::GnssConfig;
/// use navfuse::sim::{self, RunMode, SimulationConfig};
///
/// let config = SimulationConfig {
///     terrain_path: "terrain.json".into(),
///     output_path: "flight_log.csv".into(),
///     scenario_code: 2,
///     mode: RunMode::Coupling,
///     gnss: GnssConfig::default(),
/// };
/// let result = sim::run(&config).expect("simulation failed");
/// println!("loosely coupled deviation: {}", result.report.loosely);
/// ```
pub fn run(config: &SimulationConfig) -> Result<SimulationResult, NavError> {
    let truth = terrain::load_terrain(&config.terrain_path)?;
    info!(
        "loaded {} terrain waypoints from {}",
        truth.len(),
        config.terrain_path.display()
    );

    let scenario = Scenario::try_from(config.scenario_code)?;
    info!(
        "scenario {} ({}): wind factor {}",
        scenario.code(),
        scenario,
        scenario.wind_factor()
    );

    let mut gnss = GnssSensor::new(&config.gnss);
    let mut ins = InsSensor::new();
    let (gnss_path, ins_path) = fuse_sensors(&truth, &mut gnss, &mut ins);
    info!(
        "sensor simulations joined: {} GNSS waypoints, {} INS waypoints",
        gnss_path.len(),
        ins_path.len()
    );

    let wind_factor = scenario.wind_factor();
    let loosely_path = wind::apply_wind(&truth, wind_factor, LOOSE_COUPLING);
    let tightly_path = wind::apply_wind(&truth, wind_factor, TIGHT_COUPLING);

    let report = DeviationReport {
        gnss: deviation::total_deviation(&truth, &gnss_path),
        ins: deviation::total_deviation(&truth, &ins_path),
        loosely: deviation::total_deviation(&truth, &loosely_path),
        tightly: deviation::total_deviation(&truth, &tightly_path),
    };

    match config.mode {
        RunMode::Coupling => {
            recorder::write_coupling_log(&config.output_path, &truth, &loosely_path, &tightly_path)?
        }
        RunMode::Fusion => {
            recorder::write_fusion_log(&config.output_path, &truth, &gnss_path, &ins_path)?
        }
    }
    info!("trajectory log written to {}", config.output_path.display());

    Ok(SimulationResult {
        true_path: truth,
        gnss_path,
        ins_path,
        loosely_path,
        tightly_path,
        scenario,
        report,
    })
}
