//! Navigation sensor-fusion batch simulator
//!
//! This crate simulates a vehicle's navigation solution over a ground-truth
//! terrain path. Two sensor models produce competing estimates of the path:
//! a GNSS receiver that injects measurement noise and smooths it with a
//! scalar recursive (Kalman) filter, and an inertial dead-reckoning model.
//! Both run concurrently and are joined before any downstream analysis. A
//! deterministic wind disturbance then derives loosely- and tightly-coupled
//! variants of the truth path, and every derived path is scored by its
//! cumulative Euclidean deviation from truth.
//!
//! The simulator is an offline, finite-sequence batch tool: it reads a
//! terrain document once, runs one scenario to completion, writes a CSV
//! trajectory log, and prints aggregate deviation totals. It does not model
//! altitude, multiple vehicles, or real-time constraints.
//!
//! This crate is primarily built off of the following dependencies:
//! - [`nalgebra`](https://crates.io/crates/nalgebra): Provides the vector math for deviation scoring.
//! - [`rand`](https://crates.io/crates/rand) and [`rand_distr`](https://crates.io/crates/rand_distr): Provides seedable random number generation for the GNSS noise model.
//! - [`serde`](https://crates.io/crates/serde), [`serde_json`](https://crates.io/crates/serde_json), and [`csv`](https://crates.io/crates/csv): Provides terrain input and trajectory log output.
//!
//! ## Crate overview
//!
//! This crate is organized into several modules:
//! - [estimator]: The scalar recursive (Kalman) filter used to smooth noisy GNSS measurements.
//! - [sensors]: The GNSS and INS sensor models and the [`SensorModel`](sensors::SensorModel) seam between them and the orchestration.
//! - [wind]: The deterministic wind disturbance model and its coupling coefficients.
//! - [deviation]: Deviation scoring of derived paths against the truth path.
//! - [terrain]: Loading the ground-truth path from a terrain JSON document.
//! - [recorder]: CSV trajectory log output.
//! - [sim]: Run configuration and the fork-join simulation orchestration.
//! - [error]: The error taxonomy surfaced at the orchestration boundary.
//!
//! The shared data model lives at the crate root: [`Coordinate`] is the
//! immutable waypoint value type and [`Scenario`] is the validated wind
//! scenario selector. All paths are plain `Vec<Coordinate>` sequences,
//! index-aligned with the truth path they were derived from: index `i` of
//! any derived path corresponds to terrain waypoint `i`, and every derived
//! path has exactly the same length as the truth path.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

pub mod deviation;
pub mod error;
pub mod estimator;
pub mod recorder;
pub mod sensors;
pub mod sim;
pub mod terrain;
pub mod wind;

/// A single waypoint, ground truth or estimated.
///
/// Plain value type with no identity beyond its coordinates; produced once
/// per transform and never mutated in place afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a waypoint from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Wind scenario selected at run start.
///
/// Scenarios are identified by an integer code supplied by the operator and
/// map to a fixed wind factor. Unrecognized codes are rejected with
/// [`NavError::InvalidScenario`] before any sensor simulation starts; there
/// is no default scenario.
///
/// # Example
/// ```
/// use navfuse::Scenario;
///
/// let scenario = Scenario::try_from(2).unwrap();
/// assert_eq!(scenario, Scenario::ModerateWind);
/// assert_eq!(scenario.wind_factor(), 0.5);
/// assert!(Scenario::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Code 1: calm conditions, no wind.
    Calm,
    /// Code 2: moderate wind.
    ModerateWind,
    /// Code 3: strong wind.
    StrongWind,
}

impl Scenario {
    /// The wind factor applied by the disturbance model under this scenario.
    pub fn wind_factor(&self) -> f64 {
        match self {
            Scenario::Calm => 0.0,
            Scenario::ModerateWind => 0.5,
            Scenario::StrongWind => 1.0,
        }
    }

    /// The operator-facing integer code for this scenario.
    pub fn code(&self) -> u8 {
        match self {
            Scenario::Calm => 1,
            Scenario::ModerateWind => 2,
            Scenario::StrongWind => 3,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::Calm => "calm conditions",
            Scenario::ModerateWind => "moderate wind",
            Scenario::StrongWind => "strong wind",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<u8> for Scenario {
    type Error = NavError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Scenario::Calm),
            2 => Ok(Scenario::ModerateWind),
            3 => Ok(Scenario::StrongWind),
            other => Err(NavError::InvalidScenario(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_codes_round_trip() {
        for code in 1..=3u8 {
            let scenario = Scenario::try_from(code).expect("recognized code");
            assert_eq!(scenario.code(), code);
        }
    }

    #[test]
    fn test_scenario_wind_factors() {
        assert_eq!(Scenario::Calm.wind_factor(), 0.0);
        assert_eq!(Scenario::ModerateWind.wind_factor(), 0.5);
        assert_eq!(Scenario::StrongWind.wind_factor(), 1.0);
    }

    #[test]
    fn test_scenario_rejects_unrecognized_codes() {
        for code in [0u8, 4, 5, 255] {
            match Scenario::try_from(code) {
                Err(NavError::InvalidScenario(c)) => assert_eq!(c, code),
                other => panic!("expected InvalidScenario, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_coordinate_is_a_value_type() {
        let a = Coordinate::new(40.0, -75.0);
        let b = Coordinate::new(40.0, -75.0);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "(40, -75)");
    }
}
