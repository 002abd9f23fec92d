//! Deterministic wind disturbance model.
//!
//! Wind is modeled as a fixed bias that leaks into the navigation solution
//! in proportion to how loosely the sensors are integrated. The same base
//! path is transformed twice per run, once with each coupling coefficient,
//! to produce the loosely- and tightly-coupled trajectory variants.

use crate::Coordinate;

/// Coordinate shift per unit of wind, in degrees on each axis.
pub const UNIT_BIAS: f64 = 1.0e-4;
/// Disturbance leak-through of a loosely coupled integration.
pub const LOOSE_COUPLING: f64 = 0.8;
/// Disturbance leak-through of a tightly coupled integration.
pub const TIGHT_COUPLING: f64 = 0.5;

/// Applies the wind bias to every coordinate of `base`.
///
/// Each waypoint is shifted by `wind_factor * coupling_factor * UNIT_BIAS`
/// on both axes. A lower coupling factor models a tighter integration that
/// resists the disturbance more, so less of the bias leaks through. Pure
/// function: the input path is never mutated and the output is
/// index-aligned with it.
///
/// # Example
/// ```
/// use navfuse::Coordinate;
/// use navfuse::wind::{LOOSE_COUPLING, apply_wind};
///
/// let base = vec![Coordinate::new(40.0, -75.0)];
/// let calm = apply_wind(&base, 0.0, LOOSE_COUPLING);
/// assert_eq!(calm, base);
/// ```
pub fn apply_wind(base: &[Coordinate], wind_factor: f64, coupling_factor: f64) -> Vec<Coordinate> {
    let shift = wind_factor * coupling_factor * UNIT_BIAS;
    base.iter()
        .map(|waypoint| Coordinate::new(waypoint.latitude + shift, waypoint.longitude + shift))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn sample_path() -> Vec<Coordinate> {
        vec![
            Coordinate::new(40.0, -75.0),
            Coordinate::new(40.001, -75.0015),
            Coordinate::new(40.002, -75.003),
        ]
    }

    #[test]
    fn test_zero_wind_is_an_exact_identity() {
        let base = sample_path();
        assert_eq!(apply_wind(&base, 0.0, LOOSE_COUPLING), base);
        assert_eq!(apply_wind(&base, 0.0, TIGHT_COUPLING), base);
    }

    #[test]
    fn test_shift_scales_with_wind_and_coupling() {
        let base = sample_path();
        let disturbed = apply_wind(&base, 1.0, LOOSE_COUPLING);
        for (original, shifted) in base.iter().zip(&disturbed) {
            assert_approx_eq!(shifted.latitude - original.latitude, 0.8e-4, 1e-12);
            assert_approx_eq!(shifted.longitude - original.longitude, 0.8e-4, 1e-12);
        }
    }

    #[test]
    fn test_tight_coupling_leaks_less_than_loose() {
        let base = sample_path();
        let loose = apply_wind(&base, 1.0, LOOSE_COUPLING);
        let tight = apply_wind(&base, 1.0, TIGHT_COUPLING);
        for ((original, l), t) in base.iter().zip(&loose).zip(&tight) {
            assert!(
                (t.latitude - original.latitude).abs() < (l.latitude - original.latitude).abs()
            );
        }
    }

    #[test]
    fn test_output_is_index_aligned() {
        let base = sample_path();
        assert_eq!(apply_wind(&base, 0.5, TIGHT_COUPLING).len(), base.len());
        assert!(apply_wind(&[], 0.5, TIGHT_COUPLING).is_empty());
    }
}
