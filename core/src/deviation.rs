//! Deviation scoring of derived paths against the ground truth.

use nalgebra::Vector2;

use crate::Coordinate;

/// Aggregate deviation totals for one simulation run.
///
/// Read-only output: one scalar per derived path, each the cumulative
/// Euclidean deviation from truth. The run mode decides which pair is
/// surfaced in the trajectory log and the console summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationReport {
    /// Total deviation of the GNSS estimate.
    pub gnss: f64,
    /// Total deviation of the INS estimate.
    pub ins: f64,
    /// Total deviation of the loosely coupled variant.
    pub loosely: f64,
    /// Total deviation of the tightly coupled variant.
    pub tightly: f64,
}

/// Sums the Euclidean distance between index-aligned coordinate pairs.
///
/// # Panics
/// Panics if the candidate path is not the same length as the truth path;
/// every transform in the pipeline preserves length, so a mismatch is a
/// caller bug rather than a run error.
///
/// # Example
/// ```
/// use navfuse::Coordinate;
/// use navfuse::deviation::total_deviation;
///
/// let truth = vec![Coordinate::new(0.0, 0.0)];
/// let candidate = vec![Coordinate::new(3.0, 4.0)];
/// assert_eq!(total_deviation(&truth, &candidate), 5.0);
/// ```
pub fn total_deviation(truth: &[Coordinate], candidate: &[Coordinate]) -> f64 {
    assert_eq!(
        truth.len(),
        candidate.len(),
        "derived path must be index-aligned with the true path"
    );
    truth
        .iter()
        .zip(candidate.iter())
        .map(|(t, c)| Vector2::new(c.latitude - t.latitude, c.longitude - t.longitude).norm())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_three_four_five_triangle() {
        let truth = vec![Coordinate::new(0.0, 0.0)];
        let candidate = vec![Coordinate::new(3.0, 4.0)];
        assert_eq!(total_deviation(&truth, &candidate), 5.0);
    }

    #[test]
    fn test_identical_paths_score_zero() {
        let truth = vec![Coordinate::new(40.0, -75.0), Coordinate::new(40.1, -75.1)];
        assert_eq!(total_deviation(&truth, &truth.clone()), 0.0);
    }

    #[test]
    fn test_empty_paths_score_zero() {
        assert_eq!(total_deviation(&[], &[]), 0.0);
    }

    #[test]
    fn test_deviations_accumulate_across_indices() {
        let truth = vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)];
        let candidate = vec![Coordinate::new(0.0, 1.0), Coordinate::new(1.0, 3.0)];
        assert_approx_eq!(total_deviation(&truth, &candidate), 3.0, 1e-12);
    }

    #[test]
    #[should_panic(expected = "index-aligned")]
    fn test_length_mismatch_is_a_caller_bug() {
        let truth = vec![Coordinate::new(0.0, 0.0)];
        total_deviation(&truth, &[]);
    }
}
