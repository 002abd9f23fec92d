//! Scalar recursive estimation.
//!
//! A single-state Kalman filter that blends a prior estimate with each new
//! noisy measurement, weighted by the relative confidence (gain). The GNSS
//! sensor model runs one of these per coordinate axis to smooth its noisy
//! measurements.

/// Default process noise (Q) for a smoothing filter.
pub const DEFAULT_PROCESS_NOISE: f64 = 0.1;
/// Default measurement noise (R) for a smoothing filter.
pub const DEFAULT_MEASUREMENT_NOISE: f64 = 0.5;

/// Single-state recursive (Kalman) filter.
///
/// The filter's entire value lies in accumulating confidence over a sequence
/// of measurements: it is created once at the start of a run, mutated only
/// through [`update`](ScalarKalman::update), and never reset mid-run. One
/// instance must not be shared across independent runs.
///
/// # Example
/// ```
/// use navfuse::estimator::ScalarKalman;
///
/// let mut filter = ScalarKalman::default();
/// let mut estimate = 0.0;
/// for _ in 0..50 {
///     estimate = filter.update(10.0);
/// }
/// assert!((estimate - 10.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct ScalarKalman {
    process_noise: f64,
    measurement_noise: f64,
    estimate: f64,
    error_covariance: f64,
    gain: f64,
}

impl ScalarKalman {
    /// Creates a filter with the given noise parameters.
    ///
    /// Initial state is `estimate = 0`, `error covariance = 1`.
    ///
    /// # Panics
    /// Panics if `process_noise` or `measurement_noise` is not strictly
    /// positive.
    pub fn new(process_noise: f64, measurement_noise: f64) -> Self {
        assert!(
            process_noise > 0.0,
            "process noise must be strictly positive"
        );
        assert!(
            measurement_noise > 0.0,
            "measurement noise must be strictly positive"
        );
        ScalarKalman {
            process_noise,
            measurement_noise,
            estimate: 0.0,
            error_covariance: 1.0,
            gain: 0.0,
        }
    }

    /// Folds one measurement into the estimate and returns the new estimate.
    ///
    /// Per call, in order: predict (`P += Q`), gain (`K = P / (P + R)`),
    /// correct (`x += K * (z - x)`), covariance update (`P *= 1 - K`).
    /// Deterministic given the filter's history of inputs.
    pub fn update(&mut self, measurement: f64) -> f64 {
        self.error_covariance += self.process_noise;
        self.gain = self.error_covariance / (self.error_covariance + self.measurement_noise);
        self.estimate += self.gain * (measurement - self.estimate);
        self.error_covariance *= 1.0 - self.gain;
        self.estimate
    }

    /// Current estimate (x).
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    /// Last computed gain (K).
    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Current error covariance (P).
    pub fn error_covariance(&self) -> f64 {
        self.error_covariance
    }
}

impl Default for ScalarKalman {
    fn default() -> Self {
        ScalarKalman::new(DEFAULT_PROCESS_NOISE, DEFAULT_MEASUREMENT_NOISE)
    }
}
