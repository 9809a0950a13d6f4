//! Skin sampling options.

/// Configuration for [`sample_skin_color`](super::sample_skin_color).
///
/// # Defaults
///
/// - Central fraction: 0.5 (the middle half of each axis)
/// - Sample count: 500 draws
/// - Seed: 42
/// - Minimum skin samples: 50 (below this the full-buffer average is used)
///
/// # Example
///
/// ```
/// use tone_engine::SampleOptions;
///
/// let options = SampleOptions::new().sample_count(1000).seed(7);
/// assert_eq!(options.sample_count, 1000);
/// assert_eq!(options.seed, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOptions {
    /// Fraction of each axis, centered, that samples are drawn from.
    pub central_fraction: f32,

    /// Number of random draws.
    pub sample_count: usize,

    /// Seed for the per-call random generator.
    pub seed: u64,

    /// Minimum number of draws that must pass the skin gate.
    pub min_skin_samples: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            central_fraction: 0.5,
            sample_count: 500,
            seed: 42,
            min_skin_samples: 50,
        }
    }
}

impl SampleOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the central fraction, clamped to `(0, 1]`.
    #[inline]
    pub fn central_fraction(mut self, fraction: f32) -> Self {
        self.central_fraction = fraction.clamp(f32::EPSILON, 1.0);
        self
    }

    /// Set the number of random draws.
    #[inline]
    pub fn sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Set the random seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the minimum number of accepted skin samples.
    #[inline]
    pub fn min_skin_samples(mut self, count: usize) -> Self {
        self.min_skin_samples = count;
        self
    }
}
