//! Segmentation options.

/// Tuning constants for the matting pipeline.
///
/// The defaults describe a portrait crop: an ellipse slightly taller than
/// wide, its center a little above the middle to take in the forehead.
///
/// # Example
///
/// ```
/// use tone_engine::SegmentOptions;
///
/// let options = SegmentOptions::new().blur_iterations(2);
/// assert_eq!(options.blur_iterations, 2);
/// assert_eq!(options.inner_radius, 0.70);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentOptions {
    /// Ellipse center height as a fraction of crop height.
    pub center_y: f32,
    /// Horizontal semi-axis as a fraction of crop width.
    pub semi_axis_x: f32,
    /// Vertical semi-axis as a fraction of crop height.
    pub semi_axis_y: f32,

    /// Normalized radius at or below which a pixel is definite foreground.
    pub inner_radius: f32,
    /// Normalized radius at or above which a pixel is definite background.
    pub outer_radius: f32,

    /// Number of horizontal+vertical box blur passes.
    pub blur_iterations: usize,
    /// Lower bound on the blur radius in pixels.
    pub min_blur_radius: usize,
    /// Blur radius is `min(width, height) / blur_divisor`.
    pub blur_divisor: usize,

    /// Alpha values (0..=255) below this snap to fully transparent.
    pub transparent_below: u8,
    /// Alpha values (0..=255) above this snap to fully opaque.
    pub opaque_above: u8,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            center_y: 0.48,
            semi_axis_x: 0.46,
            semi_axis_y: 0.50,
            inner_radius: 0.70,
            outer_radius: 1.15,
            blur_iterations: 3,
            min_blur_radius: 2,
            blur_divisor: 28,
            transparent_below: 10,
            opaque_above: 245,
        }
    }
}

impl SegmentOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trimap radii. `outer` is raised to at least `inner`.
    #[inline]
    pub fn radii(mut self, inner: f32, outer: f32) -> Self {
        self.inner_radius = inner;
        self.outer_radius = outer.max(inner);
        self
    }

    /// Set the number of blur iterations (0 disables smoothing).
    #[inline]
    pub fn blur_iterations(mut self, iterations: usize) -> Self {
        self.blur_iterations = iterations;
        self
    }

    /// Set the alpha dead zones.
    #[inline]
    pub fn dead_zones(mut self, transparent_below: u8, opaque_above: u8) -> Self {
        self.transparent_below = transparent_below;
        self.opaque_above = opaque_above;
        self
    }
}
