//! Pass 1: elliptical trimap.

use super::options::SegmentOptions;

/// The face ellipse of a crop, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceEllipse {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
}

impl FaceEllipse {
    /// The ellipse for a `width`×`height` crop.
    pub fn for_crop(width: usize, height: usize, options: &SegmentOptions) -> Self {
        Self {
            cx: width as f32 / 2.0,
            cy: height as f32 * options.center_y,
            rx: width as f32 * options.semi_axis_x,
            ry: height as f32 * options.semi_axis_y,
        }
    }

    /// Normalized elliptical radius of pixel `(x, y)`: 1.0 on the ellipse.
    #[inline]
    pub fn normalized_radius(&self, x: usize, y: usize) -> f32 {
        let dx = (x as f32 - self.cx) / self.rx;
        let dy = (y as f32 - self.cy) / self.ry;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Trimap zone of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zone {
    /// Inside the inner ellipse.
    Foreground,
    /// Outside the outer ellipse.
    Background,
    /// In the ring between; carries the normalized radius for Pass 2.
    Uncertain { radius: f32 },
}

/// Per-pixel trimap, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Trimap {
    width: usize,
    height: usize,
    zones: Vec<Zone>,
}

impl Trimap {
    /// Classify every pixel of a `width`×`height` crop against `ellipse`.
    pub fn build(width: usize, height: usize, ellipse: &FaceEllipse, options: &SegmentOptions) -> Self {
        let mut zones = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let radius = ellipse.normalized_radius(x, y);
                let zone = if radius <= options.inner_radius {
                    Zone::Foreground
                } else if radius >= options.outer_radius {
                    Zone::Background
                } else {
                    Zone::Uncertain { radius }
                };
                zones.push(zone);
            }
        }
        Self {
            width,
            height,
            zones,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Number of pixels left for skin scoring.
    pub fn uncertain_count(&self) -> usize {
        self.zones
            .iter()
            .filter(|z| matches!(z, Zone::Uncertain { .. }))
            .count()
    }
}
