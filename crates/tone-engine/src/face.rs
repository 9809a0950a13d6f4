//! Crop rectangles derived from a detected face or from image geometry.

use crate::buffer::Rect;

/// Crops narrower or shorter than this fall back to a fixed box.
pub const MIN_FACE_CROP: i64 = 60;
/// Half-side of the fixed fallback box.
pub const FALLBACK_HALF_SIDE: f32 = 90.0;

/// What a face detector reports about the primary face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDescriptor {
    /// Midpoint between the eyes, in pixels.
    pub center_x: f32,
    pub center_y: f32,
    /// Distance between the eyes, in pixels.
    pub eye_distance: f32,
}

impl FaceDescriptor {
    pub fn new(center_x: f32, center_y: f32, eye_distance: f32) -> Self {
        Self {
            center_x,
            center_y,
            eye_distance,
        }
    }

    /// Face crop inside a `width`×`height` image.
    ///
    /// The crop is `3.4 × eye_distance` wide and 1.4 times as tall, with 42%
    /// of its height above the eye line. When the clamped crop is smaller
    /// than 60 pixels on either side a 180×180 box around the eye midpoint
    /// is used instead.
    pub fn face_rect(&self, width: usize, height: usize) -> Rect {
        let fw = self.eye_distance * 3.4;
        let fh = fw * 1.4;
        let rect = Rect::new(
            (self.center_x - fw / 2.0) as i64,
            (self.center_y - fh * 0.42) as i64,
            (self.center_x + fw / 2.0) as i64,
            (self.center_y + fh * 0.58) as i64,
        )
        .clamp_to(width, height);

        if (rect.right - rect.left) < MIN_FACE_CROP || (rect.bottom - rect.top) < MIN_FACE_CROP {
            Rect::new(
                (self.center_x - FALLBACK_HALF_SIDE) as i64,
                (self.center_y - FALLBACK_HALF_SIDE) as i64,
                (self.center_x + FALLBACK_HALF_SIDE) as i64,
                (self.center_y + FALLBACK_HALF_SIDE) as i64,
            )
            .clamp_to(width, height)
        } else {
            rect
        }
    }
}

/// Square crop used when no face was detected: side `min(w, h) / 2`,
/// centered horizontally and a third of the way down.
pub fn center_rect(width: usize, height: usize) -> Rect {
    let (w, h) = (width as i64, height as i64);
    let (cx, cy) = (w / 2, h / 3);
    let half = w.min(h) / 2 / 2;
    Rect::new(cx - half, cy - half, cx + half, cy + half).clamp_to(width, height)
}

/// Eye band of a face crop.
pub fn eye_region(width: usize, height: usize) -> Rect {
    fractional_rect(width, height, (0.22, 0.78), (0.36, 0.46))
}

/// Hair band along the top of a face crop.
pub fn hair_region(width: usize, height: usize) -> Rect {
    fractional_rect(width, height, (0.25, 0.75), (0.0, 0.10))
}

fn fractional_rect(width: usize, height: usize, xs: (f32, f32), ys: (f32, f32)) -> Rect {
    let (w, h) = (width as f32, height as f32);
    Rect::new(
        (w * xs.0) as i64,
        (h * ys.0) as i64,
        (w * xs.1) as i64,
        (h * ys.1) as i64,
    )
}
