//! RGBA pixel buffer and pixel rectangles.
//!
//! [`PixelBuffer`] is the unit of ownership between analysis stages: each
//! stage takes a buffer (by reference or by value) and returns a freshly
//! allocated one. Nothing aliases a buffer across stages.

use crate::api::AnalysisError;
use crate::color::Rgb;

/// A rectangle in pixel coordinates.
///
/// `left`/`top` are inclusive and `right`/`bottom` exclusive, so
/// `width = right - left`. A valid rectangle has `left <= right` and
/// `top <= bottom`; [`Rect::clamp_to`] enforces that and the buffer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Rect {
    #[inline]
    pub const fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels (zero for inverted rectangles).
    #[inline]
    pub fn width(&self) -> usize {
        (self.right - self.left).max(0) as usize
    }

    /// Height in pixels (zero for inverted rectangles).
    #[inline]
    pub fn height(&self) -> usize {
        (self.bottom - self.top).max(0) as usize
    }

    /// True when the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Clamp to a `width`×`height` buffer, keeping `left <= right` and
    /// `top <= bottom`.
    pub fn clamp_to(&self, width: usize, height: usize) -> Rect {
        let w = width as i64;
        let h = height as i64;
        let left = self.left.clamp(0, w);
        let top = self.top.clamp(0, h);
        let right = self.right.clamp(left, w);
        let bottom = self.bottom.clamp(top, h);
        Rect::new(left, top, right, bottom)
    }
}

/// A width×height grid of RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
}

impl PixelBuffer {
    /// Create a buffer from RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::BufferSize`] if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<[u8; 4]>) -> Result<Self, AnalysisError> {
        if pixels.len() != width * height {
            return Err(AnalysisError::BufferSize {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from interleaved `[R, G, B, A, R, G, B, A, ...]` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::BufferSize`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, AnalysisError> {
        if bytes.len() != width * height * 4 {
            return Err(AnalysisError::BufferSize {
                expected: width * height * 4,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer where every pixel is `rgba`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgba; width * height],
        }
    }

    /// Create a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
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

    /// True when the buffer has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The whole buffer as a rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i64, self.height as i64)
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// The RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the buffer.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        self.pixels[y * self.width + x]
    }

    /// The color at `(x, y)`, ignoring alpha.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> Rgb {
        let [r, g, b, _] = self.pixel(x, y);
        Rgb::new(r, g, b)
    }

    /// The alpha channel, row-major.
    pub fn alpha(&self) -> Vec<u8> {
        self.pixels.iter().map(|p| p[3]).collect()
    }

    /// Copy out the pixels inside `rect` (clamped to the buffer).
    pub fn crop(&self, rect: Rect) -> PixelBuffer {
        let r = rect.clamp_to(self.width, self.height);
        let (w, h) = (r.width(), r.height());
        let mut pixels = Vec::with_capacity(w * h);
        for y in r.top as usize..r.bottom as usize {
            let row = y * self.width;
            pixels.extend_from_slice(&self.pixels[row + r.left as usize..row + r.right as usize]);
        }
        PixelBuffer {
            width: w,
            height: h,
            pixels,
        }
    }

    /// Replace the alpha channel, leaving RGB untouched.
    ///
    /// `alpha` must have one entry per pixel.
    pub fn with_alpha(mut self, alpha: &[u8]) -> PixelBuffer {
        debug_assert_eq!(alpha.len(), self.pixels.len());
        for (p, &a) in self.pixels.iter_mut().zip(alpha) {
            p[3] = a;
        }
        self
    }

    /// Flatten to interleaved RGBA bytes.
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        self.pixels.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| [x as u8, y as u8, 0, 255])
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = PixelBuffer::new(2, 2, vec![[0; 4]; 3]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::BufferSize {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_rgba_bytes() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let buffer = PixelBuffer::from_rgba_bytes(2, 1, &bytes).unwrap();
        assert_eq!(buffer.pixel(1, 0), [5, 6, 7, 8]);
        assert_eq!(buffer.into_rgba_bytes(), bytes.to_vec());

        assert!(PixelBuffer::from_rgba_bytes(2, 2, &bytes).is_err());
    }

    #[test]
    fn test_rect_clamp_keeps_order() {
        let r = Rect::new(-10, 5, 300, 2).clamp_to(100, 50);
        assert_eq!(r, Rect::new(0, 5, 100, 5));
        assert!(r.is_empty());

        let inside = Rect::new(10, 10, 20, 30).clamp_to(100, 50);
        assert_eq!(inside.width(), 10);
        assert_eq!(inside.height(), 20);
    }

    #[test]
    fn test_crop_copies_region() {
        let buffer = gradient(10, 8);
        let cropped = buffer.crop(Rect::new(2, 3, 6, 5));
        assert_eq!(cropped.width(), 4);
        assert_eq!(cropped.height(), 2);
        assert_eq!(cropped.pixel(0, 0), [2, 3, 0, 255]);
        assert_eq!(cropped.pixel(3, 1), [5, 4, 0, 255]);
    }

    #[test]
    fn test_crop_clamps_to_bounds() {
        let buffer = gradient(10, 8);
        let cropped = buffer.crop(Rect::new(-5, -5, 3, 100));
        assert_eq!(cropped.width(), 3);
        assert_eq!(cropped.height(), 8);

        let empty = buffer.crop(Rect::new(20, 20, 30, 30));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let buffer = gradient(3, 1).with_alpha(&[0, 128, 255]);
        assert_eq!(buffer.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(buffer.pixel(1, 0), [1, 0, 0, 128]);
        assert_eq!(buffer.alpha(), vec![0, 128, 255]);
    }
}
