//! Unified error type for the tone-engine public API.

use std::fmt;

/// Error returned by tone-engine operations.
///
/// Analysis is all-or-nothing: when an error is returned no partial result
/// exists.
///
/// # Example
///
/// ```
/// use tone_engine::{AnalysisError, PixelBuffer, ToneAnalyzer};
///
/// let empty = PixelBuffer::filled(0, 0, [0, 0, 0, 255]);
/// let err = ToneAnalyzer::new().analyze(&empty, None).unwrap_err();
/// assert_eq!(err, AnalysisError::EmptyImage);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The image has zero width or height.
    EmptyImage,
    /// Pixel data length does not match `width * height`.
    BufferSize { expected: usize, actual: usize },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyImage => write!(f, "image has no pixels"),
            AnalysisError::BufferSize { expected, actual } => {
                write!(f, "pixel buffer holds {} values, expected {}", actual, expected)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
