//! Public API for the tone-engine crate.
//!
//! This module provides the high-level API: the [`ToneAnalyzer`] builder,
//! its [`AnalysisReport`] and the unified [`AnalysisError`] type.

mod analyzer;
mod error;

pub use analyzer::{AnalysisPath, AnalysisReport, ToneAnalyzer};
pub use error::AnalysisError;
