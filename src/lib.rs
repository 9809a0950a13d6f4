//! Personal color analysis
//!
//! Image intake, persistence, CLI and HTTP surfaces around the
//! [`tone_engine`] core. This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
