pub mod config;
pub mod response;

pub use config::{AnalysisConfig, AppConfig, OutputConfig, ServerConfig};
pub use response::{AnalysisResponse, PaletteResponse};
