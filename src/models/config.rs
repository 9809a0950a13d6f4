use serde::Deserialize;
use std::path::{Path, PathBuf};
use tone_engine::SampleOptions;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Image intake and skin sampling
    pub analysis: AnalysisConfig,

    /// Where cutouts are written
    pub output: OutputConfig,

    /// HTTP server limits
    pub server: ServerConfig,
}

/// Analysis settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Working width every decoded image is resized to
    pub target_width: u32,

    /// Number of random skin samples drawn from the face crop
    pub sample_count: usize,

    /// Seed for the skin sampler
    pub seed: u64,

    /// Centered fraction of each crop axis the sampler draws from
    pub central_fraction: f32,

    /// Minimum accepted skin samples before falling back to a region average
    pub min_skin_samples: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_width: 480,
            sample_count: 500,
            seed: 42,
            central_fraction: 0.5,
            min_skin_samples: 50,
        }
    }
}

impl AnalysisConfig {
    pub fn sample_options(&self) -> SampleOptions {
        SampleOptions::new()
            .central_fraction(self.central_fraction)
            .sample_count(self.sample_count)
            .seed(self.seed)
            .min_skin_samples(self.min_skin_samples)
    }
}

/// Cutout persistence settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory cutouts are written to (created on demand)
    pub dir: PathBuf,

    /// File name prefix for background-removed face cutouts
    pub face_prefix: String,

    /// File name prefix for plain center crops
    pub center_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("faces"),
            face_prefix: "face".to_string(),
            center_prefix: "center_region".to_string(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Maximum accepted request body for image uploads
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults.
    ///
    /// A missing or unparsable file is logged and never fatal.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        target_width = config.analysis.target_width,
                        output_dir = %config.output.dir.display(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from `--config` if given, else from the `CONFIG_FILE` env var.
    pub fn load_with_env(explicit: Option<&Path>) -> Self {
        let from_env = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
        Self::load(explicit.or(from_env.as_deref()))
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(content)?;
        if config.analysis.target_width == 0 {
            tracing::warn!("analysis.target_width must be positive, using 480");
            config.analysis.target_width = AnalysisConfig::default().target_width;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.analysis.target_width, 480);
        assert_eq!(config.analysis.sample_count, 500);
        assert_eq!(config.analysis.seed, 42);
        assert_eq!(config.output.dir, PathBuf::from("faces"));
        assert_eq!(config.output.face_prefix, "face");
        assert_eq!(config.output.center_prefix, "center_region");
        assert_eq!(config.server.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml("analysis:\n  seed: 7\noutput:\n  dir: /tmp/cutouts\n").unwrap();
        assert_eq!(config.analysis.seed, 7);
        assert_eq!(config.analysis.sample_count, 500);
        assert_eq!(config.output.dir, PathBuf::from("/tmp/cutouts"));
        assert_eq!(config.output.face_prefix, "face");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_zero_target_width_is_replaced() {
        let config = AppConfig::from_yaml("analysis:\n  target_width: 0\n").unwrap();
        assert_eq!(config.analysis.target_width, 480);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("analysis: [1, 2").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/personal-color.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  max_upload_bytes: 1024").unwrap();
        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.server.max_upload_bytes, 1024);
    }

    #[test]
    fn test_sample_options_follow_config() {
        let config = AppConfig::from_yaml("analysis:\n  sample_count: 250\n  seed: 9\n").unwrap();
        let options = config.analysis.sample_options();
        assert_eq!(options.sample_count, 250);
        assert_eq!(options.seed, 9);
        assert_eq!(options.min_skin_samples, 50);
    }
}
