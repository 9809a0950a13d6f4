//! Cutout persistence.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tone_engine::{AnalysisPath, PixelBuffer};

use super::image_io::encode_png;
use crate::error::ImageError;
use crate::models::OutputConfig;

const MAX_NAME_ATTEMPTS: usize = 1000;

/// Writes cutouts as timestamped PNG files into one directory.
#[derive(Debug, Clone)]
pub struct CutoutStore {
    dir: PathBuf,
    face_prefix: String,
    center_prefix: String,
}

impl CutoutStore {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            face_prefix: config.face_prefix.clone(),
            center_prefix: config.center_prefix.clone(),
        }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// File name prefix for cutouts produced by `path`.
    pub fn prefix_for(&self, path: AnalysisPath) -> &str {
        match path {
            AnalysisPath::Face => &self.face_prefix,
            AnalysisPath::CenterCrop => &self.center_prefix,
        }
    }

    /// Save `cutout` and return its `file://` location.
    ///
    /// Names are `<prefix>_<YYYYMMDD_HHMMSS_mmm>.png`; a save landing on a
    /// name already taken gets a `_1`, `_2`, ... suffix instead of
    /// overwriting. Failures are logged and reported as an empty string;
    /// they never fail the analysis that produced the cutout.
    pub fn save(&self, cutout: &PixelBuffer, path: AnalysisPath) -> String {
        let stem = format!("{}_{}", self.prefix_for(path), Local::now().format("%Y%m%d_%H%M%S_%3f"));

        match self.write_new(cutout, &stem) {
            Ok(file) => {
                let absolute = std::fs::canonicalize(&file).unwrap_or(file);
                tracing::info!(path = %absolute.display(), "Saved cutout");
                format!("file://{}", absolute.display())
            }
            Err(e) => {
                tracing::warn!(%e, dir = %self.dir.display(), stem, "Failed to save cutout");
                String::new()
            }
        }
    }

    /// Encode and write to the first free `stem[_n].png`. `create_new`
    /// claims the name atomically, so concurrent saves never share a file.
    fn write_new(&self, cutout: &PixelBuffer, stem: &str) -> Result<PathBuf, ImageError> {
        let bytes = encode_png(cutout)?;
        std::fs::create_dir_all(&self.dir)?;

        for n in 0..MAX_NAME_ATTEMPTS {
            let name = if n == 0 {
                format!("{stem}.png")
            } else {
                format!("{stem}_{n}.png")
            };
            let file = self.dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&file) {
                Ok(mut handle) => {
                    handle.write_all(&bytes)?;
                    return Ok(file);
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(std::io::Error::new(std::io::ErrorKind::AlreadyExists, format!("no free name for {stem}")).into())
    }
}
