use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{Geometry, NnzSource};

pub const DEFAULT_OUTPUT: &str = "plot.png";

/// Largest accepted figure side in pixels; the bitmap is held in memory as RGB.
pub const MAX_DIMENSION: u32 = 16_384;

/// Image extensions the bitmap backend can encode.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "bmp", "jpg", "jpeg"];

/// Run parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotParams {
    /// Figure destination; overwritten on every run
    pub output: PathBuf,
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    pub nnz_source: NnzSource,
    pub geometry: Geometry,
    /// Open the interactive viewer after saving
    pub show: bool,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: 1200,
            height: 500,
            nnz_source: NnzSource::Derived,
            geometry: Geometry::Square,
            show: true,
        }
    }
}

impl PlotParams {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        info!("Loading config: {:?}", path);
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        for (arg, size) in [("width", self.width), ("height", self.height)] {
            if size == 0 || size > MAX_DIMENSION {
                return Err(Error::InvalidArgument {
                    arg,
                    value: size.to_string(),
                });
            }
        }

        let supported = self
            .output
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if !supported {
            return Err(Error::InvalidArgument {
                arg: "output",
                value: self.output.display().to_string(),
            });
        }
        Ok(())
    }
}
