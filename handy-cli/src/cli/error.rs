//! Errors surfaced by the `handy` binary.

use std::io;
use std::path::PathBuf;

use handy::GeometryError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid style config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse generated SVG: {0}")]
    Svg(#[from] usvg::Error),

    #[error("failed to rasterize: {0}")]
    Raster(String),

    #[error("PNG output needs a file, pass -o/--output")]
    PngNeedsFile,

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
