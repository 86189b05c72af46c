//! Arguments and plumbing shared by the drawing commands.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use handy::{HandyRenderer, StyleConfig};

use super::canvas::{Canvas, View};
use super::config::StyleFile;
use super::error::CliError;

/// Perturbation seed used when neither the flags nor the config set one.
pub const DEFAULT_SEED: u64 = 9876;

/// Output format for rendered strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
    Png,
}

/// Style flags. Precedence is flag, then config file, then built-in default.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StyleArgs {
    /// TOML style preset
    #[arg(short = 'c', long = "config", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Seed for the sketchy perturbations
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hachure angle in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub angle: Option<f64>,

    /// Maximum random tilt of each hachure line, degrees
    #[arg(long)]
    pub perturbation: Option<f64>,

    /// Degree of sketchiness, 0 draws exact lines
    #[arg(long)]
    pub roughness: Option<f64>,

    /// Gap between hachure lines
    #[arg(long)]
    pub fill_gap: Option<f64>,

    /// Draw exact geometry instead of sketchy strokes
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub exact: bool,

    /// Join hachure lines into one zig-zag stroke
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub alternating: bool,
}

impl StyleArgs {
    /// Resolve the style and seed and build a renderer drawing onto `canvas`.
    pub fn build_renderer(&self, canvas: Canvas) -> Result<HandyRenderer<Canvas>, CliError> {
        let file = match &self.config {
            Some(path) => StyleFile::load(path)?,
            None => StyleFile::default(),
        };

        let mut style = StyleConfig::default();
        style.set_hachure_angle(-45.0);
        style.set_hachure_perturbation(5.0);
        file.apply(&mut style);

        if let Some(v) = self.angle {
            style.set_hachure_angle(v);
        }
        if let Some(v) = self.perturbation {
            style.set_hachure_perturbation(v);
        }
        if let Some(v) = self.roughness {
            style.set_roughness(v);
        }
        if let Some(v) = self.fill_gap {
            style.set_fill_gap(v);
        }
        if self.exact {
            style.set_handy(false);
        }
        if self.alternating {
            style.set_alternating(true);
        }

        let seed = self.seed.or(file.seed).unwrap_or(DEFAULT_SEED);
        log::debug!("style {style:?}, seed {seed}");

        let mut renderer = HandyRenderer::with_style(canvas, style);
        renderer.set_seed(seed);
        Ok(renderer)
    }
}

/// Zoom and pan applied to the whole drawing.
#[derive(Debug, Clone, clap::Args)]
pub struct ViewArgs {
    #[arg(long, default_value_t = 1.0)]
    pub zoom: f64,

    #[arg(long = "pan-x", default_value_t = 0.0, allow_hyphen_values = true)]
    pub pan_x: f64,

    #[arg(long = "pan-y", default_value_t = 0.0, allow_hyphen_values = true)]
    pub pan_y: f64,
}

impl ViewArgs {
    pub fn view(&self) -> View {
        View { zoom: self.zoom, pan_x: self.pan_x, pan_y: self.pan_y }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    /// Output file, stdout when absent
    #[arg(short = 'o', long = "output", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,
}

impl OutputArgs {
    /// Write the finished canvas in the requested format.
    pub fn write(&self, canvas: &Canvas) -> Result<(), CliError> {
        log::info!("rendered {} strokes", canvas.strokes().len());

        match self.format {
            OutputFormat::Svg => self.emit(&canvas.to_svg()),
            OutputFormat::Json => self.emit(&canvas.to_json()?),
            OutputFormat::Png => {
                let path = self.output.as_ref().ok_or(CliError::PngNeedsFile)?;
                canvas.save_png(path)
            }
        }
    }

    fn emit(&self, text: &str) -> Result<(), CliError> {
        match &self.output {
            Some(path) => {
                fs::write(path, text)?;
                log::info!("wrote {}", path.display());
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
