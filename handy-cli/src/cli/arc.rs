//! Arc command: draw a single arc.

use handy::ArcMode;

use super::canvas::{Canvas, Rgb};
use super::common::{OutputArgs, StyleArgs, ViewArgs};
use super::error::CliError;

/// How the arc is closed, see [`ArcMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModeArg {
    #[default]
    Open,
    Chord,
    Pie,
}

impl From<ModeArg> for ArcMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Open => ArcMode::Open,
            ModeArg::Chord => ArcMode::Chord,
            ModeArg::Pie => ArcMode::Pie,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct ArcArgs {
    #[arg(long, default_value_t = 400.0)]
    pub cx: f64,

    #[arg(long, default_value_t = 400.0)]
    pub cy: f64,

    /// Full width of the ellipse the arc lies on
    #[arg(long, default_value_t = 100.0)]
    pub width: f64,

    /// Full height of the ellipse the arc lies on
    #[arg(long, default_value_t = 150.0)]
    pub height: f64,

    /// Start angle, radians
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub start: f64,

    /// End angle, radians
    #[arg(long, default_value_t = std::f64::consts::PI, allow_hyphen_values = true)]
    pub end: f64,

    /// Hachure the interior
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub fill: bool,

    #[arg(long, value_enum, default_value_t = ModeArg::Open)]
    pub mode: ModeArg,

    #[arg(long = "canvas-width", default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..=16384))]
    pub canvas_width: u32,

    #[arg(long = "canvas-height", default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..=16384))]
    pub canvas_height: u32,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(flatten)]
    pub view: ViewArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute the arc command.
pub fn cmd_arc(args: &ArcArgs) -> Result<(), CliError> {
    let mut canvas = Canvas::new(args.canvas_width, args.canvas_height, args.view.view());
    canvas.set_fill_paint(Rgb(150, 130, 150));

    let mut renderer = args.style.build_renderer(canvas)?;
    renderer.set_arc_mode(args.mode.into());
    renderer.set_fill(args.fill);

    renderer.draw_arc(args.cx, args.cy, args.width, args.height, args.start, args.end)?;

    args.output.write(renderer.surface())
}
