//! Arcs command: the arc test scene.
//!
//! Draws `count` randomly placed, randomly coloured arc wedges and then
//! `count` tiny arcs (0 wide, 0.1 high). The tiny ones should collapse to
//! specks when sketchy and show up as dots in exact mode.
//!
//! Placement comes from its own `StdRng` seeded with `--layout-seed`, so the
//! scene stays put while `--seed` changes how it wobbles.

use std::f64::consts::{FRAC_PI_2, PI};

use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

use super::canvas::{Canvas, Rgb};
use super::common::{OutputArgs, StyleArgs, ViewArgs};
use super::error::CliError;

/// Arcs stay this far from the canvas edge.
const MARGIN: f64 = 40.0;
const ARC_SWEEP: f64 = PI * 0.26;

#[derive(Debug, Clone, clap::Args)]
pub struct ArcsArgs {
    /// Number of arcs, and of tiny arcs
    #[arg(long, default_value_t = 40)]
    pub count: usize,

    /// Seed for arc placement and colour
    #[arg(long = "layout-seed", default_value_t = 1245)]
    pub layout_seed: u64,

    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(100..=16384))]
    pub width: u32,

    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(100..=16384))]
    pub height: u32,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(flatten)]
    pub view: ViewArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute the arcs command.
pub fn cmd_arcs(args: &ArcsArgs) -> Result<(), CliError> {
    let canvas = Canvas::new(args.width, args.height, args.view.view());
    let mut renderer = args.style.build_renderer(canvas)?;

    let mut layout = StdRng::seed_from_u64(args.layout_seed);
    let width = args.width as f64;
    let height = args.height as f64;

    log::info!(
        "drawing {} arcs on {}x{} (layout seed {}, seed {})",
        args.count,
        args.width,
        args.height,
        args.layout_seed,
        renderer.seed()
    );

    for _ in 0..args.count {
        let paint = Rgb(
            layout.random_range(100..200),
            layout.random_range(60..200),
            layout.random_range(100..200),
        );
        renderer.surface_mut().set_fill_paint(paint);

        let diameter = layout.random_range(50.0..200.0);
        let start = layout.random_range(0.0..PI * 1.5);
        let x = layout.random_range(MARGIN..width - MARGIN);
        let y = layout.random_range(MARGIN..height - MARGIN);
        let arc_height = layout.random_range(100.0..200.0);

        renderer.draw_arc(x, y, diameter, arc_height, start, start + ARC_SWEEP)?;
    }

    for _ in 0..args.count {
        let x = layout.random_range(MARGIN..width - MARGIN);
        let y = layout.random_range(MARGIN..height - MARGIN);
        renderer.draw_arc(x, y, 0.0, 0.1, 0.0, FRAC_PI_2)?;
    }

    args.output.write(renderer.surface())
}
