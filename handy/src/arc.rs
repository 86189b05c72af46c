//! Arc primitive builder.
//!
//! Converts an elliptical arc (center, half-axes, start and end angle) into
//! the straight-segment geometry the stroke and hachure generators work on:
//! a boundary outline for stroking and a polygon for filling.
//!
//! Angles are radians in drawing space. With y pointing down, increasing
//! angles sweep clockwise on screen.

use std::f64::consts::{PI, TAU};

use lyon_geom::{point, vector, Angle};

use crate::error::{ensure_finite, ensure_points, GeometryError};
use crate::geometry::{Outline, Point, Polygon};

/// Fewest segments used for any arc, however short.
pub const MIN_ARC_SEGMENTS: usize = 4;

/// Upper bound on segments so huge arcs stay bounded work.
pub const MAX_ARC_SEGMENTS: usize = 720;

/// Largest angular step between samples.
///
/// Chord error of an ellipse sampled every `π/32` is below 0.13% of the
/// larger half-axis.
pub const MAX_STEP_ANGLE: f64 = PI / 32.0;

/// Longest chord in drawing units before another segment is added.
pub const TARGET_SEGMENT_LENGTH: f64 = 8.0;

/// Half-axes below this on both sides make the arc a single point.
pub const DEGENERATE_RADIUS: f64 = 1e-6;

/// How the ends of a partial arc are closed.
///
/// Full ellipses are closed curves in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcMode {
    /// Open outline; the fill is the pie slice through the center.
    #[default]
    Open,
    /// Outline and fill are closed by the chord between the end points.
    Chord,
    /// Outline and fill are the pie slice through the center.
    Pie,
}

/// An elliptical arc in drawing space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center: Point,
    pub half_width: f64,
    pub half_height: f64,
    /// Start angle, radians.
    pub start: f64,
    /// End angle, radians. The sweep is `end - start`.
    pub end: f64,
}

/// Ideal geometry for one arc.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcGeometry {
    pub outline: Outline,
    pub fill: Polygon,
}

impl ArcSpec {
    pub fn new(center: Point, half_width: f64, half_height: f64, start: f64, end: f64) -> Self {
        Self { center, half_width, half_height, start, end }
    }

    /// Build from full width and height, the way hosts usually describe arcs.
    pub fn from_extent(cx: f64, cy: f64, width: f64, height: f64, start: f64, end: f64) -> Self {
        Self::new(Point::new(cx, cy), width / 2.0, height / 2.0, start, end)
    }

    /// Reject NaN and infinities in any field.
    pub fn validate(&self) -> Result<(), GeometryError> {
        ensure_finite("center x", self.center.x)?;
        ensure_finite("center y", self.center.y)?;
        ensure_finite("half width", self.half_width)?;
        ensure_finite("half height", self.half_height)?;
        ensure_finite("start angle", self.start)?;
        ensure_finite("end angle", self.end)?;
        Ok(())
    }

    /// Start angle folded into [0, 2π).
    pub fn normalized_start(&self) -> f64 {
        self.start.rem_euclid(TAU)
    }

    /// Sweep in [0, 2π].
    ///
    /// Sweeps beyond a full turn are clamped to one turn so nothing is drawn
    /// twice; negative sweeps wrap around (`-π/2` becomes `3π/2`).
    pub fn sweep(&self) -> f64 {
        let sweep = self.end - self.start;
        if sweep >= TAU {
            TAU
        } else if sweep < 0.0 {
            sweep.rem_euclid(TAU)
        } else {
            sweep
        }
    }

    pub fn is_full(&self) -> bool {
        self.sweep() >= TAU
    }

    /// True when both half-axes are too small to trace.
    pub fn is_point(&self) -> bool {
        self.half_width.abs() < DEGENERATE_RADIUS && self.half_height.abs() < DEGENERATE_RADIUS
    }

    /// Arc length estimate from Ramanujan's ellipse perimeter.
    pub fn approximate_length(&self) -> f64 {
        let a = self.half_width.abs();
        let b = self.half_height.abs();
        let perimeter = PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt());
        perimeter * self.sweep() / TAU
    }

    /// Number of straight segments used to trace the arc.
    pub fn segment_count(&self) -> usize {
        let by_angle = (self.sweep() / MAX_STEP_ANGLE).ceil() as usize;
        let by_length = (self.approximate_length() / TARGET_SEGMENT_LENGTH).ceil() as usize;
        by_angle.max(by_length).clamp(MIN_ARC_SEGMENTS, MAX_ARC_SEGMENTS)
    }

    /// Sample points along the arc, start to end inclusive.
    ///
    /// A full ellipse omits the final sample, which would repeat the first.
    /// Degenerate arcs return two coincident points so a dot still renders.
    pub fn sample_points(&self) -> Vec<Point> {
        if self.is_point() {
            return vec![self.center, self.center];
        }

        let arc = lyon_geom::Arc {
            center: point(self.center.x, self.center.y),
            radii: vector(self.half_width.abs(), self.half_height.abs()),
            start_angle: Angle::radians(self.normalized_start()),
            sweep_angle: Angle::radians(self.sweep()),
            x_rotation: Angle::zero(),
        };

        if self.sweep() == 0.0 {
            let p = arc.sample(0.0);
            return vec![Point::new(p.x, p.y), Point::new(p.x, p.y)];
        }

        let steps = self.segment_count();
        let last = if self.is_full() { steps - 1 } else { steps };

        (0..=last)
            .map(|i| {
                let p = arc.sample(i as f64 / steps as f64);
                Point::new(p.x, p.y)
            })
            .collect()
    }

    /// Build the outline and fill boundary for this arc.
    pub fn build(&self, mode: ArcMode) -> Result<ArcGeometry, GeometryError> {
        self.validate()?;

        let arc_points = self.sample_points();
        ensure_points("arc sample", &arc_points)?;

        if self.is_point() || self.is_full() {
            return Ok(ArcGeometry {
                outline: if self.is_point() {
                    Outline::open(arc_points.clone())
                } else {
                    Outline::closed(arc_points.clone())
                },
                fill: Polygon::new(arc_points),
            });
        }

        let mut pie = arc_points.clone();
        pie.push(self.center);

        let geometry = match mode {
            ArcMode::Open => ArcGeometry {
                outline: Outline::open(arc_points),
                fill: Polygon::new(pie),
            },
            ArcMode::Chord => ArcGeometry {
                outline: Outline::closed(arc_points.clone()),
                fill: Polygon::new(arc_points),
            },
            ArcMode::Pie => ArcGeometry {
                outline: Outline::closed(pie.clone()),
                fill: Polygon::new(pie),
            },
        };

        Ok(geometry)
    }
}
