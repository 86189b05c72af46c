//! Hachure fill generation.
//!
//! Fills a polygon with roughly parallel lines at the style's hachure angle,
//! spaced `fill_gap` apart. In handy mode each line gets its own small angle
//! jitter so the shading looks drawn rather than ruled.

use std::f64::consts::PI;

use crate::clip::{clip_line_to_polygon, point_in_polygon};
use crate::geometry::{Line, Point, Polygon};
use crate::rng::Rng;
use crate::style::StyleConfig;

/// Most candidate lines generated for one polygon. Larger shapes get a
/// proportionally wider gap.
pub const MAX_HACHURE_LINES: usize = 10_000;

/// Generate unclipped hachure candidates covering a polygon's bounding box.
///
/// Lines are spread along the normal of the base angle and extend past the
/// bounding box on both sides. When the style is handy and has a non-zero
/// perturbation angle, one value is drawn from `rng` per candidate line.
pub fn generate_hachure_lines(polygon: &Polygon, style: &StyleConfig, rng: &mut Rng) -> Vec<Line> {
    let Some((min_x, min_y, max_x, max_y)) = polygon.bounding_box() else {
        return Vec::new();
    };

    let width = max_x - min_x;
    let height = max_y - min_y;
    let half_diagonal = (width * width + height * height).sqrt() / 2.0;
    if !half_diagonal.is_finite() {
        log::warn!("hachure: polygon extent overflows, skipping fill");
        return Vec::new();
    }

    // Widen the gap rather than emit an unbounded number of lines
    let mut gap = style.fill_gap();
    let half_count = (MAX_HACHURE_LINES / 2) as f64;
    if (half_diagonal + gap) / gap > half_count {
        gap = half_diagonal / (half_count - 1.0);
        log::warn!(
            "hachure: gap {} needs more than {} lines, widened to {}",
            style.fill_gap(),
            MAX_HACHURE_LINES,
            gap
        );
    }

    // Half-diagonal reaches every corner from the center; pad by one gap
    let reach = half_diagonal + gap;

    let base_rad = style.normalized_hachure_angle() * PI / 180.0;
    let perp_x = -base_rad.sin();
    let perp_y = base_rad.cos();

    let center_x = min_x + width / 2.0;
    let center_y = min_y + height / 2.0;

    let jitter = style.is_handy() && style.hachure_perturbation() > 0.0;

    // ## Rust Lesson #19: Integer Math
    //
    // `.ceil()` returns f64, we need to cast to integer.
    // `as usize` is explicit type coercion (no implicit conversions!).
    // Float-to-int casts saturate, the cap above keeps this small anyway.
    let num_lines = ((reach / gap).ceil() as usize).min(MAX_HACHURE_LINES / 2);

    let mut lines = Vec::with_capacity(num_lines * 2);

    // Half-gap phase keeps lines off edges that pass through the box center
    for i in 0..num_lines * 2 {
        let offset = (i as f64 - num_lines as f64 + 0.5) * gap;
        let line_center_x = center_x + perp_x * offset;
        let line_center_y = center_y + perp_y * offset;

        let angle = if jitter {
            base_rad + style.hachure_perturbation() * rng.next_signed() * PI / 180.0
        } else {
            base_rad
        };
        let (dir_y, dir_x) = angle.sin_cos();

        // Jittered lines cross the box at a slant, so give them extra length
        let half_len = reach * 2.0;
        lines.push(Line::new(
            line_center_x - dir_x * half_len,
            line_center_y - dir_y * half_len,
            line_center_x + dir_x * half_len,
            line_center_y + dir_y * half_len,
        ));
    }

    log::trace!("hachure: {} candidate lines", lines.len());
    lines
}

/// Generate hachure lines clipped to the polygon interior.
///
/// Degenerate polygons (zero area, fewer than three vertices) produce no
/// lines and consume no randomness.
pub fn hachure_fill(polygon: &Polygon, style: &StyleConfig, rng: &mut Rng) -> Vec<Line> {
    if polygon.is_degenerate() {
        return Vec::new();
    }

    // Candidates for shapes near the f64 limits can run off to infinity
    generate_hachure_lines(polygon, style, rng)
        .iter()
        .flat_map(|line| clip_line_to_polygon(line, polygon))
        .filter(|line| line.start().is_finite() && line.end().is_finite())
        .collect()
}

/// Join hachure segments into zig-zag polylines.
///
/// Every other segment is reversed so the pen sweeps back and forth instead
/// of lifting between lines. A join that would leave `polygon` (across the
/// notch of a concave shape, or between the two pieces of one clipped line)
/// lifts the pen and starts a new polyline.
pub fn alternate(lines: &[Line], polygon: &Polygon) -> Vec<Vec<Point>> {
    let tolerance = boundary_tolerance(polygon);
    let mut runs: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::with_capacity(lines.len() * 2);

    for (i, line) in lines.iter().enumerate() {
        let (from, to) = if i % 2 == 0 {
            (line.start(), line.end())
        } else {
            (line.end(), line.start())
        };

        if let Some(&last) = current.last() {
            if !join_stays_inside(last, from, polygon, tolerance) {
                runs.push(std::mem::take(&mut current));
            }
        }
        current.push(from);
        current.push(to);
    }

    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn boundary_tolerance(polygon: &Polygon) -> f64 {
    let extent = polygon
        .bounding_box()
        .map(|(min_x, min_y, max_x, max_y)| (max_x - min_x).max(max_y - min_y))
        .unwrap_or(0.0);
    1e-9 * (1.0 + extent)
}

/// Sample the join; each sample must be inside or on the boundary.
fn join_stays_inside(a: Point, b: Point, polygon: &Polygon, tolerance: f64) -> bool {
    [0.25, 0.5, 0.75].iter().all(|&t| {
        let p = Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
        point_in_polygon(p.x, p.y, &polygon.points) || on_boundary(p, polygon, tolerance)
    })
}

fn on_boundary(p: Point, polygon: &Polygon, tolerance: f64) -> bool {
    let n = polygon.points.len();
    (0..n).any(|i| {
        let a = polygon.points[i];
        let b = polygon.points[(i + 1) % n];
        distance_to_segment(p, a, b) <= tolerance
    })
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}

// ============================================================================
// TESTS
// ============================================================================
