//! Sketchy/hand-drawn stroke effect.
//!
//! Turns an ideal path into overlapping, slightly wobbly pen passes:
//! - Vertex randomization scaled by roughness
//! - Line bowing (a straight line sags a little at its middle)
//! - Double-stroke effect (a second, calmer pass over the first)
//!
//! # Example
//! ```
//! use handy::sketchy::sketch_line;
//! use handy::{Line, Rng, StyleConfig};
//!
//! let line = Line::new(0.0, 0.0, 100.0, 100.0);
//! let passes = sketch_line(&line, &StyleConfig::default(), &mut Rng::new(42));
//! assert_eq!(passes.len(), 2);
//! ```

use crate::geometry::{Line, Outline, Point};
use crate::rng::Rng;
use crate::style::StyleConfig;

/// Number of overlapping pen passes drawn for each perturbed stroke.
pub const STROKE_PASSES: usize = 2;

/// Amplitude multiplier for each pass. Later passes wobble less.
const PASS_SCALE: [f64; STROKE_PASSES] = [1.0, 0.5];

/// Weight given to a fresh offset versus the previous vertex's offset.
///
/// Neighbouring vertices move together, which reads as hand tremor rather
/// than noise along densely sampled curves.
const TREMOR_BLEND: f64 = 0.5;

/// Largest vertex offset for a path of the given size.
///
/// Short paths wobble less: the offset never exceeds a tenth of the path's
/// extent, so a tiny arc does not explode into a scribble. Linear in
/// roughness, which keeps displacement monotonic in it.
#[inline]
pub fn amplitude(style: &StyleConfig, extent: f64) -> f64 {
    style.roughness() * style.max_offset().min(extent / 10.0)
}

/// Perturb an ideal outline into one or more hand-drawn passes.
///
/// Exact mode (`handy == false`) and zero roughness both return the ideal
/// points unchanged as a single pass, without touching `rng`. Closed outlines
/// come back closed: each pass ends on its own perturbed first vertex.
pub fn sketch_outline(outline: &Outline, style: &StyleConfig, rng: &mut Rng) -> Vec<Vec<Point>> {
    if outline.points.is_empty() {
        return Vec::new();
    }

    if !style.perturbs() {
        let mut points = outline.points.clone();
        if outline.closed {
            points.push(outline.points[0]);
        }
        return vec![points];
    }

    let base = amplitude(style, outline.extent());

    PASS_SCALE
        .iter()
        .map(|scale| perturb_points(&outline.points, outline.closed, base * scale, rng))
        .collect()
}

fn perturb_points(points: &[Point], closed: bool, amp: f64, rng: &mut Rng) -> Vec<Point> {
    let mut result = Vec::with_capacity(points.len() + 1);
    let (mut off_x, mut off_y) = (0.0, 0.0);

    for (i, p) in points.iter().enumerate() {
        let fresh_x = amp * rng.next_signed();
        let fresh_y = amp * rng.next_signed();

        if i == 0 {
            off_x = fresh_x;
            off_y = fresh_y;
        } else {
            off_x = off_x * (1.0 - TREMOR_BLEND) + fresh_x * TREMOR_BLEND;
            off_y = off_y * (1.0 - TREMOR_BLEND) + fresh_y * TREMOR_BLEND;
        }

        result.push(Point::new(p.x + off_x, p.y + off_y));
    }

    if closed {
        let first = result[0];
        result.push(first);
    }

    result
}

/// Apply sketchy effect to a single straight line.
///
/// Each pass is `start, bowed midpoint, end` with randomized endpoints.
/// Exact mode returns the line itself as one two-point pass.
pub fn sketch_line(line: &Line, style: &StyleConfig, rng: &mut Rng) -> Vec<Vec<Point>> {
    if !style.perturbs() {
        return vec![vec![line.start(), line.end()]];
    }

    let dx = line.x2 - line.x1;
    let dy = line.y2 - line.y1;
    let length = (dx * dx + dy * dy).sqrt();

    let base = amplitude(style, length);

    // Perpendicular unit vector for bowing; a zero-length line does not bow
    let (perp_x, perp_y) = if length > 0.0 {
        (-dy / length, dx / length)
    } else {
        (0.0, 0.0)
    };
    let bow_base = style.roughness() * style.bowing() * style.max_offset() * length / 200.0;

    let mut passes = Vec::with_capacity(STROKE_PASSES);
    for scale in PASS_SCALE {
        let amp = base * scale;
        let start = Point::new(
            line.x1 + amp * rng.next_signed(),
            line.y1 + amp * rng.next_signed(),
        );
        let end = Point::new(
            line.x2 + amp * rng.next_signed(),
            line.y2 + amp * rng.next_signed(),
        );
        let bow = bow_base * scale * rng.next_signed();
        let mid = Point::new(
            (start.x + end.x) / 2.0 + perp_x * bow,
            (start.y + end.y) / 2.0 + perp_y * bow,
        );

        passes.push(vec![start, mid, end]);
    }

    passes
}

/// Apply sketchy effect to all lines, in order.
pub fn sketch_lines(lines: &[Line], style: &StyleConfig, rng: &mut Rng) -> Vec<Vec<Point>> {
    lines
        .iter()
        .flat_map(|line| sketch_line(line, style, rng))
        .collect()
}

/// Furthest any sketched vertex can land from its ideal position.
///
/// `length` is the longest straight line that will be sketched (bowing
/// grows with it). Useful for expanding bounds before hit-testing or
/// clipping output.
pub fn max_displacement(style: &StyleConfig, length: f64) -> f64 {
    if !style.perturbs() {
        return 0.0;
    }
    // Independent x and y offsets, each up to the full amplitude
    let vertex = style.roughness() * style.max_offset() * std::f64::consts::SQRT_2;
    let bow = style.roughness() * style.bowing() * style.max_offset() * length / 200.0;
    vertex + bow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Outline {
        Outline::open(vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 20.0),
            Point::new(100.0, 0.0),
            Point::new(150.0, 20.0),
        ])
    }

    fn displacement(ideal: &[Point], sketched: &[Point]) -> f64 {
        ideal
            .iter()
            .zip(sketched)
            .map(|(a, b)| a.distance(*b))
            .sum::<f64>()
            / ideal.len() as f64
    }

    #[test]
    fn sketch_produces_two_passes() {
        let passes = sketch_outline(&zigzag(), &StyleConfig::default(), &mut Rng::new(42));
        assert_eq!(passes.len(), STROKE_PASSES);
        assert!(passes.iter().all(|p| p.len() == 4));
    }

    #[test]
    fn exact_mode_is_passthrough() {
        let mut style = StyleConfig::default();
        style.set_handy(false);

        let mut rng = Rng::new(42);
        let passes = sketch_outline(&zigzag(), &style, &mut rng);
        assert_eq!(passes, vec![zigzag().points]);

        // Stream untouched
        let mut fresh = Rng::new(42);
        assert_eq!(rng.next_u64(), fresh.next_u64());
    }

    #[test]
    fn zero_roughness_is_passthrough() {
        let mut style = StyleConfig::default();
        style.set_roughness(0.0);
        let line = Line::new(0.0, 0.0, 100.0, 0.0);
        let passes = sketch_line(&line, &style, &mut Rng::new(1));
        assert_eq!(passes, vec![vec![line.start(), line.end()]]);
    }

    #[test]
    fn closed_outline_ends_on_first_vertex() {
        let square = Outline::closed(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ]);
        for pass in sketch_outline(&square, &StyleConfig::default(), &mut Rng::new(3)) {
            assert_eq!(pass.len(), 5);
            assert_eq!(pass.first(), pass.last());
        }
    }

    #[test]
    fn deterministic_with_seed() {
        let style = StyleConfig::default();
        let first = sketch_outline(&zigzag(), &style, &mut Rng::new(12345));
        let second = sketch_outline(&zigzag(), &style, &mut Rng::new(12345));
        assert_eq!(first, second);
    }

    #[test]
    fn offsets_are_bounded_by_amplitude() {
        let style = StyleConfig::default();
        let outline = zigzag();
        let bound = amplitude(&style, outline.extent());
        for pass in sketch_outline(&outline, &style, &mut Rng::new(8)) {
            for (ideal, moved) in outline.points.iter().zip(&pass) {
                assert!((moved.x - ideal.x).abs() <= bound);
                assert!((moved.y - ideal.y).abs() <= bound);
            }
        }
    }

    #[test]
    fn roughness_affects_variation() {
        let outline = zigzag();
        let mut smooth = StyleConfig::default();
        smooth.set_roughness(0.5);
        let mut rough = StyleConfig::default();
        rough.set_roughness(3.0);

        let smooth_pass = &sketch_outline(&outline, &smooth, &mut Rng::new(42))[0];
        let rough_pass = &sketch_outline(&outline, &rough, &mut Rng::new(42))[0];

        assert!(displacement(&outline.points, rough_pass) > displacement(&outline.points, smooth_pass));
    }

    #[test]
    fn coincident_points_are_kept() {
        let dot = Outline::open(vec![Point::new(5.0, 5.0), Point::new(5.0, 5.0)]);
        let passes = sketch_outline(&dot, &StyleConfig::default(), &mut Rng::new(1));
        assert!(!passes.is_empty());
        // Zero extent means zero amplitude: the dot stays put
        assert!(passes.iter().flatten().all(|p| *p == Point::new(5.0, 5.0)));
    }

    #[test]
    fn line_is_split_at_bowed_midpoint() {
        let line = Line::new(0.0, 0.0, 100.0, 0.0);
        let passes = sketch_line(&line, &StyleConfig::default(), &mut Rng::new(9));
        assert_eq!(passes.len(), STROKE_PASSES);
        for pass in &passes {
            assert_eq!(pass.len(), 3);
            assert!(pass[1].x > 40.0 && pass[1].x < 60.0);
        }
    }

    #[test]
    fn sketch_lines_flattens_passes() {
        let lines = vec![Line::new(0.0, 0.0, 100.0, 0.0), Line::new(0.0, 10.0, 100.0, 10.0)];
        let passes = sketch_lines(&lines, &StyleConfig::default(), &mut Rng::new(2));
        assert_eq!(passes.len(), 2 * STROKE_PASSES);
    }

    #[test]
    fn max_displacement_covers_sketched_line() {
        let style = StyleConfig::default();
        let line = Line::new(0.0, 0.0, 150.0, 0.0);
        let bound = max_displacement(&style, line.length());
        for pass in sketch_line(&line, &style, &mut Rng::new(11)) {
            assert!(pass[0].distance(line.start()) <= bound);
            assert!(pass[2].distance(line.end()) <= bound);
            assert!(pass[1].distance(line.midpoint()) <= bound);
        }
    }
}
