//! Line clipping against polygon interiors.
//!
//! Hachure lines are generated unbounded, then cut down to the parts that
//! fall inside the fill boundary. This runs once per candidate line, so it
//! stays allocation-light.

use crate::geometry::{Line, Point, Polygon};

/// Clipped pieces shorter than this are treated as tangent touches and dropped.
pub const MIN_CLIP_LENGTH: f64 = 1e-6;

// ============================================================================
// POINT IN POLYGON (Ray Casting Algorithm)
// ============================================================================
//
// ## Rust Lesson #8: References & Slices
//
// `&[Point]` is a "slice" - a borrowed view into a contiguous sequence.
// It works with Vec<Point>, arrays, or any contiguous memory.

/// Test if a point is inside a polygon using ray casting.
///
/// Casts a ray to the right and counts edge crossings.
/// Odd crossings = inside, even = outside.
#[inline]
pub fn point_in_polygon(px: f64, py: f64, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);

        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

// ============================================================================
// LINE-POLYGON CLIPPING
// ============================================================================

/// Parameters along `line` where it crosses the polygon boundary, sorted.
///
/// `t = 0` is the line start, `t = 1` its end. Each edge is tested against
/// the signed side of its endpoints with a half-open rule (`> 0` vs `<= 0`),
/// so a vertex lying exactly on the line is counted once, never twice. That
/// keeps the crossing count even for closed rings.
pub fn crossing_parameters(line: &Line, polygon: &[Point]) -> Vec<f64> {
    let n = polygon.len();
    if n < 3 {
        return Vec::new();
    }

    let dx = line.x2 - line.x1;
    let dy = line.y2 - line.y1;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return Vec::new();
    }

    // Signed distance (times length) of a point from the infinite line
    let side = |p: &Point| (p.x - line.x1) * dy - (p.y - line.y1) * dx;

    let mut ts = Vec::with_capacity(4);
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        let sa = side(a);
        let sb = side(b);

        if (sa > 0.0) != (sb > 0.0) {
            let u = sa / (sa - sb);
            let ix = a.x + u * (b.x - a.x);
            let iy = a.y + u * (b.y - a.y);
            ts.push(((ix - line.x1) * dx + (iy - line.y1) * dy) / len_sq);
        }
    }

    ts.sort_by(|a, b| a.total_cmp(b));
    ts
}

/// Clip a line to the interior of a polygon.
///
/// Crossings are paired even-odd: the stretch between the first and second
/// crossing is inside, the stretch to the third is outside, and so on. The
/// line is expected to extend past the polygon on both ends; anything beyond
/// `[0, 1]` is clamped back onto the segment.
pub fn clip_line_to_polygon(line: &Line, polygon: &Polygon) -> Vec<Line> {
    if polygon.is_degenerate() {
        return Vec::new();
    }

    // Fast bounding box rejection
    if let Some((min_x, min_y, max_x, max_y)) = polygon.bounding_box() {
        if line.x1.max(line.x2) < min_x
            || line.x1.min(line.x2) > max_x
            || line.y1.max(line.y2) < min_y
            || line.y1.min(line.y2) > max_y
        {
            return Vec::new();
        }
    }

    let ts = crossing_parameters(line, &polygon.points);
    let dx = line.x2 - line.x1;
    let dy = line.y2 - line.y1;

    // ## Rust Lesson #14: Iterators & Collecting
    //
    // .chunks_exact(2) gives non-overlapping pairs: [a,b], [c,d], ...
    // A trailing unpaired crossing (numeric noise) is skipped.

    ts.chunks_exact(2)
        .filter_map(|pair| {
            let t0 = pair[0].clamp(0.0, 1.0);
            let t1 = pair[1].clamp(0.0, 1.0);
            let piece = Line::new(
                line.x1 + dx * t0,
                line.y1 + dy * t0,
                line.x1 + dx * t1,
                line.y1 + dy * t1,
            );
            (piece.length() > MIN_CLIP_LENGTH).then_some(piece)
        })
        .collect()
}

/// Clip multiple lines to a polygon, keeping input order.
pub fn clip_lines_to_polygon(lines: &[Line], polygon: &Polygon) -> Vec<Line> {
    lines
        .iter()
        .flat_map(|line| clip_line_to_polygon(line, polygon))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
    }

    /// A "U" shape: one horizontal line through the arms crosses it twice.
    fn u_shape() -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 7.0),
            Point::new(7.0, 7.0),
            Point::new(7.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
    }

    #[test]
    fn point_inside_square() {
        let sq = square();
        assert!(point_in_polygon(5.0, 5.0, &sq.points));
        assert!(!point_in_polygon(15.0, 5.0, &sq.points));
        assert!(!point_in_polygon(-1.0, 5.0, &sq.points));
    }

    #[test]
    fn line_entirely_outside() {
        let line = Line::new(15.0, 5.0, 20.0, 5.0);
        assert!(clip_line_to_polygon(&line, &square()).is_empty());
    }

    #[test]
    fn line_crosses_polygon() {
        let line = Line::new(-5.0, 5.0, 15.0, 5.0);
        let result = clip_line_to_polygon(&line, &square());
        assert_eq!(result.len(), 1);
        assert!((result[0].x1 - 0.0).abs() < 1e-10);
        assert!((result[0].x2 - 10.0).abs() < 1e-10);
    }

    #[test]
    fn concave_polygon_splits_line() {
        let line = Line::new(-5.0, 3.0, 15.0, 3.0);
        let result = clip_line_to_polygon(&line, &u_shape());
        assert_eq!(result.len(), 2);
        assert!((result[0].x2 - 3.0).abs() < 1e-10);
        assert!((result[1].x1 - 7.0).abs() < 1e-10);
    }

    #[test]
    fn line_through_vertex_stays_paired() {
        // Diagonal passes exactly through two opposite corners
        let line = Line::new(-5.0, -5.0, 15.0, 15.0);
        let result = clip_line_to_polygon(&line, &square());
        assert_eq!(result.len(), 1);
        assert!((result[0].length() - 200f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn tangent_touch_is_dropped() {
        // Touches only the corner (10, 0)
        let line = Line::new(5.0, -5.0, 15.0, 5.0);
        assert!(clip_line_to_polygon(&line, &square()).is_empty());
    }

    #[test]
    fn degenerate_polygon_clips_nothing() {
        let sliver = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 0.0)]);
        let line = Line::new(5.0, -5.0, 5.0, 5.0);
        assert!(clip_line_to_polygon(&line, &sliver).is_empty());
    }

    #[test]
    fn batch_keeps_order() {
        let lines = vec![Line::new(-1.0, 2.0, 11.0, 2.0), Line::new(-1.0, 8.0, 11.0, 8.0)];
        let result = clip_lines_to_polygon(&lines, &square());
        assert_eq!(result.len(), 2);
        assert!(result[0].y1 < result[1].y1);
    }
}
