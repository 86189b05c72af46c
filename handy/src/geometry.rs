//! Core geometry types for handy.
//!
//! Everything here lives in drawing-space coordinates: whatever pan/zoom the
//! host applies has already happened before a primitive reaches us.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = can duplicate the value (Copy = implicitly)
//! - `PartialEq` = can compare with `==`

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A closed polygon used as a fill boundary.
///
/// The closing edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub points: Vec<Point>,
}

/// An ideal (unperturbed) path: open for strokes, closed for boundaries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    pub points: Vec<Point>,
    pub closed: bool,
}

/// Axis-aligned bounds as (min_x, min_y, max_x, max_y).
pub type Bounds = (f64, f64, f64, f64);

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a line between two points.
    #[inline]
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn bounding_box(&self) -> Option<Bounds> {
        bounds_of_points(&self.points)
    }

    /// Signed area (shoelace). Positive = counter-clockwise in a y-up frame.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area_of_points(&self.points)
    }

    /// True when the polygon encloses no measurable area.
    ///
    /// Slivers, collinear rings and rings with fewer than three vertices all
    /// count as degenerate and produce no hachure fill.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3 || self.signed_area().abs() < 1e-9
    }
}

impl Outline {
    pub fn open(points: Vec<Point>) -> Self {
        Self { points, closed: false }
    }

    pub fn closed(points: Vec<Point>) -> Self {
        Self { points, closed: true }
    }

    pub fn bounding_box(&self) -> Option<Bounds> {
        bounds_of_points(&self.points)
    }

    /// Straight edges between consecutive points, including the closing edge.
    pub fn edges(&self) -> Vec<Line> {
        let mut edges: Vec<Line> = self
            .points
            .windows(2)
            .map(|pair| Line::between(pair[0], pair[1]))
            .collect();
        if self.closed && self.points.len() > 2 {
            if let (Some(&last), Some(&first)) = (self.points.last(), self.points.first()) {
                edges.push(Line::between(last, first));
            }
        }
        edges
    }

    /// Length of the bounding box diagonal, zero for empty or single-point paths.
    pub fn extent(&self) -> f64 {
        self.bounding_box()
            .map(|(min_x, min_y, max_x, max_y)| {
                let width = max_x - min_x;
                let height = max_y - min_y;
                (width * width + height * height).sqrt()
            })
            .unwrap_or(0.0)
    }
}

/// Bounding box of a point sequence, `None` when empty.
pub fn bounds_of_points(points: &[Point]) -> Option<Bounds> {
    if points.is_empty() {
        return None;
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}

/// Calculate signed area of a point sequence using the shoelace formula.
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}
