//! The renderer facade.
//!
//! [`HandyRenderer`] owns the style, the perturbation stream and the host's
//! drawing surface. Each `draw_*` call builds ideal geometry, hachures it if
//! fill is on, sketches everything and hands the strokes to the surface:
//! fill first, outline last, so the outline always sits on top.
//!
//! The renderer is not internally synchronized. Use one per thread, or put
//! it behind a mutex and hold the lock for the whole draw call.

use crate::arc::{ArcMode, ArcSpec};
use crate::error::GeometryError;
use crate::geometry::{Outline, Point};
use crate::hatch::{alternate, hachure_fill};
use crate::rng::Rng;
use crate::shape::{Shape, ShapeGeometry};
use crate::sketchy::{sketch_lines, sketch_outline};
use crate::style::StyleConfig;

/// What a stroke depicts. The host pairs it with the matching paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Fill,
    Outline,
}

/// One polyline ready for the host to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStroke {
    pub kind: StrokeKind,
    pub points: Vec<Point>,
}

/// The host drawing surface.
///
/// Strokes arrive in paint order and are not retained by the renderer.
pub trait Surface {
    fn stroke(&mut self, stroke: RenderedStroke);
}

/// Collecting strokes is handy for tests and for hosts that batch.
impl Surface for Vec<RenderedStroke> {
    fn stroke(&mut self, stroke: RenderedStroke) {
        self.push(stroke);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn stroke(&mut self, stroke: RenderedStroke) {
        (**self).stroke(stroke);
    }
}

/// Draws primitives in a sketchy, hand-drawn style.
///
/// # Example
/// ```
/// use handy::{HandyRenderer, RenderedStroke, StrokeKind};
///
/// let mut renderer = HandyRenderer::new(Vec::<RenderedStroke>::new());
/// renderer.set_seed(9876);
/// renderer.set_hachure_angle(-45.0);
/// renderer.draw_arc(400.0, 400.0, 100.0, 150.0, 0.0, std::f64::consts::PI).unwrap();
///
/// let strokes = renderer.into_surface();
/// assert_eq!(strokes.last().map(|s| s.kind), Some(StrokeKind::Outline));
/// ```
pub struct HandyRenderer<S> {
    surface: S,
    style: StyleConfig,
    rng: Rng,
    fill: bool,
    arc_mode: ArcMode,
}

impl<S: Surface> HandyRenderer<S> {
    /// Renderer with default style, default seed and fill on.
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, StyleConfig::default())
    }

    pub fn with_style(surface: S, style: StyleConfig) -> Self {
        Self {
            surface,
            style,
            rng: Rng::default(),
            fill: true,
            arc_mode: ArcMode::default(),
        }
    }

    // ------------------------------------------------------------------
    // Style state
    // ------------------------------------------------------------------

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replace the whole style at once, e.g. from a loaded preset.
    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
    }

    pub fn set_roughness(&mut self, roughness: f64) {
        self.style.set_roughness(roughness);
    }

    pub fn set_hachure_angle(&mut self, degrees: f64) {
        self.style.set_hachure_angle(degrees);
    }

    pub fn set_hachure_perturbation_angle(&mut self, degrees: f64) {
        self.style.set_hachure_perturbation(degrees);
    }

    pub fn set_handy(&mut self, handy: bool) {
        self.style.set_handy(handy);
    }

    pub fn set_fill_gap(&mut self, gap: f64) {
        self.style.set_fill_gap(gap);
    }

    pub fn set_bowing(&mut self, bowing: f64) {
        self.style.set_bowing(bowing);
    }

    pub fn set_max_offset(&mut self, offset: f64) {
        self.style.set_max_offset(offset);
    }

    /// Join hachure lines into zig-zag strokes. The pen still lifts wherever
    /// a join would leave the fill boundary.
    pub fn set_alternating(&mut self, alternating: bool) {
        self.style.set_alternating(alternating);
    }

    /// Reset the perturbation stream. Call before each redraw for stable output.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Mirror of the host's fill/no-fill state used by the plain `draw_*` calls.
    pub fn set_fill(&mut self, fill: bool) {
        self.fill = fill;
    }

    pub fn is_filled(&self) -> bool {
        self.fill
    }

    pub fn set_arc_mode(&mut self, mode: ArcMode) {
        self.arc_mode = mode;
    }

    pub fn arc_mode(&self) -> ArcMode {
        self.arc_mode
    }

    // ------------------------------------------------------------------
    // Surface access
    // ------------------------------------------------------------------

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    /// Draw an arc given its full width and height.
    ///
    /// Filled according to [`set_fill`](Self::set_fill), closed according to
    /// [`set_arc_mode`](Self::set_arc_mode).
    pub fn draw_arc(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        start: f64,
        end: f64,
    ) -> Result<(), GeometryError> {
        let spec = ArcSpec::from_extent(cx, cy, width, height, start, end);
        self.draw_arc_spec(&spec, self.fill)
    }

    pub fn draw_arc_spec(&mut self, spec: &ArcSpec, fill: bool) -> Result<(), GeometryError> {
        let shape = Shape::Arc { spec: *spec, mode: self.arc_mode };
        self.draw_shape(&shape, fill)
    }

    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), GeometryError> {
        let shape = Shape::Line { start: Point::new(x1, y1), end: Point::new(x2, y2) };
        self.draw_shape(&shape, false)
    }

    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), GeometryError> {
        self.draw_shape(&Shape::Rect { x, y, width, height }, self.fill)
    }

    /// Draw an ellipse given its center and full width and height.
    pub fn draw_ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64) -> Result<(), GeometryError> {
        let shape = Shape::Ellipse {
            center: Point::new(cx, cy),
            half_width: width / 2.0,
            half_height: height / 2.0,
        };
        self.draw_shape(&shape, self.fill)
    }

    pub fn draw_polygon(&mut self, points: &[Point]) -> Result<(), GeometryError> {
        self.draw_shape(&Shape::Polygon(points.to_vec()), self.fill)
    }

    /// Draw any shape. Invalid geometry is rejected before any randomness is
    /// consumed or any stroke is emitted.
    pub fn draw_shape(&mut self, shape: &Shape, fill: bool) -> Result<(), GeometryError> {
        let geometry = shape.geometry()?;

        let fill_strokes = if fill { self.fill_strokes(&geometry) } else { Vec::new() };
        let outline_strokes = self.outline_strokes(&geometry);

        log::debug!(
            "drew {}: {} fill strokes, {} outline strokes",
            shape_name(shape),
            fill_strokes.len(),
            outline_strokes.len()
        );

        for points in fill_strokes {
            self.surface.stroke(RenderedStroke { kind: StrokeKind::Fill, points });
        }
        for points in outline_strokes {
            self.surface.stroke(RenderedStroke { kind: StrokeKind::Outline, points });
        }

        Ok(())
    }

    fn fill_strokes(&mut self, geometry: &ShapeGeometry) -> Vec<Vec<Point>> {
        let Some(polygon) = &geometry.fill else {
            return Vec::new();
        };

        let lines = hachure_fill(polygon, &self.style, &mut self.rng);
        if lines.is_empty() {
            return Vec::new();
        }

        if self.style.is_alternating() {
            alternate(&lines, polygon)
                .into_iter()
                .flat_map(|run| sketch_outline(&Outline::open(run), &self.style, &mut self.rng))
                .collect()
        } else {
            sketch_lines(&lines, &self.style, &mut self.rng)
        }
    }

    fn outline_strokes(&mut self, geometry: &ShapeGeometry) -> Vec<Vec<Point>> {
        let edges = if geometry.straight { geometry.outline.edges() } else { Vec::new() };

        if edges.is_empty() {
            sketch_outline(&geometry.outline, &self.style, &mut self.rng)
        } else {
            sketch_lines(&edges, &self.style, &mut self.rng)
        }
    }
}

fn shape_name(shape: &Shape) -> &'static str {
    match shape {
        Shape::Line { .. } => "line",
        Shape::Rect { .. } => "rect",
        Shape::Ellipse { .. } => "ellipse",
        Shape::Arc { .. } => "arc",
        Shape::Polygon(_) => "polygon",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn renderer() -> HandyRenderer<Vec<RenderedStroke>> {
        let mut renderer = HandyRenderer::new(Vec::new());
        renderer.set_seed(9876);
        renderer.set_hachure_angle(-45.0);
        renderer
    }

    #[test]
    fn fill_is_emitted_before_outline() {
        let mut r = renderer();
        r.draw_arc(400.0, 400.0, 100.0, 150.0, 0.0, PI).unwrap();
        let strokes = r.into_surface();

        let first_outline = strokes.iter().position(|s| s.kind == StrokeKind::Outline).unwrap();
        assert!(first_outline > 0);
        assert!(strokes[..first_outline].iter().all(|s| s.kind == StrokeKind::Fill));
        assert!(strokes[first_outline..].iter().all(|s| s.kind == StrokeKind::Outline));
    }

    #[test]
    fn no_fill_means_outline_only() {
        let mut r = renderer();
        r.set_fill(false);
        r.draw_arc(400.0, 400.0, 100.0, 150.0, 0.0, PI).unwrap();
        assert!(r.surface().iter().all(|s| s.kind == StrokeKind::Outline));
    }

    #[test]
    fn reseeding_reproduces_output() {
        let mut r = renderer();
        r.draw_arc(100.0, 100.0, 80.0, 60.0, 0.5, 2.0).unwrap();
        let first = std::mem::take(r.surface_mut());

        r.set_seed(9876);
        r.draw_arc(100.0, 100.0, 80.0, 60.0, 0.5, 2.0).unwrap();
        assert_eq!(&first, r.surface());
    }

    #[test]
    fn without_reseed_output_changes() {
        let mut r = renderer();
        r.draw_arc(100.0, 100.0, 80.0, 60.0, 0.5, 2.0).unwrap();
        let first = std::mem::take(r.surface_mut());

        r.draw_arc(100.0, 100.0, 80.0, 60.0, 0.5, 2.0).unwrap();
        assert_ne!(&first, r.surface());
    }

    #[test]
    fn invalid_geometry_emits_nothing_and_keeps_stream() {
        let mut r = renderer();
        let err = r.draw_arc(f64::NAN, 0.0, 10.0, 10.0, 0.0, PI);
        assert!(err.is_err());
        assert!(r.surface().is_empty());

        r.draw_arc(50.0, 50.0, 40.0, 40.0, 0.0, PI).unwrap();

        let mut fresh = renderer();
        fresh.draw_arc(50.0, 50.0, 40.0, 40.0, 0.0, PI).unwrap();
        assert_eq!(r.surface(), fresh.surface());
    }

    #[test]
    fn line_is_never_filled() {
        let mut r = renderer();
        r.draw_line(0.0, 0.0, 100.0, 50.0).unwrap();
        assert_eq!(r.surface().len(), 2); // two pen passes
        assert!(r.surface().iter().all(|s| s.kind == StrokeKind::Outline));
    }

    #[test]
    fn rect_edges_are_sketched_separately() {
        let mut r = renderer();
        r.set_fill(false);
        r.draw_rect(0.0, 0.0, 100.0, 50.0).unwrap();
        assert_eq!(r.surface().len(), 8); // 4 edges x 2 passes
    }

    #[test]
    fn exact_polygon_matches_input_edges() {
        let mut r = renderer();
        r.set_handy(false);
        r.set_fill(false);
        let triangle = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
        r.draw_polygon(&triangle).unwrap();

        let strokes = r.into_surface();
        assert_eq!(strokes.len(), 3);
        assert_eq!(strokes[0].points, vec![triangle[0], triangle[1]]);
        assert_eq!(strokes[2].points, vec![triangle[2], triangle[0]]);
    }

    #[test]
    fn alternating_fill_is_one_polyline_per_pass() {
        let mut r = renderer();
        r.set_alternating(true);
        r.draw_ellipse(200.0, 200.0, 120.0, 80.0).unwrap();

        let fills: Vec<_> = r.surface().iter().filter(|s| s.kind == StrokeKind::Fill).collect();
        assert_eq!(fills.len(), crate::sketchy::STROKE_PASSES);
        assert!(fills[0].points.len() > 4);
    }

    #[test]
    fn alternating_fill_lifts_pen_over_notch() {
        let mut r = renderer();
        r.set_handy(false);
        r.set_alternating(true);
        r.set_hachure_angle(0.0);
        let u_shape = [
            Point::new(0.0, 0.0),
            Point::new(60.0, 0.0),
            Point::new(60.0, 60.0),
            Point::new(40.0, 60.0),
            Point::new(40.0, 20.0),
            Point::new(20.0, 20.0),
            Point::new(20.0, 60.0),
            Point::new(0.0, 60.0),
        ];
        r.draw_polygon(&u_shape).unwrap();

        let fills: Vec<_> = r.surface().iter().filter(|s| s.kind == StrokeKind::Fill).collect();
        assert!(fills.len() > 1);

        // The notch is 20 < x < 40, y > 20
        for stroke in fills {
            for pair in stroke.points.windows(2) {
                let mid = Point::new((pair[0].x + pair[1].x) / 2.0, (pair[0].y + pair[1].y) / 2.0);
                let in_notch = mid.x > 20.0 + 1e-6 && mid.x < 40.0 - 1e-6 && mid.y > 20.0 + 1e-6;
                assert!(!in_notch, "stroke crosses the notch at {mid:?}");
            }
        }
    }

    #[test]
    fn arc_mode_changes_outline_closure() {
        let mut r = renderer();
        r.set_handy(false);
        r.set_fill(false);
        r.set_arc_mode(ArcMode::Pie);
        r.draw_arc(0.0, 0.0, 100.0, 100.0, 0.0, PI / 2.0).unwrap();

        let outline = &r.surface()[0].points;
        // Pie: arc, then center, then back to the start
        assert_eq!(outline[outline.len() - 2], Point::new(0.0, 0.0));
        assert_eq!(outline.first(), outline.last());
    }
}
