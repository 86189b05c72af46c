//! Shape descriptors.
//!
//! Every primitive is one [`Shape`] variant that knows how to describe its
//! ideal boundary. The renderer funnels all of them through the same stroke
//! and hachure generators, so adding a shape means adding a variant here and
//! nothing else.

use crate::arc::{ArcGeometry, ArcMode, ArcSpec};
use crate::error::{ensure_finite, ensure_points, GeometryError};
use crate::geometry::{Outline, Point, Polygon};

/// A primitive the renderer can draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line { start: Point, end: Point },
    /// Axis-aligned rectangle from its top-left corner.
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Ellipse { center: Point, half_width: f64, half_height: f64 },
    Arc { spec: ArcSpec, mode: ArcMode },
    Polygon(Vec<Point>),
}

/// Ideal geometry for one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    pub outline: Outline,
    /// True when the outline is made of straight edges that should each be
    /// sketched as a bowed line rather than traced as a curve.
    pub straight: bool,
    /// Fill boundary, `None` for shapes that cannot be filled.
    pub fill: Option<Polygon>,
}

impl From<ArcGeometry> for ShapeGeometry {
    fn from(arc: ArcGeometry) -> Self {
        Self {
            outline: arc.outline,
            straight: false,
            fill: Some(arc.fill),
        }
    }
}

fn ensure_point(field: &'static str, p: Point) -> Result<Point, GeometryError> {
    ensure_finite(field, p.x)?;
    ensure_finite(field, p.y)?;
    Ok(p)
}

impl Shape {
    /// Build the outline and fill boundary, rejecting non-finite input and
    /// vertices that overflow while being computed.
    pub fn geometry(&self) -> Result<ShapeGeometry, GeometryError> {
        let geometry = self.ideal_geometry()?;
        ensure_points("computed vertex", &geometry.outline.points)?;
        if let Some(fill) = &geometry.fill {
            ensure_points("computed vertex", &fill.points)?;
        }
        Ok(geometry)
    }

    fn ideal_geometry(&self) -> Result<ShapeGeometry, GeometryError> {
        match self {
            Shape::Line { start, end } => {
                let start = ensure_point("line start", *start)?;
                let end = ensure_point("line end", *end)?;
                Ok(ShapeGeometry {
                    outline: Outline::open(vec![start, end]),
                    straight: true,
                    fill: None,
                })
            }
            Shape::Rect { x, y, width, height } => {
                let x = ensure_finite("rect x", *x)?;
                let y = ensure_finite("rect y", *y)?;
                let w = ensure_finite("rect width", *width)?;
                let h = ensure_finite("rect height", *height)?;
                let corners = vec![
                    Point::new(x, y),
                    Point::new(x + w, y),
                    Point::new(x + w, y + h),
                    Point::new(x, y + h),
                ];
                Ok(ShapeGeometry {
                    outline: Outline::closed(corners.clone()),
                    straight: true,
                    fill: Some(Polygon::new(corners)),
                })
            }
            Shape::Ellipse { center, half_width, half_height } => {
                let spec = ArcSpec::new(*center, *half_width, *half_height, 0.0, std::f64::consts::TAU);
                Ok(spec.build(ArcMode::Open)?.into())
            }
            Shape::Arc { spec, mode } => Ok(spec.build(*mode)?.into()),
            Shape::Polygon(points) => {
                for p in points {
                    ensure_point("polygon vertex", *p)?;
                }
                Ok(ShapeGeometry {
                    outline: Outline::closed(points.clone()),
                    straight: true,
                    fill: Some(Polygon::new(points.clone())),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_has_no_fill() {
        let shape = Shape::Line { start: Point::new(0.0, 0.0), end: Point::new(10.0, 0.0) };
        let geometry = shape.geometry().unwrap();
        assert!(geometry.fill.is_none());
        assert!(geometry.straight);
        assert_eq!(geometry.outline.edges().len(), 1);
    }

    #[test]
    fn rect_is_closed_with_four_edges() {
        let shape = Shape::Rect { x: 10.0, y: 20.0, width: 30.0, height: 40.0 };
        let geometry = shape.geometry().unwrap();
        assert_eq!(geometry.outline.edges().len(), 4);
        let fill = geometry.fill.unwrap();
        assert!((fill.signed_area().abs() - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn ellipse_is_a_full_closed_arc() {
        let shape = Shape::Ellipse { center: Point::new(0.0, 0.0), half_width: 40.0, half_height: 20.0 };
        let geometry = shape.geometry().unwrap();
        assert!(geometry.outline.closed);
        assert!(!geometry.straight);
        assert!(!geometry.fill.unwrap().is_degenerate());
    }

    #[test]
    fn polygon_rejects_nan_vertex() {
        let shape = Shape::Polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 0.0),
            Point::new(0.0, 10.0),
        ]);
        assert!(shape.geometry().is_err());
    }

    #[test]
    fn overflowing_rect_is_rejected() {
        let shape = Shape::Rect { x: 1e308, y: 0.0, width: 1e308, height: 10.0 };
        let err = shape.geometry().unwrap_err();
        assert!(matches!(err, GeometryError::NonFinite { field: "computed vertex", .. }));
    }

    #[test]
    fn overflowing_arc_is_rejected() {
        let spec = ArcSpec::new(Point::new(1e308, 0.0), 1e308, 10.0, 0.0, 1.0);
        let shape = Shape::Arc { spec, mode: ArcMode::Pie };
        assert!(shape.geometry().is_err());
    }

    #[test]
    fn arc_uses_its_mode() {
        let spec = ArcSpec::from_extent(0.0, 0.0, 100.0, 100.0, 0.0, std::f64::consts::PI);
        let open = Shape::Arc { spec, mode: ArcMode::Open }.geometry().unwrap();
        let pie = Shape::Arc { spec, mode: ArcMode::Pie }.geometry().unwrap();
        assert!(!open.outline.closed);
        assert!(pie.outline.closed);
    }
}
