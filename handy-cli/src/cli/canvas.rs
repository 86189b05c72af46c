//! The host surface: collects strokes, pairs them with paint and writes them
//! out as SVG, JSON or PNG.

use std::path::Path;

use resvg::usvg;
use serde::Serialize;
use tiny_skia::Pixmap;

use handy::{Point, RenderedStroke, StrokeKind, Surface};

use super::error::CliError;

/// Outline paint, 80 gray.
pub const OUTLINE_PAINT: Rgb = Rgb(80, 80, 80);
const OUTLINE_WIDTH: f64 = 1.5;
const FILL_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn to_css(self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }
}

/// Zoom about the canvas center, then pan in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for View {
    fn default() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaintedStroke {
    pub kind: StrokeKind,
    pub paint: Rgb,
    pub points: Vec<Point>,
}

/// A [`Surface`] that remembers every stroke with the paint current when it
/// arrived. Fill strokes take the current fill paint, outlines are always
/// [`OUTLINE_PAINT`].
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub view: View,
    fill_paint: Rgb,
    strokes: Vec<PaintedStroke>,
}

impl Surface for Canvas {
    fn stroke(&mut self, stroke: RenderedStroke) {
        let paint = match stroke.kind {
            StrokeKind::Fill => self.fill_paint,
            StrokeKind::Outline => OUTLINE_PAINT,
        };
        self.strokes.push(PaintedStroke { kind: stroke.kind, paint, points: stroke.points });
    }
}

/// A point in JSON output format.
#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct JsonStroke {
    kind: &'static str,
    points: Vec<JsonPoint>,
}

#[derive(Serialize)]
struct JsonOutput {
    strokes: Vec<JsonStroke>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, view: View) -> Self {
        Self {
            width,
            height,
            view,
            fill_paint: OUTLINE_PAINT,
            strokes: Vec::new(),
        }
    }

    pub fn set_fill_paint(&mut self, paint: Rgb) {
        self.fill_paint = paint;
    }

    pub fn strokes(&self) -> &[PaintedStroke] {
        &self.strokes
    }

    fn transform(&self) -> String {
        let cx = self.width as f64 / 2.0;
        let cy = self.height as f64 / 2.0;
        format!(
            "translate({:.3},{:.3}) scale({}) translate({:.3},{:.3})",
            cx + self.view.pan_x,
            cy + self.view.pan_y,
            self.view.zoom,
            -cx,
            -cy
        )
    }

    /// One `<polyline>` per stroke, in paint order.
    pub fn to_svg(&self) -> String {
        // Keep line widths constant on screen whatever the zoom
        let zoom = if self.view.zoom > 0.0 { self.view.zoom } else { 1.0 };

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<rect width="100%" height="100%" fill="white"/>
<g transform="{}" fill="none" stroke-linecap="round" stroke-linejoin="round">
"#,
            self.transform(),
            w = self.width,
            h = self.height,
        ));

        for stroke in &self.strokes {
            if stroke.points.is_empty() {
                continue;
            }
            let width = match stroke.kind {
                StrokeKind::Fill => FILL_WIDTH,
                StrokeKind::Outline => OUTLINE_WIDTH,
            } / zoom;

            let points: String = stroke
                .points
                .iter()
                .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");

            svg.push_str(&format!(
                "  <polyline points=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                points,
                stroke.paint.to_css(),
                width
            ));
        }

        svg.push_str("</g>\n</svg>\n");
        svg
    }

    /// Strokes as `{strokes: [{kind, points: [{x, y}]}]}`, in drawing space.
    pub fn to_json(&self) -> Result<String, CliError> {
        let output = JsonOutput {
            strokes: self
                .strokes
                .iter()
                .map(|s| JsonStroke {
                    kind: match s.kind {
                        StrokeKind::Fill => "fill",
                        StrokeKind::Outline => "outline",
                    },
                    points: s.points.iter().map(|p| JsonPoint { x: p.x, y: p.y }).collect(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    /// Rasterize the SVG rendition with resvg and save it as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), CliError> {
        let svg = self.to_svg();
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_str(&svg, &options)?;

        let mut pixmap = Pixmap::new(self.width.max(1), self.height.max(1))
            .ok_or_else(|| CliError::Raster(format!("bad canvas size {}x{}", self.width, self.height)))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        pixmap.save_png(path).map_err(|e| CliError::Raster(e.to_string()))?;
        log::info!("wrote {}x{} PNG to {}", self.width, self.height, path.display());
        Ok(())
    }
}
