//! # handy
//!
//! Sketchy, hand-drawn rendering of exact vector primitives.
//!
//! Given an ideal shape (an arc, ellipse, rectangle, line or polygon) the
//! renderer produces wobbly outline strokes and slanted hachure fill lines
//! instead of perfect geometry. Output is fully determined by the seed, so a
//! redraw after reseeding looks exactly the same.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod arc;
pub mod clip;
pub mod error;
pub mod geometry;
pub mod hatch;
pub mod render;
pub mod rng;
pub mod shape;
pub mod sketchy;
pub mod style;

// Re-export common types at crate root for convenience.
pub use arc::{ArcGeometry, ArcMode, ArcSpec, MIN_ARC_SEGMENTS};
pub use clip::{clip_line_to_polygon, clip_lines_to_polygon, point_in_polygon};
pub use error::GeometryError;
pub use geometry::{Line, Outline, Point, Polygon};
pub use hatch::{generate_hachure_lines, hachure_fill, MAX_HACHURE_LINES};
pub use render::{HandyRenderer, RenderedStroke, StrokeKind, Surface};
pub use rng::Rng;
pub use shape::{Shape, ShapeGeometry};
pub use sketchy::{sketch_line, sketch_lines, sketch_outline, STROKE_PASSES};
pub use style::StyleConfig;
