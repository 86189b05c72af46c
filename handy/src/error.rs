//! Error type for primitive construction.
//!
//! Degenerate shapes are not errors (they render as a dot or with no fill).
//! Only input that would poison the output with NaN is rejected.

use thiserror::Error;

use crate::geometry::Point;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("non-finite {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Reject NaN and infinities in a named geometric parameter.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { field, value })
    }
}

/// Reject computed vertices that overflowed, e.g. `x + width` past `f64::MAX`.
pub(crate) fn ensure_points(field: &'static str, points: &[Point]) -> Result<(), GeometryError> {
    for p in points {
        ensure_finite(field, p.x)?;
        ensure_finite(field, p.y)?;
    }
    Ok(())
}
