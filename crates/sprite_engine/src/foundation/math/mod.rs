//! 2D math types
//!
//! Affine matrices, points and rectangles used for mapping between a sprite's
//! local space, its parent's space and the viewport.

mod matrix;
mod point;
mod rectangle;

pub use matrix::Matrix;
pub use point::Point;
pub use rectangle::Rectangle;

use thiserror::Error;

/// Determinants with an absolute value at or below this are treated as singular
pub const SINGULAR_EPSILON: f32 = 1e-10;

/// Errors raised by geometric operations
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TransformError {
    /// The matrix has no inverse
    #[error("Matrix is not invertible (determinant {determinant})")]
    NotInvertible {
        /// Determinant that failed the singularity check
        determinant: f32,
    },
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians.to_degrees()
}

/// Linear interpolation between `from` and `to`
#[inline]
pub fn lerp(from: f32, to: f32, alpha: f32) -> f32 {
    from + (to - from) * alpha
}
