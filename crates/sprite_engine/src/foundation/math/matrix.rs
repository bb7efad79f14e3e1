//! 2D affine matrix
//!
//! The matrix is stored as the two top rows of a 3x3 homogeneous matrix:
//!
//! ```text
//! | m00 m01 m02 |
//! | m10 m11 m12 |
//! |  0   0   1  |
//! ```
//!
//! Points are column vectors, so `a.mult_matrix(&b)` yields `a * b`, which
//! applies `b` first and then `a`.

use super::{Point, TransformError, SINGULAR_EPSILON};

/// 2x3 affine transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    /// Horizontal scale / rotation (a)
    pub m00: f32,
    /// Vertical skew / rotation (b)
    pub m10: f32,
    /// Horizontal skew / rotation (c)
    pub m01: f32,
    /// Vertical scale / rotation (d)
    pub m11: f32,
    /// Horizontal translation (e)
    pub m02: f32,
    /// Vertical translation (f)
    pub m12: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    /// The identity transform
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Create a matrix from its components in `a, b, c, d, e, f` order
    pub const fn new(m00: f32, m10: f32, m01: f32, m11: f32, m02: f32, m12: f32) -> Self {
        Self { m00, m10, m01, m11, m02, m12 }
    }

    /// Overwrite every component, in `a, b, c, d, e, f` order
    pub fn set(&mut self, m00: f32, m10: f32, m01: f32, m11: f32, m02: f32, m12: f32) -> &mut Self {
        *self = Self::new(m00, m10, m01, m11, m02, m12);
        self
    }

    /// Reset to the identity transform
    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Set this matrix to `translate(x, y) * rotate(rotation) * scale(scale_x, scale_y)`.
    /// `rotation` is in radians.
    pub fn compose(&mut self, x: f32, y: f32, scale_x: f32, scale_y: f32, rotation: f32) -> &mut Self {
        let (sin, cos) = rotation.sin_cos();
        self.set(cos * scale_x, sin * scale_x, -sin * scale_y, cos * scale_y, x, y)
    }

    /// Append a translation, applied before the current transform
    pub fn translate(&mut self, x: f32, y: f32) -> &mut Self {
        self.m02 += self.m00 * x + self.m01 * y;
        self.m12 += self.m10 * x + self.m11 * y;
        self
    }

    /// Append a scale, applied before the current transform
    pub fn scale(&mut self, x: f32, y: f32) -> &mut Self {
        self.m00 *= x;
        self.m10 *= x;
        self.m01 *= y;
        self.m11 *= y;
        self
    }

    /// Append a rotation in radians, applied before the current transform.
    /// Positive angles rotate clockwise in a y-down viewport.
    pub fn rotate(&mut self, radians: f32) -> &mut Self {
        let (sin, cos) = radians.sin_cos();
        let (m00, m10, m01, m11) = (self.m00, self.m10, self.m01, self.m11);
        self.m00 = m00 * cos + m01 * sin;
        self.m10 = m10 * cos + m11 * sin;
        self.m01 = m01 * cos - m00 * sin;
        self.m11 = m11 * cos - m10 * sin;
        self
    }

    /// Determinant of the linear part
    pub fn determinant(&self) -> f32 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Whether the determinant is large enough to invert
    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() > SINGULAR_EPSILON
    }

    /// Invert in place. A singular matrix is left untouched.
    pub fn invert(&mut self) -> Result<&mut Self, TransformError> {
        *self = self.inverse()?;
        Ok(self)
    }

    /// The inverse transform
    pub fn inverse(&self) -> Result<Self, TransformError> {
        let det = self.determinant();
        if det.abs() <= SINGULAR_EPSILON {
            return Err(TransformError::NotInvertible { determinant: det });
        }

        Ok(Self::new(
            self.m11 / det,
            -self.m10 / det,
            -self.m01 / det,
            self.m00 / det,
            (self.m01 * self.m12 - self.m11 * self.m02) / det,
            (self.m10 * self.m02 - self.m00 * self.m12) / det,
        ))
    }

    /// Replace self with `self * other`, so `other` applies first
    pub fn mult_matrix(&mut self, other: &Self) -> &mut Self {
        *self = Self::multiply(self, other);
        self
    }

    /// Product `lhs * rhs`
    pub fn multiply(lhs: &Self, rhs: &Self) -> Self {
        Self::new(
            lhs.m00 * rhs.m00 + lhs.m01 * rhs.m10,
            lhs.m10 * rhs.m00 + lhs.m11 * rhs.m10,
            lhs.m00 * rhs.m01 + lhs.m01 * rhs.m11,
            lhs.m10 * rhs.m01 + lhs.m11 * rhs.m11,
            lhs.m00 * rhs.m02 + lhs.m01 * rhs.m12 + lhs.m02,
            lhs.m10 * rhs.m02 + lhs.m11 * rhs.m12 + lhs.m12,
        )
    }

    /// Map a point through this transform
    pub fn transform(&self, x: f32, y: f32) -> Point {
        Point::new(
            self.m00 * x + self.m01 * y + self.m02,
            self.m10 * x + self.m11 * y + self.m12,
        )
    }

    /// Map a point through the inverse of this transform without building the
    /// inverse matrix. Returns `None` for a singular matrix.
    pub fn inverse_transform(&self, x: f32, y: f32) -> Option<Point> {
        let det = self.determinant();
        if det.abs() <= SINGULAR_EPSILON {
            return None;
        }

        let dx = x - self.m02;
        let dy = y - self.m12;
        Some(Point::new(
            (self.m11 * dx - self.m01 * dy) / det,
            (self.m00 * dy - self.m10 * dx) / det,
        ))
    }

    /// Map each `(x, y)` pair of a flat coordinate list in place
    pub fn transform_array(&self, points: &mut [f32]) {
        for pair in points.chunks_exact_mut(2) {
            let p = self.transform(pair[0], pair[1]);
            pair[0] = p.x;
            pair[1] = p.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Matrix {
        let mut m = Matrix::IDENTITY;
        m.translate(40.0, -12.0).rotate(0.7).scale(2.0, 0.5);
        m
    }

    #[test]
    fn test_identity_transform() {
        let p = Matrix::IDENTITY.transform(3.0, 4.0);
        assert_eq!(p, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_mult_matrix_applies_other_first() {
        let mut translate = Matrix::IDENTITY;
        translate.translate(10.0, 0.0);
        let mut scale = Matrix::IDENTITY;
        scale.scale(2.0, 2.0);

        // translate * scale: scale first, then translate
        let p = Matrix::multiply(&translate, &scale).transform(1.0, 1.0);
        assert_relative_eq!(p.x, 12.0);
        assert_relative_eq!(p.y, 2.0);

        let mut m = scale;
        m.mult_matrix(&translate);
        let p = m.transform(1.0, 1.0);
        assert_relative_eq!(p.x, 22.0);
        assert_relative_eq!(p.y, 2.0);
    }

    #[test]
    fn test_compose_matches_chained_ops() {
        let mut composed = Matrix::IDENTITY;
        composed.compose(5.0, 6.0, 2.0, 3.0, 0.3);
        let mut chained = Matrix::IDENTITY;
        chained.translate(5.0, 6.0).rotate(0.3).scale(2.0, 3.0);

        assert_relative_eq!(composed.m00, chained.m00, epsilon = 1e-6);
        assert_relative_eq!(composed.m10, chained.m10, epsilon = 1e-6);
        assert_relative_eq!(composed.m01, chained.m01, epsilon = 1e-6);
        assert_relative_eq!(composed.m11, chained.m11, epsilon = 1e-6);
        assert_relative_eq!(composed.m02, chained.m02, epsilon = 1e-6);
        assert_relative_eq!(composed.m12, chained.m12, epsilon = 1e-6);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut m = Matrix::IDENTITY;
        m.rotate(std::f32::consts::FRAC_PI_2);
        let p = m.transform(1.0, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse_transform_round_trip() {
        let m = sample();
        for &(x, y) in &[(0.0, 0.0), (13.5, -7.25), (-100.0, 42.0)] {
            let forward = m.transform(x, y);
            let back = m.inverse_transform(forward.x, forward.y).unwrap();
            assert_relative_eq!(back.x, x, epsilon = 1e-3);
            assert_relative_eq!(back.y, y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_inverse_matches_inverse_transform() {
        let m = sample();
        let inv = m.inverse().unwrap();
        let a = inv.transform(9.0, 3.0);
        let b = m.inverse_transform(9.0, 3.0).unwrap();
        assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-4);

        let product = Matrix::multiply(&m, &inv);
        assert_relative_eq!(product.m00, 1.0, epsilon = 1e-5);
        assert_relative_eq!(product.m11, 1.0, epsilon = 1e-5);
        assert_relative_eq!(product.m02, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_singular_matrix_fails() {
        let mut m = Matrix::IDENTITY;
        m.scale(0.0, 1.0);
        assert!(!m.is_invertible());
        assert!(m.inverse_transform(1.0, 1.0).is_none());
        assert!(matches!(m.inverse(), Err(TransformError::NotInvertible { .. })));

        let before = m;
        assert!(m.invert().is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn test_transform_array() {
        let mut m = Matrix::IDENTITY;
        m.translate(1.0, 2.0);
        let mut pts = [0.0, 0.0, 5.0, 5.0];
        m.transform_array(&mut pts);
        assert_eq!(pts, [1.0, 2.0, 6.0, 7.0]);
    }
}
