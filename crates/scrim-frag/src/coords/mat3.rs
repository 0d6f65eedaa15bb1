use core::ops::Mul;

use super::Vec2;

/// Column-major 3×3 transform between 2D coordinate spaces.
///
/// Carried as an opaque converter (input space → geometry space, geometry →
/// texture, …); callers build one from scale/translation parts and compose
/// with `*`. The third row admits projective transforms; `transform_point`
/// divides through by `w` when it is neither 0 nor 1.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    /// Columns, each stored as `[x, y, w]`.
    pub cols: [[f32; 3]; 3],
}

impl Default for Mat3 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[inline]
    pub const fn from_cols(x: [f32; 3], y: [f32; 3], z: [f32; 3]) -> Self {
        Self { cols: [x, y, z] }
    }

    /// Non-uniform scale about the origin.
    #[inline]
    pub const fn from_scale(scale: Vec2) -> Self {
        Self {
            cols: [[scale.x, 0.0, 0.0], [0.0, scale.y, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    #[inline]
    pub const fn from_translation(t: Vec2) -> Self {
        Self {
            cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [t.x, t.y, 1.0]],
        }
    }

    /// Applies the transform to a point (implicit `w = 1`).
    #[inline]
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        let c = self.cols;
        let x = c[0][0] * p.x + c[1][0] * p.y + c[2][0];
        let y = c[0][1] * p.x + c[1][1] * p.y + c[2][1];
        let w = c[0][2] * p.x + c[1][2] * p.y + c[2][2];
        if w != 0.0 && w != 1.0 {
            Vec2::new(x / w, y / w)
        } else {
            Vec2::new(x, y)
        }
    }

    /// Columns flattened in column-major order (GPU upload form).
    #[inline]
    pub fn to_cols_array(self) -> [f32; 9] {
        let c = self.cols;
        [
            c[0][0], c[0][1], c[0][2], //
            c[1][0], c[1][1], c[1][2], //
            c[2][0], c[2][1], c[2][2],
        ]
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut cols = [[0.0; 3]; 3];
        for (col, rhs_col) in cols.iter_mut().zip(&rhs.cols) {
            for (row, out) in col.iter_mut().enumerate() {
                *out = self.cols[0][row] * rhs_col[0]
                    + self.cols[1][row] * rhs_col[1]
                    + self.cols[2][row] * rhs_col[2];
            }
        }
        Mat3 { cols }
    }
}
