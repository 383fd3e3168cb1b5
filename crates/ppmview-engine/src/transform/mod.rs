//! Interactive 2D affine transform state for the displayed quad.
//!
//! The transform is driven by discrete keyboard steps and composed into a
//! single model matrix once per frame.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3, Vec4};

/// Rotation step per keypress: a quarter turn.
pub const ROTATE_STEP: f32 = FRAC_PI_2;
/// Scale factor per keypress.
pub const SCALE_STEP: f32 = 2.0;
/// Translation step per keypress, in NDC units.
pub const TRANSLATE_STEP: f32 = 0.1;
/// Shear step per keypress.
pub const SHEAR_STEP: f32 = 0.1;

/// A discrete transform adjustment, one per keypress.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TransformOp {
    RotateCcw,
    RotateCw,
    ScaleUp,
    ScaleDown,
    TranslateUp,
    TranslateDown,
    TranslateLeft,
    TranslateRight,
    ShearXUp,
    ShearXDown,
    ShearYUp,
    ShearYDown,
}

/// Accumulated transform state for the textured quad.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadTransform {
    /// Rotation about the Z axis, radians, CCW positive.
    pub rotation: f32,
    /// Uniform scale factor.
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    /// Shear of y by x (column 0, row 1 of the shear matrix).
    pub shear_x: f32,
    /// Shear of x by y (column 1, row 0 of the shear matrix).
    pub shear_y: f32,
}

impl Default for QuadTransform {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            shear_x: 0.0,
            shear_y: 0.0,
        }
    }
}

impl QuadTransform {
    /// Applies one discrete adjustment.
    pub fn apply(&mut self, op: TransformOp) {
        match op {
            TransformOp::RotateCcw => self.rotation += ROTATE_STEP,
            TransformOp::RotateCw => self.rotation -= ROTATE_STEP,
            TransformOp::ScaleUp => self.scale *= SCALE_STEP,
            TransformOp::ScaleDown => self.scale /= SCALE_STEP,
            TransformOp::TranslateUp => self.translate_y += TRANSLATE_STEP,
            TransformOp::TranslateDown => self.translate_y -= TRANSLATE_STEP,
            TransformOp::TranslateLeft => self.translate_x -= TRANSLATE_STEP,
            TransformOp::TranslateRight => self.translate_x += TRANSLATE_STEP,
            TransformOp::ShearXUp => self.shear_x += SHEAR_STEP,
            TransformOp::ShearXDown => self.shear_x -= SHEAR_STEP,
            TransformOp::ShearYUp => self.shear_y += SHEAR_STEP,
            TransformOp::ShearYDown => self.shear_y -= SHEAR_STEP,
        }
    }

    /// Composes the model matrix as `R * H * S * T`.
    ///
    /// Applied to a column vector, translation acts first and rotation last.
    /// The shear matrix carries `shear_x` in column 0 row 1 (y sheared by x)
    /// and `shear_y` in column 1 row 0 (x sheared by y).
    pub fn matrix(&self) -> Mat4 {
        let r = Mat4::from_rotation_z(self.rotation);
        let h = Mat4::from_cols(
            Vec4::new(1.0, self.shear_x, 0.0, 0.0),
            Vec4::new(self.shear_y, 1.0, 0.0, 0.0),
            Vec4::Z,
            Vec4::W,
        );
        let s = Mat4::from_scale(Vec3::new(self.scale, self.scale, 1.0));
        let t = Mat4::from_translation(Vec3::new(self.translate_x, self.translate_y, 0.0));
        r * h * s * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec3_eq(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn default_is_identity() {
        let t = QuadTransform::default();
        assert_eq!(t.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn rotate_steps_are_quarter_turns() {
        let mut t = QuadTransform::default();
        t.apply(TransformOp::RotateCcw);
        // CCW quarter turn maps +X to +Y.
        assert_vec3_eq(
            t.matrix().transform_point3(Vec3::X),
            Vec3::new(0.0, 1.0, 0.0),
        );

        t.apply(TransformOp::RotateCw);
        assert_eq!(t.rotation, 0.0);
    }

    #[test]
    fn scale_steps_double_and_halve() {
        let mut t = QuadTransform::default();
        t.apply(TransformOp::ScaleUp);
        assert_eq!(t.scale, 2.0);
        t.apply(TransformOp::ScaleDown);
        t.apply(TransformOp::ScaleDown);
        assert_eq!(t.scale, 0.5);
    }

    #[test]
    fn translate_steps_accumulate() {
        let mut t = QuadTransform::default();
        t.apply(TransformOp::TranslateRight);
        t.apply(TransformOp::TranslateRight);
        t.apply(TransformOp::TranslateDown);
        assert_vec3_eq(
            t.matrix().transform_point3(Vec3::ZERO),
            Vec3::new(0.2, -0.1, 0.0),
        );
    }

    #[test]
    fn shear_cells_land_in_expected_positions() {
        let mut t = QuadTransform::default();
        t.apply(TransformOp::ShearXUp);
        // shear_x shears y by x: (1, 0) -> (1, 0.1).
        assert_vec3_eq(
            t.matrix().transform_point3(Vec3::X),
            Vec3::new(1.0, 0.1, 0.0),
        );

        let mut t = QuadTransform::default();
        t.apply(TransformOp::ShearYUp);
        // shear_y shears x by y: (0, 1) -> (0.1, 1).
        assert_vec3_eq(
            t.matrix().transform_point3(Vec3::Y),
            Vec3::new(0.1, 1.0, 0.0),
        );
    }

    #[test]
    fn translation_applies_before_rotation() {
        // R * T: the origin is translated first, then rotated. With a CCW
        // quarter turn and +0.1 x-translation the origin lands on +Y.
        let mut t = QuadTransform::default();
        t.apply(TransformOp::TranslateRight);
        t.apply(TransformOp::RotateCcw);
        assert_vec3_eq(
            t.matrix().transform_point3(Vec3::ZERO),
            Vec3::new(0.0, 0.1, 0.0),
        );
    }

    #[test]
    fn translation_applies_before_scale() {
        let mut t = QuadTransform::default();
        t.apply(TransformOp::TranslateRight);
        t.apply(TransformOp::ScaleUp);
        // S * T: (0,0) -> T -> (0.1, 0) -> S -> (0.2, 0).
        assert_vec3_eq(
            t.matrix().transform_point3(Vec3::ZERO),
            Vec3::new(0.2, 0.0, 0.0),
        );
    }
}
