use knoll_geom::Vec3;

/// Radians of spin added per displayed frame.
pub const SPIN_PER_FRAME: f32 = 0.001;

/// Model offset that puts the terrain in front of a camera at the origin.
pub const MODEL_OFFSET: Vec3 = Vec3::new(0.0, -2.5, -7.0);

/// Model transform for a given frame: spin about +Y, then push back into view.
///
/// Derived from the frame index alone so the caller owns all animation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub angle: f32,
    pub translation: Vec3,
}

impl ModelTransform {
    pub fn at_frame(frame: u64) -> Self {
        Self {
            angle: frame as f32 * SPIN_PER_FRAME,
            translation: MODEL_OFFSET,
        }
    }

    pub fn apply(&self, p: Vec3) -> Vec3 {
        let (s, c) = self.angle.sin_cos();
        let rotated = Vec3::new(p.x * c + p.z * s, p.y, p.z * c - p.x * s);
        rotated + self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn frame_zero_only_translates() {
        let t = ModelTransform::at_frame(0);
        assert_eq!(t.angle, 0.0);
        let p = Vec3::new(3.0, 1.0, -2.0);
        assert_eq!(t.apply(p), p + MODEL_OFFSET);
    }

    #[test]
    fn angle_grows_linearly_with_frame() {
        assert_eq!(ModelTransform::at_frame(1000).angle, 1000.0 * SPIN_PER_FRAME);
        let a = ModelTransform::at_frame(250).angle;
        let b = ModelTransform::at_frame(500).angle;
        assert!((b - 2.0 * a).abs() < 1e-6);
    }

    #[test]
    fn quarter_turn_maps_x_to_minus_z() {
        let frames = (std::f32::consts::FRAC_PI_2 / SPIN_PER_FRAME).round() as u64;
        let t = ModelTransform::at_frame(frames);
        let out = t.apply(Vec3::new(1.0, 0.0, 0.0)) - MODEL_OFFSET;
        assert!(close(out, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn rotation_keeps_height_and_radius() {
        let t = ModelTransform::at_frame(4321);
        let p = Vec3::new(12.0, 0.75, -5.0);
        let out = t.apply(p) - MODEL_OFFSET;
        assert_eq!(out.y, p.y);
        let r_in = (p.x * p.x + p.z * p.z).sqrt();
        let r_out = (out.x * out.x + out.z * out.z).sqrt();
        assert!((r_in - r_out).abs() < 1e-4);
    }
}
