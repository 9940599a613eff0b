use glam::Mat4;

/// Per-tick spin increment in radians. Fixed, never delta-time scaled:
/// angular speed is coupled to the host's callback rate.
pub(crate) const ANGLE_STEP: f32 = 0.01;

/// Spin applied after the fixed base orientation.
pub fn model_matrix(base: Mat4, angle: f32) -> Mat4 {
    base * Mat4::from_rotation_y(angle)
}

/// Inverse-transpose of the model matrix, for transforming normals.
///
/// A singular model fails open: `inverse` yields a garbage matrix rather
/// than an error, degrading shading for the frame and nothing else.
pub fn normal_matrix(model: Mat4) -> Mat4 {
    model.inverse().transpose()
}

/// Frame-varying transform block, exclusively owned by the frame loop.
#[derive(Debug, Clone)]
pub struct Transforms {
    base: Mat4,
    angle: f32,
    pub model: Mat4,
    pub normal: Mat4,
}

impl Transforms {
    /// Starts from the fixed base orientation at the initial spin angle.
    pub fn new(base: Mat4) -> Self {
        let mut transforms = Self {
            base,
            angle: 1.0,
            model: Mat4::IDENTITY,
            normal: Mat4::IDENTITY,
        };
        transforms.recompute();
        transforms
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Advances one tick: bump the angle, then rederive both matrices.
    pub fn advance(&mut self) {
        self.angle += ANGLE_STEP;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.model = model_matrix(self.base, self.angle);
        self.normal = normal_matrix(self.model);
    }
}
