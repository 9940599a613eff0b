use glam::{Mat4, Vec3};

/// Fixed camera: eye, look target, and projection parameters.
///
/// Both matrices are computed once during scene setup and never change.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees. The default is deliberately narrow;
    /// the shape should nearly fill the small render target.
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_deg: 13.0,
            near: 1.0,
            far: 2000.0,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// GL clip-space projection (z in [-1, 1]).
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let camera = Camera::default();
        let eye_in_view = camera.view_matrix() * camera.eye.extend(1.0);
        assert!(eye_in_view.truncate().length() < 1e-5);
    }

    #[test]
    fn projection_preserves_aspect() {
        let camera = Camera::default();
        let proj = camera.projection_matrix(2.0);
        // x focal length is half the y focal length at aspect 2.
        let cols = proj.to_cols_array_2d();
        assert!((cols[0][0] * 2.0 - cols[1][1]).abs() < 1e-5);
    }
}
