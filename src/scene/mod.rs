//! Scene assembly.
//!
//! Responsibilities:
//! - build the program and the static view/projection matrices
//! - upload the write-once uniform set (camera, light, material, matrices)
//! - create the vertex buffers and fixed device state
//!
//! Everything here runs exactly once; per-frame work lives in `frame`.

mod camera;
mod lighting;

pub use camera::Camera;
pub use lighting::{Light, Material};

use glam::Mat4;
use log::info;

use crate::device::RenderDevice;
use crate::error::RenderError;
use crate::render::{self, bind_uniform, shaders};
use crate::shape;

/// Build-time parameters for the scene.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Render target size in pixels; only the ratio feeds the projection.
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Supershape grid resolution.
    pub meridians: i32,
    pub parallels: i32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport_width: 300,
            viewport_height: 300,
            meridians: 70,
            parallels: 70,
        }
    }
}

/// Static scene state handed to the frame loop.
///
/// Holds only what later frames need: the program handle, the mesh extent,
/// the fixed base orientation, and the two per-frame uniform locations
/// (resolved once — locations are fixed at link time).
#[derive(Debug)]
pub struct Scene<D: RenderDevice> {
    pub(crate) program: D::Program,
    pub(crate) vertex_count: i32,
    pub(crate) base_model: Mat4,
    pub(crate) model_location: D::UniformLocation,
    pub(crate) normal_location: D::UniformLocation,
}

impl<D: RenderDevice> Scene<D> {
    /// Runs the one-time setup sequence against `device`.
    pub fn setup(device: &mut D, config: &SceneConfig) -> Result<Self, RenderError> {
        let program =
            render::build_program(device, shaders::VERTEX_SHADER, shaders::FRAGMENT_SHADER)?;

        let camera = Camera::default();
        let aspect = config.viewport_width as f32 / config.viewport_height as f32;
        let base_model = Mat4::from_rotation_x(35.0_f32.to_radians());

        bind_uniform(device, program, "camera", camera.eye.to_array());
        Light::default().upload(device, program);
        Material::default().upload(device, program);
        bind_uniform(device, program, "viewMat", camera.view_matrix());
        bind_uniform(device, program, "projMat", camera.projection_matrix(aspect));

        let mesh = shape::generate(config.meridians, config.parallels)?;
        let vertex_count = (mesh.len() / 3) as i32;
        info!(
            "supershape mesh: {} vertices ({} triangles)",
            vertex_count,
            vertex_count / 3
        );

        // Positions double as normals: two buffers, one payload.
        let position_buffer = device.create_vertex_buffer(&mesh);
        let normal_buffer = device.create_vertex_buffer(&mesh);
        if let Some(location) = device.attribute_location(program, "aPos") {
            device.bind_attribute(position_buffer, location, 3);
        }
        if let Some(location) = device.attribute_location(program, "aNormal") {
            device.bind_attribute(normal_buffer, location, 3);
        }

        device.enable_depth_test();
        device.enable_back_face_culling();
        device.set_clear_color([1.0, 1.0, 1.0, 1.0]);

        let model_location = device.uniform_location(program, "modelMat");
        let normal_location = device.uniform_location(program, "normalMat");

        Ok(Self {
            program,
            vertex_count,
            base_model,
            model_location,
            normal_location,
        })
    }

    pub fn program(&self) -> D::Program {
        self.program
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}
