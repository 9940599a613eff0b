//! Rendering device boundary.
//!
//! This module is responsible for:
//! - the narrow `RenderDevice` capability trait the engine renders through
//! - the `glow`-backed implementation used against a live GL context
//!
//! The engine never creates a graphics context or window itself; hosts build
//! one and inject the device into scene setup and the frame loop.

mod gl;

#[cfg(test)]
pub(crate) mod recording;

pub use gl::GlDevice;

use std::fmt;

/// Shader stage selector for [`RenderDevice::compile_shader`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Narrow rendering capability consumed by the engine.
///
/// Handle types are associated so each backend keeps its native
/// representations. Two contracts every backend must uphold:
/// - `uniform_location` is never validated: a name with no active uniform
///   returns the backend's invalid location, and uploads through it are
///   silent no-ops
/// - `set_uniform_mat4` consumes column-major data and must not transpose
pub trait RenderDevice {
    type Shader: Copy;
    type Program: Copy;
    type Buffer: Copy;
    type UniformLocation: Clone;
    type AttributeLocation: Copy;

    /// Compiles one shader stage. `Err` carries the raw device diagnostic log.
    fn compile_shader(
        &mut self,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self::Shader, String>;

    /// Links a vertex/fragment pair. `Err` carries the raw device diagnostic log.
    fn link_program(
        &mut self,
        vertex: Self::Shader,
        fragment: Self::Shader,
    ) -> Result<Self::Program, String>;

    /// Releases a compiled unit that is no longer needed.
    fn delete_shader(&mut self, shader: Self::Shader);

    /// Makes `program` current for subsequent uniform and draw calls.
    fn use_program(&mut self, program: Self::Program);

    /// Resolves a uniform by name. Possibly-invalid; see the trait contract.
    fn uniform_location(
        &mut self,
        program: Self::Program,
        name: &str,
    ) -> Self::UniformLocation;

    fn set_uniform_f32(&mut self, location: &Self::UniformLocation, value: f32);
    fn set_uniform_vec3(&mut self, location: &Self::UniformLocation, value: &[f32; 3]);
    fn set_uniform_vec4(&mut self, location: &Self::UniformLocation, value: &[f32; 4]);
    fn set_uniform_mat4(&mut self, location: &Self::UniformLocation, value: &[f32; 16]);

    /// Creates an immutable vertex buffer from tightly packed floats.
    fn create_vertex_buffer(&mut self, data: &[f32]) -> Self::Buffer;

    /// Resolves a vertex attribute by name. `None` when the attribute is not
    /// active in the linked program.
    fn attribute_location(
        &mut self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::AttributeLocation>;

    /// Points `location` at `buffer`: `components` floats per vertex, tightly
    /// packed, no stride or offset.
    fn bind_attribute(
        &mut self,
        buffer: Self::Buffer,
        location: Self::AttributeLocation,
        components: i32,
    );

    fn enable_depth_test(&mut self);
    fn enable_back_face_culling(&mut self);
    fn set_clear_color(&mut self, color: [f32; 4]);

    /// Clears color and depth.
    fn clear(&mut self);

    /// Non-indexed triangle draw over the first `vertex_count` vertices.
    fn draw_triangles(&mut self, vertex_count: i32);
}
