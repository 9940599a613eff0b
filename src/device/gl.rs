use glow::HasContext;

use super::{RenderDevice, ShaderStage};

/// [`RenderDevice`] backed by a live GL context through `glow`.
///
/// The context (and the window or canvas it came from) is created by the
/// host and handed in; `glow` dispatches to desktop GL or WebGL2 per
/// platform. Invalid uniform locations map to `None`, which GL treats as a
/// silent no-op on upload — exactly the passthrough the trait demands.
pub struct GlDevice {
    gl: glow::Context,
}

impl GlDevice {
    /// Wraps a host-created context.
    pub fn new(gl: glow::Context) -> Self {
        // Core profiles refuse attribute pointers without a bound VAO; one
        // shared array object covers the whole scene.
        unsafe {
            if let Ok(vao) = gl.create_vertex_array() {
                gl.bind_vertex_array(Some(vao));
            }
        }
        Self { gl }
    }

    /// Borrows the underlying context for host-side calls (viewport etc.).
    pub fn raw(&self) -> &glow::Context {
        &self.gl
    }
}

fn stage_kind(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

impl RenderDevice for GlDevice {
    type Shader = <glow::Context as HasContext>::Shader;
    type Program = <glow::Context as HasContext>::Program;
    type Buffer = <glow::Context as HasContext>::Buffer;
    type UniformLocation = Option<<glow::Context as HasContext>::UniformLocation>;
    type AttributeLocation = u32;

    fn compile_shader(
        &mut self,
        stage: ShaderStage,
        source: &str,
    ) -> Result<Self::Shader, String> {
        unsafe {
            let shader = self.gl.create_shader(stage_kind(stage))?;
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);
            if !self.gl.get_shader_compile_status(shader) {
                let log = self.gl.get_shader_info_log(shader);
                self.gl.delete_shader(shader);
                return Err(log);
            }
            Ok(shader)
        }
    }

    fn link_program(
        &mut self,
        vertex: Self::Shader,
        fragment: Self::Shader,
    ) -> Result<Self::Program, String> {
        unsafe {
            let program = self.gl.create_program()?;
            self.gl.attach_shader(program, vertex);
            self.gl.attach_shader(program, fragment);
            self.gl.link_program(program);
            if !self.gl.get_program_link_status(program) {
                let log = self.gl.get_program_info_log(program);
                self.gl.delete_program(program);
                return Err(log);
            }
            Ok(program)
        }
    }

    fn delete_shader(&mut self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn use_program(&mut self, program: Self::Program) {
        unsafe { self.gl.use_program(Some(program)) }
    }

    fn uniform_location(
        &mut self,
        program: Self::Program,
        name: &str,
    ) -> Self::UniformLocation {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn set_uniform_f32(&mut self, location: &Self::UniformLocation, value: f32) {
        unsafe { self.gl.uniform_1_f32(location.as_ref(), value) }
    }

    fn set_uniform_vec3(&mut self, location: &Self::UniformLocation, value: &[f32; 3]) {
        unsafe { self.gl.uniform_3_f32_slice(location.as_ref(), value) }
    }

    fn set_uniform_vec4(&mut self, location: &Self::UniformLocation, value: &[f32; 4]) {
        unsafe { self.gl.uniform_4_f32_slice(location.as_ref(), value) }
    }

    fn set_uniform_mat4(&mut self, location: &Self::UniformLocation, value: &[f32; 16]) {
        // Column-major input, never transposed on the way down.
        unsafe { self.gl.uniform_matrix_4_f32_slice(location.as_ref(), false, value) }
    }

    fn create_vertex_buffer(&mut self, data: &[f32]) -> Self::Buffer {
        unsafe {
            let buffer = self.gl.create_buffer().expect("failed to allocate GL buffer");
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );
            buffer
        }
    }

    fn attribute_location(
        &mut self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::AttributeLocation> {
        unsafe { self.gl.get_attrib_location(program, name) }
    }

    fn bind_attribute(
        &mut self,
        buffer: Self::Buffer,
        location: Self::AttributeLocation,
        components: i32,
    ) {
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl.enable_vertex_attrib_array(location);
            self.gl
                .vertex_attrib_pointer_f32(location, components, glow::FLOAT, false, 0, 0);
        }
    }

    fn enable_depth_test(&mut self) {
        unsafe { self.gl.enable(glow::DEPTH_TEST) }
    }

    fn enable_back_face_culling(&mut self) {
        unsafe { self.gl.enable(glow::CULL_FACE) }
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        unsafe { self.gl.clear_color(color[0], color[1], color[2], color[3]) }
    }

    fn clear(&mut self) {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT) }
    }

    fn draw_triangles(&mut self, vertex_count: i32) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, 0, vertex_count) }
    }
}
