//! Recording test double for [`RenderDevice`].
//!
//! Records every device interaction in call order and can inject compile or
//! link failures. Uniform locations are the uniform names themselves, which
//! keeps assertions readable.

use super::{RenderDevice, ShaderStage};

/// One recorded device interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CompileShader { stage: ShaderStage, source: String },
    LinkProgram { vertex: u32, fragment: u32 },
    DeleteShader(u32),
    UseProgram(u32),
    UniformLocation(String),
    SetF32(String, f32),
    SetVec3(String, [f32; 3]),
    SetVec4(String, [f32; 4]),
    SetMat4(String, [f32; 16]),
    CreateVertexBuffer { len: usize },
    AttributeLocation(String),
    BindAttribute { buffer: u32, location: u32, components: i32 },
    EnableDepthTest,
    EnableBackFaceCulling,
    SetClearColor([f32; 4]),
    Clear,
    DrawTriangles(i32),
}

#[derive(Debug, Default)]
pub struct RecordingDevice {
    pub calls: Vec<Call>,
    /// Payloads handed to `create_vertex_buffer`, in creation order.
    pub buffers: Vec<Vec<f32>>,
    /// When set, compiling the given stage fails with the given log.
    pub fail_compile: Option<(ShaderStage, String)>,
    /// When set, linking fails with the given log.
    pub fail_link: Option<String>,
    next_shader: u32,
    next_program: u32,
    next_attribute: u32,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent uniform upload addressed to `name`.
    pub fn last_upload(&self, name: &str) -> Option<&Call> {
        self.calls.iter().rev().find(|call| {
            matches!(call,
                Call::SetF32(n, _)
                | Call::SetVec3(n, _)
                | Call::SetVec4(n, _)
                | Call::SetMat4(n, _) if n == name)
        })
    }
}

impl RenderDevice for RecordingDevice {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;
    type AttributeLocation = u32;

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<u32, String> {
        self.calls.push(Call::CompileShader {
            stage,
            source: source.to_string(),
        });
        if let Some((failing_stage, log)) = &self.fail_compile {
            if *failing_stage == stage {
                return Err(log.clone());
            }
        }
        self.next_shader += 1;
        Ok(self.next_shader)
    }

    fn link_program(&mut self, vertex: u32, fragment: u32) -> Result<u32, String> {
        self.calls.push(Call::LinkProgram { vertex, fragment });
        if let Some(log) = &self.fail_link {
            return Err(log.clone());
        }
        self.next_program += 1;
        Ok(self.next_program)
    }

    fn delete_shader(&mut self, shader: u32) {
        self.calls.push(Call::DeleteShader(shader));
    }

    fn use_program(&mut self, program: u32) {
        self.calls.push(Call::UseProgram(program));
    }

    fn uniform_location(&mut self, _program: u32, name: &str) -> String {
        self.calls.push(Call::UniformLocation(name.to_string()));
        name.to_string()
    }

    fn set_uniform_f32(&mut self, location: &String, value: f32) {
        self.calls.push(Call::SetF32(location.clone(), value));
    }

    fn set_uniform_vec3(&mut self, location: &String, value: &[f32; 3]) {
        self.calls.push(Call::SetVec3(location.clone(), *value));
    }

    fn set_uniform_vec4(&mut self, location: &String, value: &[f32; 4]) {
        self.calls.push(Call::SetVec4(location.clone(), *value));
    }

    fn set_uniform_mat4(&mut self, location: &String, value: &[f32; 16]) {
        self.calls.push(Call::SetMat4(location.clone(), *value));
    }

    fn create_vertex_buffer(&mut self, data: &[f32]) -> u32 {
        self.calls.push(Call::CreateVertexBuffer { len: data.len() });
        self.buffers.push(data.to_vec());
        (self.buffers.len() - 1) as u32
    }

    fn attribute_location(&mut self, _program: u32, name: &str) -> Option<u32> {
        self.calls.push(Call::AttributeLocation(name.to_string()));
        let location = self.next_attribute;
        self.next_attribute += 1;
        Some(location)
    }

    fn bind_attribute(&mut self, buffer: u32, location: u32, components: i32) {
        self.calls.push(Call::BindAttribute {
            buffer,
            location,
            components,
        });
    }

    fn enable_depth_test(&mut self) {
        self.calls.push(Call::EnableDepthTest);
    }

    fn enable_back_face_culling(&mut self) {
        self.calls.push(Call::EnableBackFaceCulling);
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        self.calls.push(Call::SetClearColor(color));
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn draw_triangles(&mut self, vertex_count: i32) {
        self.calls.push(Call::DrawTriangles(vertex_count));
    }
}
