use log::debug;

use crate::device::{RenderDevice, ShaderStage};
use crate::error::RenderError;

/// Compiles one stage, attaching the offending source text and the device
/// log on failure.
pub fn compile<D: RenderDevice>(
    device: &mut D,
    stage: ShaderStage,
    source: &str,
) -> Result<D::Shader, RenderError> {
    device
        .compile_shader(stage, source)
        .map_err(|log| RenderError::ShaderCompile {
            stage,
            shader_source: source.to_string(),
            log,
        })
}

/// Links a compiled vertex/fragment pair.
pub fn link<D: RenderDevice>(
    device: &mut D,
    vertex: D::Shader,
    fragment: D::Shader,
) -> Result<D::Program, RenderError> {
    device
        .link_program(vertex, fragment)
        .map_err(|log| RenderError::ProgramLink { log })
}

/// Compiles both stages, links them, and makes the program current.
///
/// The compiled units are released after a successful link; only the program
/// handle stays live. Either failure aborts setup — there is no fallback
/// program.
pub fn build_program<D: RenderDevice>(
    device: &mut D,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<D::Program, RenderError> {
    let vertex = compile(device, ShaderStage::Vertex, vertex_src)?;
    let fragment = compile(device, ShaderStage::Fragment, fragment_src)?;
    let program = link(device, vertex, fragment)?;
    device.use_program(program);
    device.delete_shader(vertex);
    device.delete_shader(fragment);
    debug!("shader program linked");
    Ok(program)
}
