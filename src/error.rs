use thiserror::Error;

use crate::device::ShaderStage;

/// Startup and contract failures.
///
/// Both shader kinds are fatal and non-retried: there is no fallback program
/// and no partial scene. Per-frame work cannot fail at all — invalid uniform
/// locations are dropped writes and a singular model matrix only degrades
/// shading for the frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The device rejected one shader stage. Carries the full source text so
    /// the offending program can be reported next to the device log.
    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile {
        stage: ShaderStage,
        shader_source: String,
        log: String,
    },

    /// The device rejected the vertex/fragment pair at link time.
    #[error("program failed to link: {log}")]
    ProgramLink { log: String },

    /// Mesh grid dimensions outside the generator contract.
    #[error("invalid mesh grid: meridians={meridians}, parallels={parallels}")]
    InvalidGrid { meridians: i32, parallels: i32 },
}
