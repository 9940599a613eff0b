//! Render-facing pieces: program assembly, uniform dispatch, shader sources.
//!
//! Everything here talks to the device through the `RenderDevice` trait;
//! nothing touches a concrete backend.

pub mod shaders;

mod program;
mod uniform;

pub use program::{build_program, compile, link};
pub use uniform::{bind_uniform, upload_uniform, UniformValue};
