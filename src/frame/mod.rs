//! Frame loop.
//!
//! Responsibilities:
//! - own every value that changes between frames (transforms, clock)
//! - one `tick` = advance spin, upload matrices, clear, draw
//! - cooperative `run` guarded by a cancellation token
//!
//! A tick cannot fail: invalid uniform locations are dropped writes and a
//! singular model matrix only degrades shading.

mod transforms;

pub use transforms::{model_matrix, normal_matrix, Transforms};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::device::RenderDevice;
use crate::render::{upload_uniform, UniformValue};
use crate::scene::Scene;
use crate::time::FrameClock;

/// Cooperative stop flag for [`FrameLoop::run`].
///
/// Clone freely; all clones observe the same flag. Sampled exactly once per
/// tick, so cancellation lands on a frame boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The repeating render unit, built from a completed [`Scene`].
///
/// Single-threaded by construction: ticks are discrete, strictly sequenced,
/// and the loop is the only reader and writer of its state.
pub struct FrameLoop<D: RenderDevice> {
    vertex_count: i32,
    model_location: D::UniformLocation,
    normal_location: D::UniformLocation,
    transforms: Transforms,
    clock: FrameClock,
}

impl<D: RenderDevice> FrameLoop<D> {
    pub fn new(scene: Scene<D>) -> Self {
        Self {
            vertex_count: scene.vertex_count,
            model_location: scene.model_location,
            normal_location: scene.normal_location,
            transforms: Transforms::new(scene.base_model),
            clock: FrameClock::new(),
        }
    }

    pub fn transforms(&self) -> &Transforms {
        &self.transforms
    }

    /// Renders one frame.
    pub fn tick(&mut self, device: &mut D) {
        self.transforms.advance();
        upload_uniform(device, &self.model_location, &UniformValue::from(self.transforms.model));
        upload_uniform(device, &self.normal_location, &UniformValue::from(self.transforms.normal));
        device.clear();
        device.draw_triangles(self.vertex_count);

        if let Some(fps) = self.clock.tick() {
            log::debug!("frame rate: {fps:.1} fps");
        }
    }

    /// Ticks until `cancel` trips. Hosts with their own per-frame callback
    /// cadence call [`FrameLoop::tick`] directly instead.
    pub fn run(&mut self, device: &mut D, cancel: &CancelToken) {
        while !cancel.is_cancelled() {
            self.tick(device);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::recording::{Call, RecordingDevice};
    use crate::scene::SceneConfig;

    fn small_scene(device: &mut RecordingDevice) -> Scene<RecordingDevice> {
        let config = SceneConfig { meridians: 2, parallels: 2, ..Default::default() };
        Scene::setup(device, &config).unwrap()
    }

    #[test]
    fn tick_uploads_then_clears_then_draws() {
        let mut device = RecordingDevice::new();
        let scene = small_scene(&mut device);
        let mut frame_loop = FrameLoop::new(scene);

        let before = device.calls.len();
        frame_loop.tick(&mut device);
        let tail = &device.calls[before..];

        assert!(matches!(&tail[0], Call::SetMat4(name, _) if name == "modelMat"));
        assert!(matches!(&tail[1], Call::SetMat4(name, _) if name == "normalMat"));
        assert_eq!(tail[2], Call::Clear);
        assert_eq!(tail[3], Call::DrawTriangles(2 * 2 * 2 * 3));
        assert!((frame_loop.transforms().angle() - 1.01).abs() < 1e-6);
    }

    #[test]
    fn uploaded_matrices_track_the_spin() {
        let mut device = RecordingDevice::new();
        let scene = small_scene(&mut device);
        let mut frame_loop = FrameLoop::new(scene);

        frame_loop.tick(&mut device);
        frame_loop.tick(&mut device);
        frame_loop.tick(&mut device);

        assert!((frame_loop.transforms().angle() - 1.03).abs() < 1e-6);
        match device.last_upload("modelMat") {
            Some(Call::SetMat4(_, v)) => {
                assert_eq!(*v, frame_loop.transforms().model.to_cols_array());
            }
            other => panic!("unexpected call: {other:?}"),
        }
        match device.last_upload("normalMat") {
            Some(Call::SetMat4(_, v)) => {
                assert_eq!(*v, frame_loop.transforms().normal.to_cols_array());
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[test]
    fn cancelled_token_stops_before_the_first_tick() {
        let mut device = RecordingDevice::new();
        let scene = small_scene(&mut device);
        let mut frame_loop = FrameLoop::new(scene);

        let cancel = CancelToken::new();
        cancel.cancel();
        frame_loop.run(&mut device, &cancel);

        assert!(!device.calls.iter().any(|call| matches!(call, Call::DrawTriangles(_))));
    }

    #[test]
    fn token_clones_share_the_flag() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
