use std::time::{Duration, Instant};

/// Interval between frame-rate reports.
const REPORT_EVERY: Duration = Duration::from_secs(5);

/// Counts presented frames and periodically yields the measured rate.
///
/// One clock per loop; call `tick` once per presented frame. Returns
/// `Some(fps)` whenever a report interval has elapsed, then restarts the
/// measurement window.
#[derive(Debug, Clone)]
pub struct FrameClock {
    window_start: Instant,
    frames: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }

    pub fn tick(&mut self) -> Option<f64> {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed < REPORT_EVERY {
            return None;
        }
        let fps = f64::from(self.frames) / elapsed.as_secs_f64();
        self.window_start = Instant::now();
        self.frames = 0;
        Some(fps)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
