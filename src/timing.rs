//! Frame timing.

use std::time::Duration;

/// How often [`FrameStats`] reports an average.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Accumulates frame times and reports the average frame rate once per [`REPORT_INTERVAL`].
#[derive(Debug, Default)]
pub struct FrameStats {
    frames: u32,
    elapsed: Duration,
    total_frames: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame that took `delta`. Returns the average FPS when a report is due.
    pub fn tick(&mut self, delta: Duration) -> Option<f32> {
        self.frames += 1;
        self.total_frames += 1;
        self.elapsed += delta;

        if self.elapsed < REPORT_INTERVAL {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed.as_secs_f32();
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        Some(fps)
    }

    /// Total number of frames rendered so far.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
