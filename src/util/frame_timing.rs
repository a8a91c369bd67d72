use web_time::{Duration, Instant};

/// Wall-clock frame delta source for driver loops.
///
/// Hosts that already have a frame clock pass their own delta to
/// [`late_update`](crate::controller::GroupCameraController::late_update);
/// this is for standalone drivers such as the demo binary.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single reported delta (hitches, debugger pauses)
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Default clamp for a single frame delta.
    pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(100);

    /// Create a new frame timer starting now.
    #[must_use]
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Advance to a new frame. Returns the elapsed seconds since the previous
    /// call, clamped to the configured maximum.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        elapsed.min(self.max_delta).as_secs_f32()
    }

    /// Restart the clock without producing a delta (e.g. after a pause).
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DELTA)
    }
}
