//! Frame timing

use std::time::{Duration, Instant};

/// Frame counter and wall-clock timer for the render loop
#[derive(Debug, Clone)]
pub struct Timer {
    started: Instant,
    last_frame: Instant,
    delta: Duration,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a timer starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Mark a presented frame
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Time between the last two ticks
    pub const fn delta(&self) -> Duration {
        self.delta
    }

    /// Frames ticked so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Time since the timer was created
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Average frames per second since creation
    ///
    /// The loop blocks on input, so this is an event rate rather than a
    /// display rate.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.frame_count as f64 / secs
        } else {
            0.0
        }
    }
}
