//! Platform glue for native frontends
//!
//! The simulation only needs two things from the outside world: a
//! monotonic millisecond clock and a blocking wait that paces the loop to
//! the target frame rate. `FrameClock` provides both. Input devices and
//! drawing stay in the frontend.

use std::time::{Duration, Instant};

/// Monotonic clock plus fixed-rate frame pacing
pub struct FrameClock {
    start: Instant,
    frame: Duration,
    deadline: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let start = Instant::now();
        let frame = Duration::from_secs(1) / fps.max(1);
        Self {
            start,
            frame,
            deadline: start + frame,
        }
    }

    /// Milliseconds since the clock was created
    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Block until the current frame's minimum duration has elapsed. If
    /// the frame already ran long, returns immediately and re-anchors the
    /// deadline so a slow frame does not cause a catch-up burst.
    pub fn wait_for_next_frame(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            std::thread::sleep(self.deadline - now);
            self.deadline += self.frame;
        } else {
            self.deadline = now + self.frame;
        }
    }
}
