use std::{thread::sleep, time::{Duration, Instant}};

pub trait Clock {
    /// Blocks until the next frame boundary at `fps` frames per second and
    /// returns how long the frame took.
    fn tick(&mut self, fps: u32) -> Duration;
}

/// Fixed-rate frame limiter. A late frame simply starts a new period.
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last_tick: None }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::new()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, fps: u32) -> Duration {
        let period = Duration::from_secs(1) / fps.max(1);

        let elapsed = match self.last_tick {
            Some(last) => {
                let spent = last.elapsed();
                if spent < period {
                    sleep(period - spent);
                }
                last.elapsed()
            },
            None => Duration::from_millis(0),
        };

        self.last_tick = Some(Instant::now());
        elapsed
    }
}
