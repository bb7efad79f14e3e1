//! Frame timing
//!
//! The timer is fed timestamps from the platform clock instead of reading the
//! system clock itself, which keeps frame stepping deterministic in headless
//! runs and tests.

/// Frame timer driven by externally supplied timestamps (seconds)
#[derive(Debug, Clone)]
pub struct Timer {
    last_time: Option<f64>,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer that has not seen a frame yet
    pub fn new() -> Self {
        Self {
            last_time: None,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Record a frame at `now` seconds and return the raw delta since the
    /// previous frame. The first frame only primes the clock and returns 0.
    pub fn tick(&mut self, now: f64) -> f32 {
        let delta = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);
        self.delta_time = delta;
        if delta > 0.0 {
            self.total_time += delta;
        }
        self.frame_count += 1;
        delta
    }

    /// Forget the previous timestamp so the next tick primes the clock again
    pub fn reset(&mut self) {
        self.last_time = None;
        self.delta_time = 0.0;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time across all ticks
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since the first tick
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count.saturating_sub(1) as f32 / self.total_time
        } else {
            0.0
        }
    }

    /// Get the current FPS (based on last frame time)
    pub fn current_fps(&self) -> f32 {
        if self.delta_time > 0.0 {
            1.0 / self.delta_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_primes() {
        let mut timer = Timer::new();
        assert_eq!(timer.tick(10.0), 0.0);
        assert_eq!(timer.frame_count(), 1);
        assert_eq!(timer.tick(10.5), 0.5);
        assert_eq!(timer.delta_time(), 0.5);
        assert_eq!(timer.current_fps(), 2.0);
    }

    #[test]
    fn test_total_time_ignores_backwards_clock() {
        let mut timer = Timer::new();
        timer.tick(1.0);
        timer.tick(2.0);
        timer.tick(1.5);
        assert_eq!(timer.total_time(), 1.0);
        assert_eq!(timer.average_fps(), 2.0);
    }

    #[test]
    fn test_reset() {
        let mut timer = Timer::new();
        timer.tick(1.0);
        timer.reset();
        assert_eq!(timer.tick(5.0), 0.0);
    }
}
