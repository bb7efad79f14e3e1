//! Time-stepped mutators for animated floats

use super::ease::{self, EaseFunction};
use std::fmt;

/// Something that produces a new value for an [`AnimatedFloat`](super::AnimatedFloat)
/// every frame
pub trait Behavior {
    /// Advance by `dt` seconds and return the new value
    fn update(&mut self, dt: f32) -> f32;

    /// Whether the behavior has finished. A finished behavior is removed from
    /// its float after the step that finished it.
    fn is_complete(&self) -> bool;
}

/// Interpolates from one value to another over a fixed duration
#[derive(Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: EaseFunction,
}

impl Tween {
    /// Create a tween. A duration of zero or less completes on the first
    /// update, landing exactly on `to`.
    pub fn new(from: f32, to: f32, duration: f32, ease: EaseFunction) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            ease,
        }
    }

    /// Create a linear tween
    pub fn linear(from: f32, to: f32, duration: f32) -> Self {
        Self::new(from, to, duration, ease::linear)
    }

    /// Start value
    pub fn from(&self) -> f32 {
        self.from
    }

    /// Target value
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Seconds elapsed so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

impl Behavior for Tween {
    fn update(&mut self, dt: f32) -> f32 {
        self.elapsed += dt;
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        let alpha = self.elapsed / self.duration;
        self.from + (self.to - self.from) * (self.ease)(alpha)
    }

    fn is_complete(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}
