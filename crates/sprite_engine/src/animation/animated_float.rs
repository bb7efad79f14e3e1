//! Observable float with an optional running behavior

use super::behavior::{Behavior, Tween};
use super::ease::{self, EaseFunction};
use crate::events::{Signal1, SignalConnection, Value};
use std::fmt;

/// A float that can be animated over time.
///
/// Writing through [`AnimatedFloat::set`] cancels any running behavior.
/// Starting a tween replaces the running behavior without notice.
pub struct AnimatedFloat {
    value: Value<f32>,
    behavior: Option<Box<dyn Behavior>>,
}

impl AnimatedFloat {
    /// Create a float holding `value` with no behavior
    pub fn new(value: f32) -> Self {
        Self {
            value: Value::new(value),
            behavior: None,
        }
    }

    /// Current value
    pub fn get(&self) -> f32 {
        self.value.value()
    }

    /// Set the value directly and stop any running behavior
    pub fn set(&mut self, value: f32) -> &mut Self {
        self.behavior = None;
        self.value.set(value);
        self
    }

    /// Signal emitted with the new value on every change
    pub fn changed(&self) -> &Signal1<f32> {
        self.value.changed()
    }

    /// See [`Value::watch`]
    pub fn watch(&self, listener: impl Fn(&f32, &f32) + 'static) -> SignalConnection {
        self.value.watch(listener)
    }

    /// Step the running behavior by `dt` seconds. The behavior is dropped
    /// once it reports completion; the float keeps the last value written.
    pub fn update(&mut self, dt: f32) {
        if let Some(behavior) = self.behavior.as_mut() {
            let value = behavior.update(dt);
            if behavior.is_complete() {
                self.behavior = None;
            }
            self.value.set(value);
        }
    }

    /// Tween from the current value to `to` with a quadratic ease out
    pub fn animate_to(&mut self, to: f32, seconds: f32) -> &mut Self {
        self.animate_to_with(to, seconds, ease::quad_out)
    }

    /// Tween from the current value to `to` with the given easing
    pub fn animate_to_with(&mut self, to: f32, seconds: f32, ease: EaseFunction) -> &mut Self {
        let tween = Tween::new(self.get(), to, seconds, ease);
        self.behavior = Some(Box::new(tween));
        self
    }

    /// Tween by a relative amount with a quadratic ease out
    pub fn animate_by(&mut self, by: f32, seconds: f32) -> &mut Self {
        self.animate_by_with(by, seconds, ease::quad_out)
    }

    /// Tween by a relative amount with the given easing
    pub fn animate_by_with(&mut self, by: f32, seconds: f32, ease: EaseFunction) -> &mut Self {
        let to = self.get() + by;
        self.animate_to_with(to, seconds, ease)
    }

    /// Install a behavior, replacing any running one. `None` stops animation
    /// without touching the value.
    pub fn set_behavior(&mut self, behavior: Option<Box<dyn Behavior>>) -> &mut Self {
        self.behavior = behavior;
        self
    }

    /// The running behavior, if any
    pub fn behavior(&self) -> Option<&dyn Behavior> {
        self.behavior.as_deref()
    }

    /// Whether a behavior is running
    pub fn is_animating(&self) -> bool {
        self.behavior.is_some()
    }
}

impl Default for AnimatedFloat {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for AnimatedFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedFloat")
            .field("value", &self.get())
            .field("animating", &self.is_animating())
            .finish()
    }
}
