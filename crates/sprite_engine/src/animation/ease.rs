//! Easing curves
//!
//! Every curve maps `0` to `0` and `1` to `1`. Elastic, bounce and back curves
//! overshoot in between.

use std::f32::consts::PI;

/// An easing curve over normalized time
pub type EaseFunction = fn(f32) -> f32;

const ELASTIC_PERIOD: f64 = 0.3;
const BACK_OVERSHOOT: f32 = 1.70158;

/// No easing
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic ease in
pub fn quad_in(t: f32) -> f32 {
    t * t
}

/// Quadratic ease out
pub fn quad_out(t: f32) -> f32 {
    -t * (t - 2.0)
}

/// Quadratic ease in and out
pub fn quad_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = t - 1.0;
        1.0 - 2.0 * u * u
    }
}

/// Cubic ease in
pub fn cube_in(t: f32) -> f32 {
    t * t * t
}

/// Cubic ease out
pub fn cube_out(t: f32) -> f32 {
    let u = t - 1.0;
    u * u * u + 1.0
}

/// Cubic ease in and out
pub fn cube_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = t - 1.0;
        4.0 * u * u * u + 1.0
    }
}

/// Quartic ease in
pub fn quart_in(t: f32) -> f32 {
    t * t * t * t
}

/// Quartic ease out
pub fn quart_out(t: f32) -> f32 {
    let u = t - 1.0;
    1.0 - u * u * u * u
}

/// Quartic ease in and out
pub fn quart_in_out(t: f32) -> f32 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        let u = t - 1.0;
        1.0 - 8.0 * u * u * u * u
    }
}

/// Sine ease in
pub fn sine_in(t: f32) -> f32 {
    1.0 - (t * PI / 2.0).cos()
}

/// Sine ease out
pub fn sine_out(t: f32) -> f32 {
    (t * PI / 2.0).sin()
}

/// Sine ease in and out
pub fn sine_in_out(t: f32) -> f32 {
    -0.5 * ((PI * t).cos() - 1.0)
}

/// Exponential ease in
pub fn expo_in(t: f32) -> f32 {
    if t == 0.0 {
        0.0
    } else {
        2f32.powf(10.0 * (t - 1.0))
    }
}

/// Exponential ease out
pub fn expo_out(t: f32) -> f32 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * t)
    }
}

/// Ease in that dips below zero before accelerating
pub fn back_in(t: f32) -> f32 {
    t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT)
}

/// Ease out that overshoots past one before settling
pub fn back_out(t: f32) -> f32 {
    let u = t - 1.0;
    u * u * ((BACK_OVERSHOOT + 1.0) * u + BACK_OVERSHOOT) + 1.0
}

/// Damped spring overshoot, period 0.3
pub fn elastic_out(t: f32) -> f32 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let t = f64::from(t);
    let p = ELASTIC_PERIOD;
    let v = 2f64.powf(-10.0 * t) * ((t - p / 4.0) * (2.0 * std::f64::consts::PI) / p).sin() + 1.0;
    v as f32
}

/// Four-segment bounce
pub fn bounce_out(t: f32) -> f32 {
    let t = f64::from(t);
    let v = if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        let u = t - 1.5 / 2.75;
        7.5625 * u * u + 0.75
    } else if t < 2.5 / 2.75 {
        let u = t - 2.25 / 2.75;
        7.5625 * u * u + 0.9375
    } else {
        let u = t - 2.625 / 2.75;
        7.5625 * u * u + 0.984_375
    };
    v as f32
}
