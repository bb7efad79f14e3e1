//! Time-driven animation of scalar properties
//!
//! An [`AnimatedFloat`] is an observable float that can carry one
//! [`Behavior`] at a time. The behavior is stepped every frame and writes the
//! float's new value, so anything listening to the float (such as a sprite's
//! dirty flags) reacts to animation the same way it reacts to direct writes.

mod animated_float;
mod behavior;
pub mod ease;

pub use animated_float::AnimatedFloat;
pub use behavior::{Behavior, Tween};
pub use ease::EaseFunction;
