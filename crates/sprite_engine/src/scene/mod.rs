//! Scene stack
//!
//! A [`Director`] owns a stack of scene entities. Only the top scene is
//! attached to the director's root entity and therefore updated; scenes
//! underneath that show through non-opaque scenes above them are listed as
//! occluded and only rendered. Swapping the top scene can be animated with a
//! [`Transition`].

mod director;
mod scene;
mod transition;

pub use director::{with_director, Director};
pub use scene::Scene;
pub use transition::{FadeTransition, SlideDirection, SlideTransition, Transition, TweenClock};
