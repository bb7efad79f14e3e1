//! Action trait

use crate::ecs::Context;

/// A unit of work spread over one or more frames.
///
/// `update` receives the frame delta and the context of the [`Script`]
/// running it, whose `owner` is the acting entity. It returns `None` while
/// unfinished, or the part of `dt` it needed to finish, which may be less
/// than `dt`. A finished action should reset itself so containers like
/// [`Repeat`] can run it again.
///
/// [`Script`]: super::Script
/// [`Repeat`]: super::Repeat
pub trait Action {
    /// Advance by `dt` seconds
    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> Option<f32>;
}
