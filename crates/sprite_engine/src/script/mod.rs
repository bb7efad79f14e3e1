//! Timed action sequencing
//!
//! A [`Script`] component runs [`Action`]s once per frame until they finish.
//! Actions compose: [`Sequence`] runs its children one after another,
//! [`Parallel`] runs them together and [`Repeat`] restarts one.

mod action;
mod actions;
#[allow(clippy::module_inception)]
mod script;

pub use action::Action;
pub use actions::{CallFunction, Delay, Parallel, Repeat, Sequence};
pub use script::{ActionHandle, Script};
