//! Pointer input
//!
//! The platform reports raw pointer activity in viewport coordinates; the
//! [`Pointer`] dispatcher turns it into signals on the sprites under the
//! pointer and on its own global signals.

mod pointer;

pub use pointer::{MouseButton, Pointer, PointerEvent};
