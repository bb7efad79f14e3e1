//! Reactive primitives
//!
//! [`Signal0`], [`Signal1`] and [`Signal2`] broadcast to connected listener
//! closures. [`Value`] is a typed cell that emits a signal whenever it is set
//! to a different value.
//!
//! Emission is snapshot-then-iterate: the set of listeners called by an
//! `emit` is fixed when that `emit` starts. A listener connected while an
//! emit is running is first called by the next emit. A listener disposed
//! while an emit is running is still called by that emit if it was part of
//! the snapshot, and never again afterwards.

mod signal;
mod value;

pub use signal::{Signal0, Signal1, Signal2, SignalConnection};
pub use value::Value;

/// Something that releases a registration or resource when disposed.
///
/// Disposing twice is always a no-op.
pub trait Disposable {
    /// Release the registration or resource
    fn dispose(&mut self);
}
