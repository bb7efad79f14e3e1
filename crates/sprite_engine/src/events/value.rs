//! Observable value cell

use super::{Signal1, Signal2, SignalConnection};
use std::fmt;

/// A typed cell that notifies listeners when it changes.
///
/// Writes that compare equal to the current value are ignored. A write that
/// changes the value first stores it, then emits [`Value::changed`] with the
/// new value, then calls every [`Value::watch`] listener with `(new, old)`.
pub struct Value<T> {
    value: T,
    changed: Signal1<T>,
    watchers: Signal2<T, T>,
}

impl<T: PartialEq + 'static> Value<T> {
    /// Create a value cell
    pub fn new(value: T) -> Self {
        Self {
            value,
            changed: Signal1::new(),
            watchers: Signal2::new(),
        }
    }

    /// Current value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store a new value. Returns true if it differed from the old one and
    /// listeners were notified.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        let old = std::mem::replace(&mut self.value, value);
        self.changed.emit(&self.value);
        self.watchers.emit(&self.value, &old);
        true
    }

    /// Signal emitted with the new value after every change
    pub fn changed(&self) -> &Signal1<T> {
        &self.changed
    }

    /// Call `listener(current, current)` right away, then `listener(new, old)`
    /// after every change.
    pub fn watch(&self, listener: impl Fn(&T, &T) + 'static) -> SignalConnection {
        listener(&self.value, &self.value);
        self.watchers.connect(listener)
    }
}

impl<T: Copy + PartialEq + 'static> Value<T> {
    /// Copy of the current value
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: PartialEq + Default + 'static> Default for Value<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&self.value).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_equal_write_is_silent() {
        let mut value = Value::new(5);
        let hits = Rc::new(RefCell::new(Vec::new()));
        let h = Rc::clone(&hits);
        value.changed().connect(move |v| h.borrow_mut().push(*v));

        assert!(!value.set(5));
        assert!(hits.borrow().is_empty());

        assert!(value.set(6));
        assert_eq!(*hits.borrow(), vec![6]);
        assert_eq!(value.value(), 6);
    }

    #[test]
    fn test_watch_sees_old_and_new() {
        let mut value = Value::new(String::from("idle"));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let _conn = value.watch(move |new, old| s.borrow_mut().push(format!("{old}->{new}")));

        value.set(String::from("running"));
        value.set(String::from("running"));
        assert_eq!(*seen.borrow(), vec!["idle->idle", "idle->running"]);
        assert_eq!(value.get(), "running");
    }

    #[test]
    fn test_changed_fires_before_watchers() {
        let mut value = Value::new(0_u8);
        let order = Rc::new(RefCell::new(Vec::new()));
        let o = Rc::clone(&order);
        let _w = value.watch(move |_, _| o.borrow_mut().push("watch"));
        order.borrow_mut().clear();
        let o = Rc::clone(&order);
        value.changed().connect(move |_| o.borrow_mut().push("changed"));

        value.set(1);
        assert_eq!(*order.borrow(), vec!["changed", "watch"]);
    }
}
