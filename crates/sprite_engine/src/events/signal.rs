//! Listener lists and signal connections

use super::Disposable;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Ordered listeners keyed by a per-signal connection id
struct ListenerList<F: ?Sized> {
    next_id: u64,
    entries: Vec<(u64, Rc<F>)>,
}

/// Shared storage behind every signal arity
struct Listeners<F: ?Sized> {
    list: Rc<RefCell<ListenerList<F>>>,
}

impl<F: ?Sized + 'static> Listeners<F> {
    fn new() -> Self {
        Self {
            list: Rc::new(RefCell::new(ListenerList { next_id: 0, entries: Vec::new() })),
        }
    }

    fn connect(&self, listener: Rc<F>, prioritize: bool) -> SignalConnection {
        let id = {
            let mut list = self.list.borrow_mut();
            let id = list.next_id;
            list.next_id += 1;
            if prioritize {
                list.entries.insert(0, (id, listener));
            } else {
                list.entries.push((id, listener));
            }
            id
        };

        let weak: Weak<RefCell<ListenerList<F>>> = Rc::downgrade(&self.list);
        SignalConnection::new(move || {
            if let Some(list) = weak.upgrade() {
                list.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Copy out the current listeners so callbacks run without a borrow held
    fn snapshot(&self) -> Vec<Rc<F>> {
        self.list.borrow().entries.iter().map(|(_, f)| Rc::clone(f)).collect()
    }

    fn len(&self) -> usize {
        self.list.borrow().entries.len()
    }

    fn clear(&self) {
        self.list.borrow_mut().entries.clear();
    }
}

/// Handle returned by `connect`.
///
/// Dropping the handle leaves the listener connected; call
/// [`Disposable::dispose`] to disconnect it.
pub struct SignalConnection {
    disconnect: Option<Box<dyn FnOnce()>>,
}

impl SignalConnection {
    fn new(disconnect: impl FnOnce() + 'static) -> Self {
        Self { disconnect: Some(Box::new(disconnect)) }
    }

    /// Whether `dispose` has already been called
    pub fn is_disposed(&self) -> bool {
        self.disconnect.is_none()
    }
}

impl Disposable for SignalConnection {
    fn dispose(&mut self) {
        if let Some(disconnect) = self.disconnect.take() {
            disconnect();
        }
    }
}

impl fmt::Debug for SignalConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalConnection")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

macro_rules! signal_common {
    ($name:ident $(, $arg:ident)*) => {
        impl<$($arg: 'static),*> $name<$($arg),*> {
            /// Create a signal with no listeners
            pub fn new() -> Self {
                Self { listeners: Listeners::new() }
            }

            /// Whether any listener is connected
            pub fn has_listeners(&self) -> bool {
                self.listeners.len() > 0
            }

            /// Number of connected listeners
            pub fn listener_count(&self) -> usize {
                self.listeners.len()
            }

            /// Disconnect every listener
            pub fn disconnect_all(&self) {
                self.listeners.clear();
            }
        }

        impl<$($arg: 'static),*> Default for $name<$($arg),*> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($arg),*> fmt::Debug for $name<$($arg),*> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("listeners", &self.listeners.list.borrow().entries.len())
                    .finish()
            }
        }
    };
}

/// Signal without arguments
pub struct Signal0 {
    listeners: Listeners<dyn Fn()>,
}

signal_common!(Signal0);

impl Signal0 {
    /// Append a listener
    pub fn connect(&self, listener: impl Fn() + 'static) -> SignalConnection {
        self.listeners.connect(Rc::new(listener), false)
    }

    /// Insert a listener ahead of every existing one
    pub fn connect_prioritized(&self, listener: impl Fn() + 'static) -> SignalConnection {
        self.listeners.connect(Rc::new(listener), true)
    }

    /// Call every connected listener in order
    pub fn emit(&self) {
        for listener in self.listeners.snapshot() {
            listener();
        }
    }
}

/// Signal with one argument, passed by reference
pub struct Signal1<A> {
    listeners: Listeners<dyn Fn(&A)>,
}

signal_common!(Signal1, A);

impl<A: 'static> Signal1<A> {
    /// Append a listener
    pub fn connect(&self, listener: impl Fn(&A) + 'static) -> SignalConnection {
        self.listeners.connect(Rc::new(listener), false)
    }

    /// Insert a listener ahead of every existing one
    pub fn connect_prioritized(&self, listener: impl Fn(&A) + 'static) -> SignalConnection {
        self.listeners.connect(Rc::new(listener), true)
    }

    /// Call every connected listener in order
    pub fn emit(&self, a: &A) {
        for listener in self.listeners.snapshot() {
            listener(a);
        }
    }
}

/// Signal with two arguments, passed by reference
pub struct Signal2<A, B> {
    listeners: Listeners<dyn Fn(&A, &B)>,
}

signal_common!(Signal2, A, B);

impl<A: 'static, B: 'static> Signal2<A, B> {
    /// Append a listener
    pub fn connect(&self, listener: impl Fn(&A, &B) + 'static) -> SignalConnection {
        self.listeners.connect(Rc::new(listener), false)
    }

    /// Insert a listener ahead of every existing one
    pub fn connect_prioritized(&self, listener: impl Fn(&A, &B) + 'static) -> SignalConnection {
        self.listeners.connect(Rc::new(listener), true)
    }

    /// Call every connected listener in order
    pub fn emit(&self, a: &A, b: &B) {
        for listener in self.listeners.snapshot() {
            listener(a, b);
        }
    }
}
