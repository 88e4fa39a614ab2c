//! Viewport scroll signal with scoped listener registration.
//!
//! A [`ScrollSignal`] is the shared stream of vertical scroll offsets. Views
//! register a listener with [`ScrollSignal::subscribe`] and keep the returned
//! [`ScrollSubscription`]; dropping the guard removes the listener right away,
//! so a torn-down view is never called again.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`): offsets are delivered
//! one at a time on the thread that owns the signal.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct SignalInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Shared scroll-offset stream. Clones share the same listeners.
#[derive(Clone, Default)]
pub struct ScrollSignal {
    inner: Rc<RefCell<SignalInner>>,
}

impl std::fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSignal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` until the returned guard is dropped.
    pub fn subscribe(&self, listener: impl Fn(f64) + 'static) -> ScrollSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        ScrollSubscription {
            id,
            signal: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver one scroll offset to every live listener, in registration order.
    pub fn emit(&self, offset_y: f64) {
        // Snapshot first so listeners may subscribe or unsubscribe while being called.
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(offset_y);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Registration guard returned by [`ScrollSignal::subscribe`].
#[must_use = "dropping the subscription unregisters the listener immediately"]
pub struct ScrollSubscription {
    id: u64,
    signal: Weak<RefCell<SignalInner>>,
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("id", &self.id)
            .field("live", &(self.signal.strong_count() > 0))
            .finish()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
