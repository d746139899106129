//! Two-phase construction and deterministic teardown.
//!
//! [`Number::create`] runs an allocation step, which attaches the payload,
//! followed by a separate initialization step. Each step notifies the
//! wrapper's [`LifecycleObserver`]. Reading the payload notifies
//! [`LifecycleEvent::ValueRead`], and the wrapper's `Drop` notifies
//! [`LifecycleEvent::TornDown`]. Since the wrapper is owned, teardown fires
//! exactly once, either from [`Number::dispose`] or at end of scope.
//!
//! ```
//! # use objhooks_core::lifecycle::{EventLog, LifecycleEvent, Number};
//! let log = EventLog::default();
//! let n = Number::create(5, &log);
//! assert_eq!(*n.value(), 5);
//! n.dispose();
//! assert_eq!(
//!     log.events(),
//!     [
//!         LifecycleEvent::Allocated,
//!         LifecycleEvent::Initialized,
//!         LifecycleEvent::ValueRead,
//!         LifecycleEvent::TornDown,
//!     ]
//! );
//! ```

use core::cell::RefCell;
use core::fmt;

/// Markers emitted over a wrapper's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    Allocated,
    Initialized,
    ValueRead,
    TornDown,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Allocated => "allocate",
            Self::Initialized => "initialize",
            Self::ValueRead => "value read",
            Self::TornDown => "teardown",
        };
        f.write_str(name)
    }
}

/// Receives lifecycle markers.
pub trait LifecycleObserver {
    fn notify(&self, event: LifecycleEvent);
}

impl<O: LifecycleObserver + ?Sized> LifecycleObserver for &O {
    fn notify(&self, event: LifecycleEvent) {
        (**self).notify(event);
    }
}

/// Emits every marker as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LifecycleObserver for TracingObserver {
    fn notify(&self, event: LifecycleEvent) {
        tracing::info!(%event, "lifecycle");
    }
}

/// Records markers in the order they arrive.
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<LifecycleEvent>>,
}

impl EventLog {
    /// A snapshot of the markers recorded so far.
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.borrow().clone()
    }

    /// How many times `event` has been recorded.
    pub fn count(&self, event: LifecycleEvent) -> usize {
        self.events.borrow().iter().filter(|&&e| e == event).count()
    }
}

impl LifecycleObserver for EventLog {
    fn notify(&self, event: LifecycleEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// A wrapper around one value with observable construction and teardown.
#[derive(Debug)]
pub struct Number<T, O: LifecycleObserver = TracingObserver> {
    value: T,
    observer: O,
}

impl<T> Number<T, TracingObserver> {
    /// Create a wrapper that reports to `tracing`.
    pub fn new(value: T) -> Self {
        Self::create(value, TracingObserver)
    }
}

impl<T, O: LifecycleObserver> Number<T, O> {
    /// Allocate, then initialize. The payload is readable as soon as this
    /// returns.
    pub fn create(value: T, observer: O) -> Self {
        Self::allocate(value, observer).initialize()
    }

    fn allocate(value: T, observer: O) -> Self {
        observer.notify(LifecycleEvent::Allocated);
        Self { value, observer }
    }

    fn initialize(self) -> Self {
        self.observer.notify(LifecycleEvent::Initialized);
        self
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        self.observer.notify(LifecycleEvent::ValueRead);
        &self.value
    }

    /// Tear the wrapper down now instead of at end of scope.
    pub fn dispose(self) {
        drop(self);
    }
}

impl<T, O: LifecycleObserver> Drop for Number<T, O> {
    fn drop(&mut self) {
        self.observer.notify(LifecycleEvent::TornDown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::LifecycleEvent::{Allocated, Initialized, TornDown, ValueRead};

    #[test]
    fn test_create_notifies_allocate_then_initialize() {
        let log = EventLog::default();
        let n = Number::create("payload", &log);
        assert_eq!(log.events(), [Allocated, Initialized]);
        drop(n);
    }

    #[test]
    fn test_value_visible_after_create() {
        let log = EventLog::default();
        let n = Number::create(5, &log);
        assert_eq!(*n.value(), 5);
    }

    #[test]
    fn test_full_sequence_in_order() {
        let log = EventLog::default();
        let n = Number::create(5, &log);
        let _ = n.value();
        n.dispose();
        assert_eq!(log.events(), [Allocated, Initialized, ValueRead, TornDown]);
    }

    #[test]
    fn test_teardown_exactly_once_on_dispose() {
        let log = EventLog::default();
        Number::create(1, &log).dispose();
        assert_eq!(log.count(TornDown), 1);
    }

    #[test]
    fn test_teardown_at_end_of_scope() {
        let log = EventLog::default();
        {
            let _n = Number::create(1, &log);
            assert_eq!(log.count(TornDown), 0);
        }
        assert_eq!(log.count(TornDown), 1);
        assert_eq!(log.count(Allocated), 1);
        assert_eq!(log.count(Initialized), 1);
    }

    #[test]
    fn test_tracing_observer_wrapper() {
        let n = Number::new(String::from("five"));
        assert_eq!(n.value(), "five");
    }

    #[test]
    fn test_event_display() {
        assert_eq!(Allocated.to_string(), "allocate");
        assert_eq!(TornDown.to_string(), "teardown");
    }
}
