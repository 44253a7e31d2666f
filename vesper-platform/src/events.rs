//! Clock event delivery.
//!
//! The clock core assumes non-reentrant, one-at-a-time invocation on a single
//! logical thread. Sources here only *deliver* notifications; listeners are
//! expected to marshal onto the engine owner's thread (a channel send, a
//! queued closure) rather than drive the engine from the delivery thread.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

/// Notification kinds a clock cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// Periodic tick; the display should refresh.
    Tick,
    /// The wall clock was adjusted.
    TimeChanged,
    /// The ambient timezone changed.
    TimeZoneChanged,
    /// The 12/24-hour preference changed to the carried value.
    FormatPreferenceChanged(bool),
}

/// Listener invoked once per delivered event.
pub type EventListener = Box<dyn Fn(ClockEvent) + Send + Sync>;

/// Source of [`ClockEvent`]s.
pub trait EventSource {
    /// Registers a listener. Dropping the returned [`Subscription`]
    /// unregisters it.
    fn subscribe(&self, listener: EventListener) -> Subscription;
}

#[derive(Default)]
struct Registry {
    listeners: Mutex<Vec<(u64, EventListener)>>,
    next_id: AtomicU64,
}

impl Registry {
    fn emit(&self, event: ClockEvent) {
        for (_, listener) in self.listeners.lock().iter() {
            listener(event);
        }
    }
}

fn register_listener(registry: &Arc<Registry>, listener: EventListener) -> Subscription {
    let id = registry.next_id.fetch_add(1, Ordering::Relaxed);
    registry.listeners.lock().push((id, listener));
    Subscription {
        registry: registry.clone(),
        id,
    }
}

/// Registration guard returned by [`EventSource::subscribe`]; the listener
/// stays registered until this is dropped.
pub struct Subscription {
    registry: Arc<Registry>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry
            .listeners
            .lock()
            .retain(|(id, _)| *id != self.id);
    }
}

/// Hand-driven event source.
///
/// Hosts forward whatever their platform reports — a time adjustment, a
/// timezone change, a settings write — by calling [`emit`](Self::emit).
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Registry>,
}

impl EventBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers an event to every current listener, on the calling thread.
    pub fn emit(&self, event: ClockEvent) {
        self.registry.emit(event);
    }
}

impl EventSource for EventBus {
    fn subscribe(&self, listener: EventListener) -> Subscription {
        register_listener(&self.registry, listener)
    }
}

/// Background tick driver emitting [`ClockEvent::Tick`] at a fixed period.
///
/// Periods are approximate; an occasional early tick is harmless since a
/// refresh is idempotent. The thread stops when the ticker drops.
pub struct IntervalTicker {
    registry: Arc<Registry>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl IntervalTicker {
    /// Starts a ticker thread with the given period.
    pub fn new(period: Duration) -> Self {
        let registry = Arc::new(Registry::default());
        let stop = Arc::new(AtomicBool::new(false));
        let thread_registry = registry.clone();
        let thread_stop = stop.clone();
        let handle = thread::Builder::new()
            .name("vesper-ticker".to_string())
            .spawn(move || {
                while !thread_stop.load(Ordering::Acquire) {
                    thread::park_timeout(period);
                    if thread_stop.load(Ordering::Acquire) {
                        break;
                    }
                    thread_registry.emit(ClockEvent::Tick);
                }
                debug!("ticker thread stopped");
            })
            .expect("failed to spawn ticker thread");
        Self {
            registry,
            stop,
            handle: Some(handle),
        }
    }
}

impl EventSource for IntervalTicker {
    fn subscribe(&self, listener: EventListener) -> Subscription {
        register_listener(&self.registry, listener)
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            let _ = handle.join();
        }
    }
}
