// ABOUTME: Shared size-observation registry, reference-counted per element.
// ABOUTME: Batches resize reports into at most one publication per frame.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use vidgrid_core::ViewportSize;

/// Identifies one observed container element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Receives coalesced size updates for an observed element
pub trait SizeListener: Send + Sync {
    fn on_resize(&self, element: ElementId, size: ViewportSize);
}

/// Host hook used to schedule one flush before the next paint.
///
/// With winit this is `Window::request_redraw`; any deferred-callback
/// primitive works as long as the host eventually calls `flush`.
pub trait FrameScheduler: Send + Sync {
    fn request_frame(&self);
}

struct Observer {
    id: u64,
    listener: Arc<dyn SizeListener>,
}

struct ElementEntry {
    last: Option<ViewportSize>,
    dirty: bool,
    observers: Vec<Observer>,
}

#[derive(Default)]
struct RegistryState {
    entries: HashMap<ElementId, ElementEntry>,
    next_subscription: u64,
    frame_requested: bool,
}

/// Shared size-observation registry.
///
/// One registry serves all observed elements in the process. Entries are
/// created lazily when the first observer attaches and removed when the
/// last `ObserverHandle` drops. Size reports from the host are stored and
/// marked dirty; `flush` publishes at most one update per element, so any
/// number of reports between frames coalesce into a single notification
/// carrying the latest size.
pub struct SizeObserverRegistry {
    scheduler: Box<dyn FrameScheduler>,
    state: Mutex<RegistryState>,
}

impl SizeObserverRegistry {
    pub fn new(scheduler: impl FrameScheduler + 'static) -> Arc<Self> {
        Arc::new(Self {
            scheduler: Box::new(scheduler),
            state: Mutex::new(RegistryState::default()),
        })
    }

    /// Start observing an element. The handle unsubscribes on drop.
    ///
    /// If the element already has a known size, the listener is notified
    /// immediately so late subscribers do not wait for the next resize.
    pub fn observe(
        self: &Arc<Self>,
        element: ElementId,
        listener: Arc<dyn SizeListener>,
    ) -> ObserverHandle {
        let mut state = self.state.lock().unwrap();
        let id = state.next_subscription;
        state.next_subscription += 1;

        let entry = state.entries.entry(element).or_insert_with(|| ElementEntry {
            last: None,
            dirty: false,
            observers: Vec::new(),
        });
        entry.observers.push(Observer {
            id,
            listener: Arc::clone(&listener),
        });
        let initial = entry.last;
        drop(state);

        // Deliver outside the lock
        if let Some(size) = initial {
            listener.on_resize(element, size);
        }

        ObserverHandle {
            registry: Arc::downgrade(self),
            element,
            id,
        }
    }

    /// Record a raw resize notification from the host.
    ///
    /// Reports against elements nobody observes are no-ops (a normal
    /// transient state during mount/unmount), as are reports that do not
    /// change the stored size.
    pub fn report(&self, element: ElementId, width: f32, height: f32) {
        let size = ViewportSize::new(width, height);
        let schedule = {
            let mut state = self.state.lock().unwrap();
            let Some(entry) = state.entries.get_mut(&element) else {
                return;
            };
            if entry.last == Some(size) {
                return;
            }
            entry.last = Some(size);
            entry.dirty = true;

            let schedule = !state.frame_requested;
            state.frame_requested = true;
            schedule
        };

        if schedule {
            self.scheduler.request_frame();
        }
    }

    /// Publish pending updates. Call once per frame, before paint.
    pub fn flush(&self) {
        let pending: Vec<(ElementId, ViewportSize, Vec<Arc<dyn SizeListener>>)> = {
            let mut state = self.state.lock().unwrap();
            state.frame_requested = false;
            state
                .entries
                .iter_mut()
                .filter(|(_, entry)| entry.dirty)
                .filter_map(|(element, entry)| {
                    entry.dirty = false;
                    let size = entry.last?;
                    let listeners = entry
                        .observers
                        .iter()
                        .map(|observer| Arc::clone(&observer.listener))
                        .collect();
                    Some((*element, size, listeners))
                })
                .collect()
        };

        for (element, size, listeners) in pending {
            tracing::trace!(
                "Publishing size {}x{} for element {:?}",
                size.width,
                size.height,
                element
            );
            for listener in listeners {
                listener.on_resize(element, size);
            }
        }
    }

    /// Whether any observer is attached to the element
    pub fn is_observed(&self, element: ElementId) -> bool {
        self.state.lock().unwrap().entries.contains_key(&element)
    }

    fn unsubscribe(&self, element: ElementId, id: u64) {
        let mut state = self.state.lock().unwrap();
        if let Some(entry) = state.entries.get_mut(&element) {
            entry.observers.retain(|observer| observer.id != id);
            if entry.observers.is_empty() {
                state.entries.remove(&element);
                tracing::trace!("Last observer detached, dropping element {:?}", element);
            }
        }
    }
}

/// Subscription guard; detaches its observer when dropped
pub struct ObserverHandle {
    registry: Weak<SizeObserverRegistry>,
    element: ElementId,
    id: u64,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unsubscribe(self.element, self.id);
        }
    }
}
