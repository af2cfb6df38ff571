use parking_lot::Mutex;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// An observer list of zero-argument callbacks.
///
/// Listeners run in registration order. Dispatch works on a snapshot of the
/// list, so a listener may subscribe, unsubscribe or read shared state without
/// deadlocking. A panicking listener is logged and does not stop its siblings.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    /// Invokes every registered listener once and returns how many ran.
    pub fn notify(&self) -> usize {
        let snapshot: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for (position, listener) in snapshot.iter().enumerate() {
            if catch_unwind(AssertUnwindSafe(|| listener())).is_err() {
                tracing::error!(position, "Language change listener panicked");
            }
        }

        snapshot.len()
    }

    pub fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().is_empty()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.len())
            .finish()
    }
}
