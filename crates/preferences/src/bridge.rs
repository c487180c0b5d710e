use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use core_types::DocumentMarkers;
use parking_lot::RwLock;
use tracing::trace;

use crate::value::PreferenceValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Pushes a committed preference value to the document markers and then to
/// every observer, synchronously and in that order.
pub struct PropagationBridge<T: PreferenceValue> {
    document: Arc<dyn DocumentMarkers>,
    observers: RwLock<Vec<(SubscriptionId, Observer<T>)>>,
    next_id: AtomicU64,
}

impl<T: PreferenceValue> PropagationBridge<T> {
    pub fn new(document: Arc<dyn DocumentMarkers>) -> Self {
        Self {
            document,
            observers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn subscribe(&self, observer: impl Fn(T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, Arc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    pub fn apply_marker(&self, value: T) {
        value.apply_marker(self.document.as_ref());
    }

    pub fn propagate(&self, value: T) {
        self.apply_marker(value);

        // Observers may subscribe or set preferences from inside the callback.
        let observers: Vec<Observer<T>> = self
            .observers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        trace!(key = T::STORAGE_KEY, %value, observers = observers.len(), "propagating");
        for observer in observers {
            observer(value);
        }
    }
}
