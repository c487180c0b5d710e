use std::sync::Arc;

use core_types::{DocumentMarkers, EnvironmentSignals, KeyValueStorage};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::bridge::{PropagationBridge, SubscriptionId};
use crate::value::PreferenceValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceSource {
    /// Read from storage at boot.
    Stored,
    /// Derived from the environment because nothing was stored.
    Environment,
    /// Neither storage nor the environment produced a supported value.
    Default,
    /// Chosen by the user during this session.
    User,
}

impl PreferenceSource {
    pub fn is_explicit(self) -> bool {
        matches!(self, Self::Stored | Self::User)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved,
    /// The write failed; the value lives in memory until the next reload.
    SessionOnly,
}

#[derive(Debug, Clone, Copy)]
struct Current<T> {
    value: T,
    source: PreferenceSource,
}

/// Resolution applied when nothing explicit is stored: environment first,
/// then the hard default.
pub fn resolve<T: PreferenceValue>(
    stored: Option<&str>,
    env: &dyn EnvironmentSignals,
    default: T,
) -> (T, PreferenceSource) {
    if let Some(raw) = stored {
        match T::from_stored(raw) {
            Some(value) => return (value, PreferenceSource::Stored),
            None => warn!(key = T::STORAGE_KEY, raw, "ignoring unsupported stored value"),
        }
    }
    match T::from_environment(env) {
        Some(value) => (value, PreferenceSource::Environment),
        None => (default, PreferenceSource::Default),
    }
}

pub struct PreferenceStore<T: PreferenceValue> {
    current: RwLock<Current<T>>,
    default: T,
    storage: Arc<dyn KeyValueStorage>,
    bridge: PropagationBridge<T>,
}

impl<T: PreferenceValue> PreferenceStore<T> {
    /// Resolves the value once and syncs the document marker. Nothing is
    /// written back to storage.
    pub fn boot(
        storage: Arc<dyn KeyValueStorage>,
        env: &dyn EnvironmentSignals,
        document: Arc<dyn DocumentMarkers>,
        default: T,
    ) -> Self {
        let stored = match storage.read(T::STORAGE_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(key = T::STORAGE_KEY, error = %err, "failed to read stored preference");
                None
            }
        };
        let (value, source) = resolve(stored.as_deref(), env, default);
        info!(key = T::STORAGE_KEY, %value, ?source, "preference resolved");

        let bridge = PropagationBridge::new(document);
        bridge.apply_marker(value);

        Self {
            current: RwLock::new(Current { value, source }),
            default,
            storage,
            bridge,
        }
    }

    pub fn get(&self) -> T {
        self.current.read().value
    }

    pub fn source(&self) -> PreferenceSource {
        self.current.read().source
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    /// Persists (best effort), commits, and propagates before returning.
    pub fn set(&self, value: T) -> PersistOutcome {
        let outcome = match self.storage.write(T::STORAGE_KEY, value.to_stored()) {
            Ok(()) => PersistOutcome::Saved,
            Err(err) => {
                warn!(
                    key = T::STORAGE_KEY,
                    %value,
                    error = %err,
                    "failed to persist preference, keeping it for this session"
                );
                PersistOutcome::SessionOnly
            }
        };

        *self.current.write() = Current {
            value,
            source: PreferenceSource::User,
        };
        debug!(key = T::STORAGE_KEY, %value, ?outcome, "preference changed");
        self.bridge.propagate(value);
        outcome
    }

    pub fn toggle(&self) -> T {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    /// Follows a live environment change unless the user has made an
    /// explicit choice. Returns whether the value changed.
    pub fn apply_environment(&self, env: &dyn EnvironmentSignals) -> bool {
        let next = {
            let mut current = self.current.write();
            if current.source.is_explicit() {
                return false;
            }
            let (value, source) = resolve(None, env, self.default);
            let changed = value != current.value;
            *current = Current { value, source };
            changed.then_some(value)
        };

        match next {
            Some(value) => {
                debug!(key = T::STORAGE_KEY, %value, "following environment change");
                self.bridge.propagate(value);
                true
            }
            None => false,
        }
    }

    pub fn subscribe(&self, observer: impl Fn(T) + Send + Sync + 'static) -> SubscriptionId {
        self.bridge.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bridge.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.bridge.observer_count()
    }
}
