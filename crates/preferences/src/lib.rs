//! Persisted language and theme preferences.
//!
//! Each preference resolves once at boot (stored value, then environment,
//! then hard default), and every later change is persisted best effort and
//! pushed synchronously to the document markers and all observers.

use std::sync::Arc;

use core_types::{DocumentMarkers, EnvironmentSignals, KeyValueStorage, Language, Theme};

mod bridge;
mod controls;
mod document;
mod environment;
mod store;
mod value;

pub use bridge::{PropagationBridge, SubscriptionId};
pub use controls::{ThemeToggleView, language_switch_label, theme_toggle};
pub use document::{
    DARK_FAVICON, DARK_THEME_COLOR, InMemoryDocument, LIGHT_FAVICON, LIGHT_THEME_COLOR,
    theme_marker,
};
pub use environment::FixedEnvironment;
pub use store::{PersistOutcome, PreferenceSource, PreferenceStore, resolve};
pub use value::PreferenceValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceDefaults {
    pub language: Language,
    pub theme: Theme,
}

pub struct Preferences {
    language: PreferenceStore<Language>,
    theme: PreferenceStore<Theme>,
}

impl Preferences {
    pub fn boot(
        storage: Arc<dyn KeyValueStorage>,
        env: &dyn EnvironmentSignals,
        document: Arc<dyn DocumentMarkers>,
        defaults: PreferenceDefaults,
    ) -> Self {
        Self {
            language: PreferenceStore::boot(
                Arc::clone(&storage),
                env,
                Arc::clone(&document),
                defaults.language,
            ),
            theme: PreferenceStore::boot(storage, env, document, defaults.theme),
        }
    }

    pub fn language(&self) -> &PreferenceStore<Language> {
        &self.language
    }

    pub fn theme(&self) -> &PreferenceStore<Theme> {
        &self.theme
    }

    /// Forwards a live system-level change to both preferences.
    pub fn apply_environment(&self, env: &dyn EnvironmentSignals) {
        self.language.apply_environment(env);
        self.theme.apply_environment(env);
    }
}
