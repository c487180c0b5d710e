use std::fmt;

use core_types::{DocumentMarkers, EnvironmentSignals, Language, Theme};

use crate::document::theme_marker;

/// A persisted scalar preference with an environment-derived default.
pub trait PreferenceValue:
    Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const STORAGE_KEY: &'static str;

    fn to_stored(self) -> &'static str;
    fn from_stored(raw: &str) -> Option<Self>;
    fn from_environment(env: &dyn EnvironmentSignals) -> Option<Self>;
    fn toggled(self) -> Self;
    fn apply_marker(self, document: &dyn DocumentMarkers);
}

impl PreferenceValue for Language {
    const STORAGE_KEY: &'static str = "language";

    fn to_stored(self) -> &'static str {
        self.code()
    }

    fn from_stored(raw: &str) -> Option<Self> {
        Language::from_code(raw)
    }

    fn from_environment(env: &dyn EnvironmentSignals) -> Option<Self> {
        env.preferred_locale()
            .as_deref()
            .and_then(Language::from_locale)
    }

    fn toggled(self) -> Self {
        Language::toggled(self)
    }

    fn apply_marker(self, document: &dyn DocumentMarkers) {
        document.set_language(self);
    }
}

impl PreferenceValue for Theme {
    const STORAGE_KEY: &'static str = "theme";

    fn to_stored(self) -> &'static str {
        self.as_str()
    }

    fn from_stored(raw: &str) -> Option<Self> {
        Theme::parse(raw)
    }

    fn from_environment(env: &dyn EnvironmentSignals) -> Option<Self> {
        env.prefers_dark_scheme().map(Theme::from_dark_signal)
    }

    fn toggled(self) -> Self {
        Theme::toggled(self)
    }

    fn apply_marker(self, document: &dyn DocumentMarkers) {
        document.set_theme(theme_marker(self));
    }
}
