use core_types::EnvironmentSignals;

/// Environment signals captured once, e.g. from the host at boot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedEnvironment {
    pub locale: Option<String>,
    pub prefers_dark: Option<bool>,
}

impl FixedEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_dark_scheme(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = Some(prefers_dark);
        self
    }
}

impl EnvironmentSignals for FixedEnvironment {
    fn preferred_locale(&self) -> Option<String> {
        self.locale.clone()
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        self.prefers_dark
    }
}
