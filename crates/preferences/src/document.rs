use core_types::{DocumentMarkers, Language, Theme, ThemeMarker};
use parking_lot::Mutex;

pub const LIGHT_THEME_COLOR: &str = "#2D6E7E";
pub const DARK_THEME_COLOR: &str = "#092533";
pub const LIGHT_FAVICON: &str = "/images/favicon/favicon-light.svg";
pub const DARK_FAVICON: &str = "/images/favicon/favicon-dark.svg";

pub fn theme_marker(theme: Theme) -> ThemeMarker {
    match theme {
        Theme::Light => ThemeMarker {
            theme,
            dark_class: false,
            theme_color: LIGHT_THEME_COLOR,
            favicon_href: LIGHT_FAVICON,
        },
        Theme::Dark => ThemeMarker {
            theme,
            dark_class: true,
            theme_color: DARK_THEME_COLOR,
            favicon_href: DARK_FAVICON,
        },
    }
}

/// Document root markers held in memory, for headless hosts and tests.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    language: Mutex<Option<Language>>,
    theme: Mutex<Option<ThemeMarker>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the root `lang` attribute.
    pub fn lang_attribute(&self) -> Option<&'static str> {
        self.language.lock().map(Language::code)
    }

    pub fn has_dark_class(&self) -> bool {
        self.theme.lock().is_some_and(|marker| marker.dark_class)
    }

    pub fn theme_marker(&self) -> Option<ThemeMarker> {
        *self.theme.lock()
    }
}

impl DocumentMarkers for InMemoryDocument {
    fn set_language(&self, language: Language) {
        *self.language.lock() = Some(language);
    }

    fn set_theme(&self, marker: ThemeMarker) {
        *self.theme.lock() = Some(marker);
    }
}
