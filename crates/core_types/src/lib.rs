use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::De, Language::En];

    pub const fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" => Some(Self::De),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Maps a reported locale such as `en-US` or `de_AT` onto a supported
    /// language by its primary subtag.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let primary = locale.trim().split(['-', '_']).next()?;
        Self::from_code(primary)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::De => Self::En,
            Self::En => Self::De,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn from_dark_signal(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level navigation groups, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Main,
    Offering,
    Participate,
    Resources,
    Actions,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Main,
        SectionId::Offering,
        SectionId::Participate,
        SectionId::Resources,
        SectionId::Actions,
    ];

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Main => "nav.home",
            Self::Offering => "nav.solutions",
            Self::Participate => "nav.participate",
            Self::Resources => "nav.resources",
            Self::Actions => "nav.actions",
        }
    }

    pub const fn fallback_label(self) -> &'static str {
        match self {
            Self::Main => "Startseite",
            Self::Offering => "Was wir bauen",
            Self::Participate => "Mitmachen",
            Self::Resources => "Ressourcen",
            Self::Actions => "Aktionen",
        }
    }

    /// Action links are rendered flat next to the bar instead of behind a
    /// dropdown or accordion.
    pub const fn is_collapsible(self) -> bool {
        !matches!(self, Self::Actions)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    /// The backing medium is full; `LocalStorage` maps a full disk here.
    #[error("storage quota exceeded while writing `{key}`")]
    QuotaExceeded { key: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Durable key-value capability scoped to one profile.
pub trait KeyValueStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read-only signals reported by the host environment.
pub trait EnvironmentSignals: Send + Sync {
    fn preferred_locale(&self) -> Option<String>;
    fn prefers_dark_scheme(&self) -> Option<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeMarker {
    pub theme: Theme,
    pub dark_class: bool,
    pub theme_color: &'static str,
    pub favicon_href: &'static str,
}

/// Document-level markers consumed by the styling and accessibility layers.
pub trait DocumentMarkers: Send + Sync {
    fn set_language(&self, language: Language);
    fn set_theme(&self, marker: ThemeMarker);
}

/// Opaque key -> string lookup keyed by language.
pub trait Translations: Send + Sync {
    fn lookup(&self, language: Language, key: &str) -> Option<&str>;
}

/// The external router: source of the current path and sink for
/// programmatic navigation.
pub trait Router {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_language_from_locale_prefix() {
        assert_eq!(Language::from_locale("en-US"), Some(Language::En));
        assert_eq!(Language::from_locale("de_AT"), Some(Language::De));
        assert_eq!(Language::from_locale("EN"), Some(Language::En));
        assert_eq!(Language::from_locale("fr-FR"), None);
        assert_eq!(Language::from_locale(""), None);
    }

    #[test]
    fn theme_round_trips_through_storage_strings() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("system"), None);
    }

    #[test]
    fn toggles_flip_between_both_values() {
        assert_eq!(Language::De.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn only_actions_are_not_collapsible() {
        let collapsible: Vec<_> = SectionId::ALL
            .into_iter()
            .filter(|section| section.is_collapsible())
            .collect();
        assert_eq!(collapsible.len(), 4);
        assert!(!SectionId::Actions.is_collapsible());
    }
}
