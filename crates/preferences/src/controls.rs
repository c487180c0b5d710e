use core_types::{Language, Theme, Translations};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeToggleView {
    pub dark: bool,
    pub aria_label: String,
}

/// The toggle announces the mode it switches to.
pub fn theme_toggle(
    theme: Theme,
    language: Language,
    translations: &dyn Translations,
) -> ThemeToggleView {
    let (key, fallback) = match theme {
        Theme::Dark => ("theme.switchToLight", "Switch to light mode"),
        Theme::Light => ("theme.switchToDark", "Switch to dark mode"),
    };
    ThemeToggleView {
        dark: theme.is_dark(),
        aria_label: translations
            .lookup(language, key)
            .unwrap_or(fallback)
            .to_string(),
    }
}

/// The language switch shows the code of the language it switches to.
pub fn language_switch_label(language: Language) -> String {
    language.toggled().code().to_ascii_uppercase()
}
