use std::collections::BTreeMap;

use core_types::{Language, Translations};

/// Language used when the requested dictionary has no entry.
pub const FALLBACK_LANGUAGE: Language = Language::De;

#[derive(Debug, Clone)]
pub struct I18n {
    de: BTreeMap<&'static str, &'static str>,
    en: BTreeMap<&'static str, &'static str>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl I18n {
    pub fn new() -> Self {
        Self {
            de: de_map(),
            en: en_map(),
        }
    }

    fn dictionary(&self, language: Language) -> &BTreeMap<&'static str, &'static str> {
        match language {
            Language::De => &self.de,
            Language::En => &self.en,
        }
    }

    /// Looks `key` up in `language`, then in the fallback language.
    pub fn get(&self, language: Language, key: &str) -> Option<&'static str> {
        self.dictionary(language)
            .get(key)
            .or_else(|| self.dictionary(FALLBACK_LANGUAGE).get(key))
            .copied()
    }

    pub fn t<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.get(language, key).unwrap_or(key)
    }
}

impl Translations for I18n {
    fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.get(language, key)
    }
}

fn de_map() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("nav.home", "Startseite"),
        ("nav.manifest", "Manifest"),
        ("nav.voting", "Namensabstimmung"),
        ("nav.targetGroups", "Für wen ist das?"),
        ("nav.solutions", "Was wir bauen"),
        ("nav.partners", "Partner werden"),
        ("nav.story", "Deine Story"),
        ("nav.ideas", "Öffentliche Ideen"),
        ("nav.waitlist", "Warteliste"),
        ("nav.blog", "Blog / Dossier"),
        ("nav.about", "Über uns"),
        ("nav.contact", "Kontakt"),
        ("nav.resources", "Ressourcen"),
        ("nav.participate", "Mitmachen"),
        ("nav.toggleMenu", "Menü umschalten"),
        ("theme.switchToLight", "Zum hellen Modus wechseln"),
        ("theme.switchToDark", "Zum dunklen Modus wechseln"),
        ("footer.title1", "Manifest & Mission"),
        ("footer.title2", "Angebot"),
        ("footer.title3", "Mitmachen"),
        ("footer.copyright", "Alle Rechte vorbehalten"),
        ("footer.imprint", "Impressum"),
        ("footer.privacy", "Datenschutz"),
    ])
}

fn en_map() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("nav.home", "Home"),
        ("nav.manifest", "Manifest"),
        ("nav.voting", "Name Voting"),
        ("nav.targetGroups", "Target Groups"),
        ("nav.solutions", "Solutions"),
        ("nav.partners", "Become a Partner"),
        ("nav.story", "Your Story"),
        ("nav.ideas", "Public Ideas"),
        ("nav.waitlist", "Waitlist"),
        ("nav.blog", "Blog"),
        ("nav.about", "About Us"),
        ("nav.contact", "Contact"),
        ("nav.resources", "Resources"),
        ("nav.participate", "Participate"),
        ("nav.toggleMenu", "Toggle menu"),
        ("theme.switchToLight", "Switch to light mode"),
        ("theme.switchToDark", "Switch to dark mode"),
        ("footer.title1", "Manifest & Mission"),
        ("footer.title2", "Offering"),
        ("footer.title3", "Participate"),
        ("footer.copyright", "All rights reserved"),
        ("footer.imprint", "Imprint"),
        ("footer.privacy", "Privacy Policy"),
    ])
}
