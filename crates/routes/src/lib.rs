//! Static route table and the navigation sections derived from it.
//!
//! The registry is built once at startup and never mutated afterwards, so
//! every query here is a pure function of the registry and a language.

use std::collections::HashSet;
use std::sync::Arc;

use core_types::{Language, SectionId, Translations};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::trace;

mod site;

pub use site::site_routes;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("route path `{0}` is registered more than once")]
    DuplicatePath(String),

    #[error("route `{0}` is visible but belongs to no section")]
    VisibleWithoutSection(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub section: Option<SectionId>,
    pub visible: bool,
    pub label_key: &'static str,
    pub fallback_label: &'static str,
}

impl RouteDescriptor {
    pub const fn nav(
        path: &'static str,
        section: SectionId,
        label_key: &'static str,
        fallback_label: &'static str,
    ) -> Self {
        Self {
            path,
            section: Some(section),
            visible: true,
            label_key,
            fallback_label,
        }
    }

    /// A routable page that is only reached by deep link.
    pub const fn hidden(path: &'static str, fallback_label: &'static str) -> Self {
        Self {
            path,
            section: None,
            visible: false,
            label_key: "",
            fallback_label,
        }
    }

    pub fn in_navigation(&self) -> bool {
        self.visible && self.section.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSection<'r> {
    pub id: SectionId,
    pub display_name: String,
    pub routes: Vec<&'r RouteDescriptor>,
}

pub struct RouteRegistry {
    routes: Vec<RouteDescriptor>,
    translations: Arc<dyn Translations>,
}

impl std::fmt::Debug for RouteRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

impl RouteRegistry {
    pub fn new(
        routes: Vec<RouteDescriptor>,
        translations: Arc<dyn Translations>,
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !seen.insert(route.path) {
                return Err(RegistryError::DuplicatePath(route.path.to_string()));
            }
            if route.visible && route.section.is_none() {
                return Err(RegistryError::VisibleWithoutSection(route.path.to_string()));
            }
        }

        Ok(Self {
            routes,
            translations,
        })
    }

    pub fn site(translations: Arc<dyn Translations>) -> Result<Self, RegistryError> {
        Self::new(site_routes(), translations)
    }

    pub fn all_routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn translations(&self) -> &dyn Translations {
        self.translations.as_ref()
    }

    /// Never fails: a missing translation degrades to the route's literal
    /// fallback label.
    pub fn label_for(&self, route: &RouteDescriptor, language: Language) -> String {
        self.resolve(route.label_key, route.fallback_label, language)
    }

    pub fn section_name(&self, section: SectionId, language: Language) -> String {
        self.resolve(section.label_key(), section.fallback_label(), language)
    }

    /// Groups visible routes by section, preserving registry order inside
    /// each section. Sections without routes are omitted.
    pub fn sections_for(&self, language: Language) -> Vec<NavigationSection<'_>> {
        let mut grouped: IndexMap<SectionId, Vec<&RouteDescriptor>> = IndexMap::new();
        for section in SectionId::ALL {
            grouped.insert(section, Vec::new());
        }
        for route in self.routes.iter().filter(|route| route.visible) {
            if let Some(section) = route.section {
                grouped.entry(section).or_default().push(route);
            }
        }

        grouped
            .into_iter()
            .filter(|(_, routes)| !routes.is_empty())
            .map(|(id, routes)| NavigationSection {
                id,
                display_name: self.section_name(id, language),
                routes,
            })
            .collect()
    }

    fn resolve(&self, key: &str, fallback: &str, language: Language) -> String {
        if key.is_empty() {
            return fallback.to_string();
        }
        match self.translations.lookup(language, key) {
            Some(text) => text.to_string(),
            None => {
                trace!(key, %language, "label unresolved, using fallback");
                fallback.to_string()
            }
        }
    }
}
