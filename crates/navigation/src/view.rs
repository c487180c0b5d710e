use core_types::{Language, LayoutMode, SectionId};
use routes::NavigationSection;

use crate::controller::NavigationController;

pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub path: &'static str,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionButtonView {
    pub id: SectionId,
    pub label: String,
    pub highlighted: bool,
    pub expanded: bool,
    pub links: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLinkView {
    pub link: LinkView,
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileMenuView {
    pub drawer_open: bool,
    pub toggle_label: String,
    pub sections: Vec<SectionButtonView>,
    pub actions: Vec<ActionLinkView>,
}

/// Everything a layout needs to draw the navigation bar for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView {
    pub home_path: &'static str,
    pub compact: bool,
    pub desktop: Vec<SectionButtonView>,
    pub actions: Vec<ActionLinkView>,
    pub mobile: MobileMenuView,
}

impl NavigationController {
    pub fn view(&self, language: Language) -> NavigationView {
        let sections = self.registry().sections_for(language);

        let actions: Vec<ActionLinkView> = sections
            .iter()
            .filter(|section| !section.id.is_collapsible())
            .flat_map(|section| self.links(section, language))
            .enumerate()
            .map(|(index, link)| ActionLinkView {
                link,
                primary: index == 0,
            })
            .collect();

        let toggle_label = self
            .registry()
            .translations()
            .lookup(language, "nav.toggleMenu")
            .unwrap_or("Toggle menu")
            .to_string();

        NavigationView {
            home_path: HOME_PATH,
            compact: self.is_compact(),
            desktop: self.buttons(&sections, LayoutMode::Desktop, language),
            mobile: MobileMenuView {
                drawer_open: self.state().mobile_drawer_open,
                toggle_label,
                sections: self.buttons(&sections, LayoutMode::Mobile, language),
                actions: actions.clone(),
            },
            actions,
        }
    }

    fn buttons(
        &self,
        sections: &[NavigationSection<'_>],
        mode: LayoutMode,
        language: Language,
    ) -> Vec<SectionButtonView> {
        sections
            .iter()
            .filter(|section| section.id.is_collapsible())
            .map(|section| SectionButtonView {
                id: section.id,
                label: section.display_name.clone(),
                highlighted: self.is_section_highlighted(section.id, mode),
                expanded: self.state().is_open(section.id, mode),
                links: self.links(section, language),
            })
            .collect()
    }

    fn links(&self, section: &NavigationSection<'_>, language: Language) -> Vec<LinkView> {
        section
            .routes
            .iter()
            .map(|route| LinkView {
                path: route.path,
                label: self.registry().label_for(route, language),
                active: self.is_link_active(route.path),
            })
            .collect()
    }
}
