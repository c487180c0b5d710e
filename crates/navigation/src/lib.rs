//! Navigation bar controller shared by the desktop dropdown bar and the
//! mobile accordion drawer.

mod controller;
mod router;
mod state;
mod view;

pub use controller::{DEFAULT_COMPACT_THRESHOLD, NavigationController};
pub use router::HistoryRouter;
pub use state::{ActiveLocation, NavigationUiState, OpenPanel, PointerTarget};
pub use view::{
    ActionLinkView, HOME_PATH, LinkView, MobileMenuView, NavigationView, SectionButtonView,
};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use core_types::{Language, LayoutMode, Router, SectionId};
    use i18n::I18n;
    use routes::RouteRegistry;

    use super::*;

    const PANELS: [(SectionId, LayoutMode); 8] = [
        (SectionId::Main, LayoutMode::Desktop),
        (SectionId::Offering, LayoutMode::Desktop),
        (SectionId::Participate, LayoutMode::Desktop),
        (SectionId::Resources, LayoutMode::Desktop),
        (SectionId::Main, LayoutMode::Mobile),
        (SectionId::Offering, LayoutMode::Mobile),
        (SectionId::Participate, LayoutMode::Mobile),
        (SectionId::Resources, LayoutMode::Mobile),
    ];

    fn registry() -> Arc<RouteRegistry> {
        Arc::new(RouteRegistry::site(Arc::new(I18n::new())).expect("site registry"))
    }

    fn controller(path: &str) -> NavigationController {
        NavigationController::new(registry(), path)
    }

    #[test]
    fn starts_with_everything_closed() {
        let nav = controller("/");
        assert_eq!(nav.state(), NavigationUiState::default());
        assert!(!nav.is_compact());
    }

    #[test]
    fn toggling_the_same_panel_twice_closes_it() {
        let mut nav = controller("/");
        nav.toggle_panel(SectionId::Offering, LayoutMode::Desktop);
        assert!(nav.state().is_open(SectionId::Offering, LayoutMode::Desktop));
        nav.toggle_panel(SectionId::Offering, LayoutMode::Desktop);
        assert_eq!(nav.state().open_panel, None);
    }

    #[test]
    fn opening_a_second_panel_closes_the_first() {
        let mut nav = controller("/");
        nav.toggle_panel(SectionId::Main, LayoutMode::Desktop);
        nav.toggle_panel(SectionId::Resources, LayoutMode::Desktop);
        assert_eq!(
            nav.state().open_panel,
            Some(OpenPanel {
                section: SectionId::Resources,
                mode: LayoutMode::Desktop
            })
        );
    }

    #[test]
    fn at_most_one_panel_is_open_across_layouts_for_all_short_sequences() {
        for a in PANELS {
            for b in PANELS {
                for c in PANELS {
                    let mut nav = controller("/");
                    for (section, mode) in [a, b, c] {
                        nav.toggle_panel(section, mode);
                    }
                    let open: Vec<_> = PANELS
                        .iter()
                        .filter(|(section, mode)| nav.state().is_open(*section, *mode))
                        .collect();
                    assert!(open.len() <= 1);
                    // The last toggle either opened `c` or closed it.
                    if let Some(panel) = nav.state().open_panel {
                        assert_eq!((panel.section, panel.mode), c);
                    }
                }
            }
        }
    }

    #[test]
    fn actions_section_has_no_panel() {
        let mut nav = controller("/");
        nav.toggle_panel(SectionId::Actions, LayoutMode::Desktop);
        assert_eq!(nav.state().open_panel, None);
    }

    #[test]
    fn outside_press_closes_desktop_panel() {
        let mut nav = controller("/");
        nav.toggle_panel(SectionId::Participate, LayoutMode::Desktop);
        assert!(nav.on_pointer_down(PointerTarget::Outside));
        assert_eq!(nav.state().open_panel, None);
    }

    #[test]
    fn inside_press_keeps_desktop_panel() {
        let mut nav = controller("/");
        nav.toggle_panel(SectionId::Participate, LayoutMode::Desktop);
        assert!(!nav.on_pointer_down(PointerTarget::InsideNavigation));
        assert!(nav.state().is_open(SectionId::Participate, LayoutMode::Desktop));
    }

    #[test]
    fn outside_press_without_desktop_panel_is_a_no_op() {
        let mut nav = controller("/");
        let before = nav.state();
        assert!(!nav.on_pointer_down(PointerTarget::Outside));
        assert_eq!(nav.state(), before);

        nav.toggle_mobile_drawer();
        nav.toggle_panel(SectionId::Main, LayoutMode::Mobile);
        let before = nav.state();
        assert!(!nav.on_pointer_down(PointerTarget::Outside));
        assert_eq!(nav.state(), before);
    }

    #[test]
    fn route_change_resets_menus_from_any_state() {
        for panel in PANELS.iter().map(|&(section, mode)| Some((section, mode))).chain([None]) {
            for drawer in [false, true] {
                let mut nav = controller("/");
                if drawer {
                    nav.toggle_mobile_drawer();
                }
                if let Some((section, mode)) = panel {
                    nav.toggle_panel(section, mode);
                }
                nav.on_route_change("/blog");
                assert_eq!(nav.state(), NavigationUiState::default());
                assert_eq!(nav.current_path(), "/blog");
            }
        }
    }

    #[test]
    fn closing_the_drawer_closes_its_panel() {
        let mut nav = controller("/");
        nav.toggle_mobile_drawer();
        nav.toggle_panel(SectionId::Resources, LayoutMode::Mobile);
        assert!(nav.state().mobile_drawer_open);

        nav.toggle_mobile_drawer();
        assert!(!nav.state().mobile_drawer_open);
        assert_eq!(nav.state().open_panel, None);
    }

    #[test]
    fn opening_the_drawer_keeps_open_panel() {
        let mut nav = controller("/");
        nav.toggle_panel(SectionId::Main, LayoutMode::Desktop);
        nav.toggle_mobile_drawer();
        assert!(nav.state().mobile_drawer_open);
        assert!(nav.state().is_open(SectionId::Main, LayoutMode::Desktop));
    }

    #[test]
    fn active_location_matches_registered_visible_routes_only() {
        let registry = registry();
        for route in registry.all_routes() {
            let nav = NavigationController::new(Arc::clone(&registry), route.path);
            let active = nav.active();
            if route.visible {
                assert_eq!(active.route, Some(route.path));
                assert_eq!(active.section, route.section);
            } else {
                assert_eq!(active, ActiveLocation::default(), "{}", route.path);
            }
        }

        for unknown in ["/nope", "", "/blog/", "/BLOG"] {
            assert_eq!(controller(unknown).active(), ActiveLocation::default());
        }
    }

    #[test]
    fn hidden_route_renders_without_any_highlight() {
        let nav = controller("/impressum");
        let view = nav.view(Language::De);
        assert!(view.desktop.iter().all(|button| !button.highlighted));
        assert!(
            view.desktop
                .iter()
                .flat_map(|button| button.links.iter())
                .chain(view.actions.iter().map(|action| &action.link))
                .all(|link| !link.active)
        );
    }

    #[test]
    fn section_highlight_follows_path_or_open_panel() {
        let mut nav = controller("/ideen");
        assert!(nav.is_section_highlighted(SectionId::Resources, LayoutMode::Desktop));
        assert!(!nav.is_section_highlighted(SectionId::Main, LayoutMode::Desktop));

        nav.toggle_panel(SectionId::Main, LayoutMode::Desktop);
        assert!(nav.is_section_highlighted(SectionId::Main, LayoutMode::Desktop));
        assert!(!nav.is_section_highlighted(SectionId::Main, LayoutMode::Mobile));
        assert!(nav.is_section_highlighted(SectionId::Resources, LayoutMode::Desktop));
    }

    #[test]
    fn view_marks_only_the_exact_link() {
        let nav = controller("/deine-story");
        let view = nav.view(Language::En);
        let active: Vec<_> = view
            .desktop
            .iter()
            .flat_map(|button| button.links.iter())
            .filter(|link| link.active)
            .map(|link| (link.path, link.label.as_str()))
            .collect();
        assert_eq!(active, vec![("/deine-story", "Your Story")]);
        assert!(nav.view(Language::En).mobile.sections[2].highlighted);
    }

    #[test]
    fn view_separates_actions_from_dropdowns() {
        let nav = controller("/kontakt");
        let view = nav.view(Language::De);

        let ids: Vec<_> = view.desktop.iter().map(|button| button.id).collect();
        assert_eq!(
            ids,
            vec![
                SectionId::Main,
                SectionId::Offering,
                SectionId::Participate,
                SectionId::Resources
            ]
        );
        let actions: Vec<_> = view
            .actions
            .iter()
            .map(|action| (action.link.label.as_str(), action.primary, action.link.active))
            .collect();
        assert_eq!(actions, vec![("Warteliste", true, false), ("Kontakt", false, true)]);
        assert_eq!(view.mobile.actions, view.actions);
        assert_eq!(view.home_path, "/");
    }

    #[test]
    fn view_reflects_language_and_expansion() {
        let mut nav = controller("/");
        nav.toggle_mobile_drawer();
        nav.toggle_panel(SectionId::Offering, LayoutMode::Mobile);

        let view = nav.view(Language::En);
        assert!(view.mobile.drawer_open);
        assert_eq!(view.mobile.toggle_label, "Toggle menu");
        let offering = &view.mobile.sections[1];
        assert_eq!(offering.label, "Solutions");
        assert!(offering.expanded);
        assert!(!view.desktop[1].expanded);
        let labels: Vec<_> = offering.links.iter().map(|link| link.label.as_str()).collect();
        assert_eq!(labels, vec!["Solutions", "Target Groups", "Für Senioren"]);

        let german = nav.view(Language::De);
        assert_eq!(german.mobile.sections[1].label, "Was wir bauen");
    }

    #[test]
    fn scroll_toggles_compact_bar_without_closing_panels() {
        let mut nav = controller("/").with_compact_threshold(10.0);
        nav.toggle_panel(SectionId::Main, LayoutMode::Desktop);

        nav.on_scroll(10.0);
        assert!(!nav.is_compact());
        nav.on_scroll(42.0);
        assert!(nav.is_compact());
        assert!(nav.view(Language::De).compact);
        assert!(nav.state().is_open(SectionId::Main, LayoutMode::Desktop));
        nav.on_scroll(0.0);
        assert!(!nav.is_compact());
    }

    #[test]
    fn following_a_link_navigates_and_closes_menus() {
        let router = HistoryRouter::new("/");
        let mut nav = controller("/");
        nav.toggle_mobile_drawer();
        nav.toggle_panel(SectionId::Participate, LayoutMode::Mobile);

        nav.follow_link(&router, "/name-voting");
        assert_eq!(router.current_path(), "/name-voting");
        assert_eq!(nav.current_path(), "/name-voting");
        assert_eq!(nav.state(), NavigationUiState::default());
        assert_eq!(nav.active().section, Some(SectionId::Participate));
    }

    #[test]
    fn history_traversal_is_picked_up_by_sync() {
        let router = HistoryRouter::new("/");
        let mut nav = controller("/");
        nav.follow_link(&router, "/blog");
        nav.follow_link(&router, "/kontakt");

        assert!(router.back());
        nav.toggle_panel(SectionId::Main, LayoutMode::Desktop);
        assert!(nav.sync_location(&router));
        assert_eq!(nav.current_path(), "/blog");
        assert_eq!(nav.state().open_panel, None);

        assert!(!nav.sync_location(&router));
        assert!(router.forward());
        assert!(nav.sync_location(&router));
        assert_eq!(nav.active().route, Some("/kontakt"));
        assert!(!router.forward());
    }

    #[test]
    fn navigating_after_back_drops_forward_entries() {
        let router = HistoryRouter::new("/");
        router.navigate("/blog");
        router.navigate("/ideen");
        assert!(router.back());
        router.navigate("/kontakt");
        assert_eq!(router.depth(), 3);
        assert!(!router.forward());

        router.navigate("/kontakt");
        assert_eq!(router.depth(), 3);
    }
}
