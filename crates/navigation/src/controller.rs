use std::sync::Arc;

use core_types::{LayoutMode, Router, SectionId};
use routes::RouteRegistry;
use tracing::{debug, trace};

use crate::state::{ActiveLocation, NavigationUiState, OpenPanel, PointerTarget};

pub const DEFAULT_COMPACT_THRESHOLD: f32 = 10.0;

pub struct NavigationController {
    registry: Arc<RouteRegistry>,
    state: NavigationUiState,
    current_path: String,
    compact: bool,
    compact_threshold: f32,
}

impl NavigationController {
    pub fn new(registry: Arc<RouteRegistry>, current_path: impl Into<String>) -> Self {
        Self {
            registry,
            state: NavigationUiState::default(),
            current_path: current_path.into(),
            compact: false,
            compact_threshold: DEFAULT_COMPACT_THRESHOLD,
        }
    }

    pub fn with_compact_threshold(mut self, threshold: f32) -> Self {
        self.compact_threshold = threshold.max(0.0);
        self
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    pub fn state(&self) -> NavigationUiState {
        self.state
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Opens the requested panel, closing whichever panel was open, or
    /// closes it if it is the one already open.
    pub fn toggle_panel(&mut self, section: SectionId, mode: LayoutMode) {
        if !section.is_collapsible() {
            trace!(?section, "section has no panel");
            return;
        }
        let requested = OpenPanel { section, mode };
        self.state.open_panel = if self.state.open_panel == Some(requested) {
            None
        } else {
            Some(requested)
        };
        debug!(?section, ?mode, open = self.state.open_panel.is_some(), "panel toggled");
    }

    /// Pointer press anywhere in the document. Only a press outside the
    /// navigation region closes an open desktop dropdown. Returns whether
    /// the state changed.
    pub fn on_pointer_down(&mut self, target: PointerTarget) -> bool {
        if target == PointerTarget::InsideNavigation || self.state.desktop_panel().is_none() {
            return false;
        }
        self.state.open_panel = None;
        debug!("desktop panel closed by outside press");
        true
    }

    pub fn toggle_mobile_drawer(&mut self) {
        self.state.mobile_drawer_open = !self.state.mobile_drawer_open;
        if !self.state.mobile_drawer_open {
            self.state.open_panel = None;
        }
        debug!(open = self.state.mobile_drawer_open, "mobile drawer toggled");
    }

    /// A committed navigation never leaves a menu open.
    pub fn on_route_change(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
        self.state.open_panel = None;
        self.state.mobile_drawer_open = false;
        debug!(path = %self.current_path, "route changed");
    }

    /// Link activation: asks the router to navigate and commits the change.
    pub fn follow_link(&mut self, router: &dyn Router, path: &str) {
        router.navigate(path);
        self.on_route_change(router.current_path());
    }

    /// Picks up navigation that happened outside the controller, e.g.
    /// history traversal. Returns whether the path changed.
    pub fn sync_location(&mut self, router: &dyn Router) -> bool {
        let path = router.current_path();
        if path == self.current_path {
            return false;
        }
        self.on_route_change(path);
        true
    }

    /// Scrolling only changes the bar appearance; open panels stay open.
    pub fn on_scroll(&mut self, offset_y: f32) {
        let compact = offset_y > self.compact_threshold;
        if compact != self.compact {
            trace!(offset_y, compact, "navigation bar appearance changed");
            self.compact = compact;
        }
    }

    pub fn active(&self) -> ActiveLocation {
        match self.registry.find(&self.current_path) {
            Some(route) if route.in_navigation() => ActiveLocation {
                section: route.section,
                route: Some(route.path),
            },
            _ => ActiveLocation::default(),
        }
    }

    /// A section control is highlighted for the active section or while its
    /// own panel is open in the given layout.
    pub fn is_section_highlighted(&self, section: SectionId, mode: LayoutMode) -> bool {
        self.active().section == Some(section) || self.state.is_open(section, mode)
    }

    /// Links are highlighted only on an exact path match.
    pub fn is_link_active(&self, path: &str) -> bool {
        self.active().route == Some(path)
    }
}
