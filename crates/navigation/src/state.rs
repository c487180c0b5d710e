use core_types::{LayoutMode, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenPanel {
    pub section: SectionId,
    pub mode: LayoutMode,
}

/// Transient menu state. At most one panel is open across both layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationUiState {
    pub open_panel: Option<OpenPanel>,
    pub mobile_drawer_open: bool,
}

impl NavigationUiState {
    pub fn is_open(&self, section: SectionId, mode: LayoutMode) -> bool {
        self.open_panel == Some(OpenPanel { section, mode })
    }

    pub fn desktop_panel(&self) -> Option<SectionId> {
        self.open_panel
            .filter(|panel| panel.mode == LayoutMode::Desktop)
            .map(|panel| panel.section)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    InsideNavigation,
    Outside,
}

/// Section and route highlighted for the current path. Both are `None`
/// when the path is unknown or not part of the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveLocation {
    pub section: Option<SectionId>,
    pub route: Option<&'static str>,
}
