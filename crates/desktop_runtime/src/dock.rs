//! Dock model: one launcher entry per registered app.

use desktop_app_contract::{AppIcon, ApplicationId};

use crate::model::DesktopState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockItem {
    pub app_id: ApplicationId,
    pub title: String,
    pub icon: AppIcon,
    /// Whether at least one window of the app is open.
    pub running: bool,
}

/// Dock entries in registration order.
pub fn dock_items(state: &DesktopState) -> Vec<DockItem> {
    state
        .apps
        .iter()
        .map(|app| DockItem {
            app_id: app.id.clone(),
            title: app.title.clone(),
            icon: app.icon.clone(),
            running: state.windows.values().any(|w| w.app_id == app.id),
        })
        .collect()
}
