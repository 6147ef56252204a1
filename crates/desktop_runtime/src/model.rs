use std::collections::BTreeMap;

use desktop_app_contract::{
    AppIcon, AppLifecycleEvent, AppModule, ApplicationId, Locale, ThemeConfig, ThemeMode,
    WindowSize,
};
use platform_host::{signed_jitter, unit_random, Viewport};
use serde::{Deserialize, Serialize};

/// z-index of the bottom-most window; each step up the focus stack adds one.
pub const BASE_WINDOW_Z_INDEX: u32 = 10;
/// Preferred launch width before the app minimum is applied.
pub const DEFAULT_LAUNCH_WIDTH: i32 = 800;
/// Preferred launch height before the app minimum is applied.
pub const DEFAULT_LAUNCH_HEIGHT: i32 = 600;
/// Maximum random offset, in pixels, applied to centered launch positions.
pub const LAUNCH_JITTER_PX: i32 = 20;

/// Runtime window identifier of the form `{app_id}-{timestamp_ms}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    /// Builds the id for a window of `app_id` created at `timestamp_ms`.
    pub fn for_launch(app_id: &ApplicationId, timestamp_ms: u64) -> Self {
        Self(format!("{app_id}-{timestamp_ms}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// A registered application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppRecord {
    pub id: ApplicationId,
    /// Title baked for the locale active at registration time.
    pub title: String,
    pub icon: AppIcon,
    pub module: AppModule,
    /// Minimum window size; [`WindowSize::default_minimum`] when absent.
    pub min_size: Option<WindowSize>,
    /// When set, launching the app again focuses its existing window.
    pub single_instance: bool,
}

impl AppRecord {
    pub fn min_size_or_default(&self) -> WindowSize {
        self.min_size.unwrap_or_else(WindowSize::default_minimum)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub id: WindowId,
    pub app_id: ApplicationId,
    /// Title captured at launch, used when the app is no longer registered.
    pub title: String,
    /// Normal-state geometry; kept untouched while maximized.
    pub rect: WindowRect,
    pub minimized: bool,
    pub maximized: bool,
}

/// Rendering state derived from a window's flags. Minimized wins over maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVisualState {
    Normal,
    Maximized,
    Minimized,
}

impl WindowState {
    pub fn visual_state(&self) -> WindowVisualState {
        if self.minimized {
            WindowVisualState::Minimized
        } else if self.maximized {
            WindowVisualState::Maximized
        } else {
            WindowVisualState::Normal
        }
    }
}

/// Caller-sampled inputs for placing a newly launched window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchPlacement {
    pub viewport: Viewport,
    pub jitter_x: i32,
    pub jitter_y: i32,
}

impl LaunchPlacement {
    /// Placement without jitter.
    pub const fn centered(viewport: Viewport) -> Self {
        Self {
            viewport,
            jitter_x: 0,
            jitter_y: 0,
        }
    }

    /// Placement with fresh random jitter in `[-LAUNCH_JITTER_PX, LAUNCH_JITTER_PX]` per axis.
    pub fn sample(viewport: Viewport) -> Self {
        Self {
            viewport,
            jitter_x: signed_jitter(unit_random(), LAUNCH_JITTER_PX),
            jitter_y: signed_jitter(unit_random(), LAUNCH_JITTER_PX),
        }
    }
}

/// Shared desktop store: app registry, open windows, focus stack, theme and locale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopState {
    /// Registered apps in registration order.
    pub apps: Vec<AppRecord>,
    pub windows: BTreeMap<WindowId, WindowState>,
    /// Focus stack; the last entry is topmost.
    pub window_order: Vec<WindowId>,
    pub theme_mode: ThemeMode,
    pub theme_config: ThemeConfig,
    pub locale: Locale,
}

impl DesktopState {
    pub fn app(&self, app_id: &ApplicationId) -> Option<&AppRecord> {
        self.apps.iter().find(|app| app.id == *app_id)
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowState> {
        self.windows.get(window_id)
    }

    pub fn topmost_window_id(&self) -> Option<&WindowId> {
        self.window_order.last()
    }

    /// Returns the top-most open window of `app_id`.
    pub fn window_for_app(&self, app_id: &ApplicationId) -> Option<&WindowState> {
        self.window_order
            .iter()
            .rev()
            .filter_map(|id| self.windows.get(id))
            .find(|window| window.app_id == *app_id)
    }

    pub fn z_index_of(&self, window_id: &WindowId) -> Option<u32> {
        self.window_order
            .iter()
            .position(|id| id == window_id)
            .map(|index| BASE_WINDOW_Z_INDEX + index as u32)
    }

    /// Whether `window_id` is the topmost window and not minimized.
    pub fn is_active(&self, window_id: &WindowId) -> bool {
        self.topmost_window_id() == Some(window_id)
            && self
                .windows
                .get(window_id)
                .is_some_and(|window| !window.minimized)
    }

    /// Whether any visible window is maximized; the window layer then stacks above the chrome.
    pub fn any_window_maximized(&self) -> bool {
        self.windows
            .values()
            .any(|window| window.visual_state() == WindowVisualState::Maximized)
    }

    pub fn lifecycle_of(&self, window_id: &WindowId) -> AppLifecycleEvent {
        match self.windows.get(window_id) {
            Some(window) if window.minimized => AppLifecycleEvent::Minimized,
            Some(_) if self.is_active(window_id) => AppLifecycleEvent::Focused,
            _ => AppLifecycleEvent::Blurred,
        }
    }

    /// Ids of apps with at least one open window, in registration order.
    pub fn running_app_ids(&self) -> Vec<ApplicationId> {
        self.apps
            .iter()
            .filter(|app| self.windows.values().any(|w| w.app_id == app.id))
            .map(|app| app.id.clone())
            .collect()
    }

    /// Title for a window's frame: the live registry title, else the stored one.
    pub fn display_title(&self, window_id: &WindowId) -> Option<String> {
        let window = self.windows.get(window_id)?;
        Some(
            self.app(&window.app_id)
                .map(|app| app.title.clone())
                .unwrap_or_else(|| window.title.clone()),
        )
    }

    pub fn app_min_size(&self, app_id: &ApplicationId) -> WindowSize {
        self.app(app_id)
            .map(AppRecord::min_size_or_default)
            .unwrap_or_else(WindowSize::default_minimum)
    }

    /// Verifies the structural store invariants and describes the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.window_order.len() != self.windows.len() {
            return Err(format!(
                "order has {} entries for {} windows",
                self.window_order.len(),
                self.windows.len()
            ));
        }
        for (index, id) in self.window_order.iter().enumerate() {
            if !self.windows.contains_key(id) {
                return Err(format!("order entry {id} has no window"));
            }
            if self.window_order[..index].contains(id) {
                return Err(format!("order entry {id} is duplicated"));
            }
        }
        for (index, app) in self.apps.iter().enumerate() {
            if self.apps[..index].iter().any(|other| other.id == app.id) {
                return Err(format!("app {} is registered twice", app.id));
            }
            if app.single_instance {
                let open = self.windows.values().filter(|w| w.app_id == app.id).count();
                if open > 1 {
                    return Err(format!("single-instance app {} has {open} windows", app.id));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];
}

/// In-flight window drag. Only `offset` changes until the drag ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    /// Pointer travel since the press; zero until the activation distance is exceeded.
    pub offset: (i32, i32),
    pub activated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    pub min_size: WindowSize,
}

/// Transient pointer interaction state, kept outside [`DesktopState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    /// Visual drag offset for `window_id`, if it is being dragged.
    pub fn drag_offset_for(&self, window_id: &WindowId) -> Option<(i32, i32)> {
        self.dragging
            .as_ref()
            .filter(|session| session.window_id == *window_id && session.activated)
            .map(|session| session.offset)
    }
}
