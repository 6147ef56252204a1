//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{ApplicationId, Locale, ThemeConfigPatch, ThemeMode};
use platform_host::next_monotonic_timestamp_ms;

use crate::{
    interaction::{drag_commit_position, resize_session_rect, update_drag},
    model::{
        AppRecord, DesktopState, DragSession, InteractionState, LaunchPlacement, PointerPosition,
        ResizeEdge, ResizeSession, WindowId, WindowState,
    },
    window_manager::{focus_window_internal, launch_rect, remove_window},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Register an app, replacing any record with the same id in place.
    RegisterApp(AppRecord),
    /// Open a window for an app, or focus the existing one for single-instance apps.
    LaunchApp {
        /// App to launch.
        app_id: ApplicationId,
        /// Viewport and jitter used to place a new window.
        placement: LaunchPlacement,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window to the top of the focus stack and unminimize it.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window; its stored rect is kept for restore.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Clear both the minimized and maximized flags.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Restore when maximized, maximize otherwise.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Overwrite a window position without validation.
    UpdateWindowPosition {
        /// Window to move.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Overwrite a window size without validation.
    UpdateWindowSize {
        /// Window to resize.
        window_id: WindowId,
        /// New width.
        w: i32,
        /// New height.
        h: i32,
    },
    /// Switch between dark and light mode.
    SetThemeMode(ThemeMode),
    /// Merge a partial theme configuration.
    PatchThemeConfig(ThemeConfigPatch),
    /// Change the system language.
    SetLocale(Locale),
    /// Begin dragging a window from its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at press.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag, committing its final position.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at press.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Drop any drag/resize session without committing a drag.
    CancelInteraction,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Push the current theme configuration and mode into the style sink.
    ApplyTheme,
    /// Re-register catalog apps so their titles follow the new locale.
    RelocalizeApps(Locale),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Actions referencing unknown windows or apps leave the state untouched.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::RegisterApp(record) => {
            match state.apps.iter_mut().find(|app| app.id == record.id) {
                Some(existing) => *existing = record,
                None => state.apps.push(record),
            }
        }
        DesktopAction::LaunchApp { app_id, placement } => {
            launch_app(state, app_id, placement);
        }
        DesktopAction::CloseWindow { window_id } => {
            if remove_window(state, &window_id) {
                drop_sessions_for(interaction, &window_id);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window_internal(state, &window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if let Some(window) = state.windows.get_mut(&window_id) {
                window.minimized = true;
                drop_sessions_for(interaction, &window_id);
            }
        }
        DesktopAction::MaximizeWindow { window_id } => {
            if let Some(window) = state.windows.get_mut(&window_id) {
                window.maximized = true;
            }
        }
        DesktopAction::RestoreWindow { window_id } => {
            if let Some(window) = state.windows.get_mut(&window_id) {
                window.minimized = false;
                window.maximized = false;
            }
        }
        DesktopAction::ToggleMaximize { window_id } => {
            if let Some(window) = state.windows.get_mut(&window_id) {
                if window.maximized {
                    window.maximized = false;
                    window.minimized = false;
                } else {
                    window.maximized = true;
                }
            }
        }
        DesktopAction::UpdateWindowPosition { window_id, x, y } => {
            if let Some(window) = state.windows.get_mut(&window_id) {
                window.rect.x = x;
                window.rect.y = y;
            }
        }
        DesktopAction::UpdateWindowSize { window_id, w, h } => {
            if let Some(window) = state.windows.get_mut(&window_id) {
                window.rect.w = w;
                window.rect.h = h;
            }
        }
        DesktopAction::SetThemeMode(mode) => {
            state.theme_mode = mode;
            effects.push(RuntimeEffect::ApplyTheme);
        }
        DesktopAction::PatchThemeConfig(patch) => {
            state.theme_config.merge(patch);
            effects.push(RuntimeEffect::ApplyTheme);
        }
        DesktopAction::SetLocale(locale) => {
            if state.locale != locale {
                state.locale = locale;
                effects.push(RuntimeEffect::RelocalizeApps(locale));
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(window) = state.windows.get(&window_id) else {
                return effects;
            };
            let rect_start = window.rect;
            let maximized = window.maximized;
            focus_window_internal(state, &window_id);
            if !maximized {
                interaction.dragging = Some(DragSession {
                    window_id,
                    pointer_start: pointer,
                    rect_start,
                    offset: (0, 0),
                    activated: false,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_mut() {
                update_drag(session, pointer);
            }
        }
        DesktopAction::EndMove => {
            if let Some(session) = interaction.dragging.take() {
                if let Some((x, y)) = drag_commit_position(&session) {
                    return reduce_desktop(
                        state,
                        interaction,
                        DesktopAction::UpdateWindowPosition {
                            window_id: session.window_id,
                            x,
                            y,
                        },
                    );
                }
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let Some(window) = state.windows.get(&window_id) else {
                return effects;
            };
            if window.maximized {
                return effects;
            }
            let rect_start = window.rect;
            let min_size = state.app_min_size(&window.app_id);
            focus_window_internal(state, &window_id);
            interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                rect_start,
                min_size,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let rect = resize_session_rect(session, pointer);
                if let Some(window) = state.windows.get_mut(&session.window_id) {
                    if !window.maximized {
                        window.rect = rect;
                    }
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::CancelInteraction => {
            interaction.dragging = None;
            interaction.resizing = None;
        }
    }

    effects
}

fn launch_app(state: &mut DesktopState, app_id: ApplicationId, placement: LaunchPlacement) {
    let Some(app) = state.app(&app_id) else {
        return;
    };
    let title = app.title.clone();
    let rect = launch_rect(app.min_size_or_default(), placement);
    if app.single_instance {
        if let Some(existing) = state.window_for_app(&app_id).map(|w| w.id.clone()) {
            focus_window_internal(state, &existing);
            return;
        }
    }

    let id = WindowId::for_launch(&app_id, next_monotonic_timestamp_ms());
    state.windows.insert(
        id.clone(),
        WindowState {
            id: id.clone(),
            app_id,
            title,
            rect,
            minimized: false,
            maximized: false,
        },
    );
    state.window_order.push(id);
}

fn drop_sessions_for(interaction: &mut InteractionState, window_id: &WindowId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| session.window_id == *window_id)
    {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|session| session.window_id == *window_id)
    {
        interaction.resizing = None;
    }
}
