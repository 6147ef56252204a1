//! Shared window-manager transition helpers used by the desktop reducer.

use desktop_app_contract::WindowSize;
use platform_host::Viewport;

use crate::model::{
    DesktopState, LaunchPlacement, WindowId, WindowRect, DEFAULT_LAUNCH_HEIGHT,
    DEFAULT_LAUNCH_WIDTH,
};

/// Raises `window_id` to the top of the focus stack and clears its minimized flag.
///
/// Returns `false` when the window is unknown or already topmost and visible.
pub fn focus_window_internal(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.windows.get_mut(window_id) else {
        return false;
    };
    let already_top = state.window_order.last() == Some(window_id);
    if already_top && !window.minimized {
        return false;
    }

    window.minimized = false;
    state.window_order.retain(|id| id != window_id);
    state.window_order.push(window_id.clone());
    true
}

/// Removes `window_id` from the store and the focus stack.
pub fn remove_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    if state.windows.remove(window_id).is_none() {
        return false;
    }
    state.window_order.retain(|id| id != window_id);
    true
}

/// Initial geometry for a new window: at least 800x600 (or the app minimum), centered in the
/// viewport and shifted by the placement jitter.
pub fn launch_rect(min_size: WindowSize, placement: LaunchPlacement) -> WindowRect {
    let w = min_size.width.max(DEFAULT_LAUNCH_WIDTH);
    let h = min_size.height.max(DEFAULT_LAUNCH_HEIGHT);
    let Viewport { width, height } = placement.viewport;
    WindowRect {
        x: (width - w) / 2 + placement.jitter_x,
        y: (height - h) / 2 + placement.jitter_y,
        w,
        h,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn launch_rect_centers_default_size() {
        let rect = launch_rect(
            WindowSize::default_minimum(),
            LaunchPlacement::centered(Viewport::new(1280, 800)),
        );
        assert_eq!(
            rect,
            WindowRect {
                x: 240,
                y: 100,
                w: 800,
                h: 600
            }
        );
    }

    #[test]
    fn launch_rect_grows_to_large_minimums_and_applies_jitter() {
        let rect = launch_rect(
            WindowSize::new(860, 660),
            LaunchPlacement {
                viewport: Viewport::new(1000, 700),
                jitter_x: -20,
                jitter_y: 15,
            },
        );
        assert_eq!(
            rect,
            WindowRect {
                x: 50,
                y: 35,
                w: 860,
                h: 660
            }
        );
    }

    #[test]
    fn small_viewports_yield_negative_origins() {
        let rect = launch_rect(
            WindowSize::default_minimum(),
            LaunchPlacement::centered(Viewport::new(600, 400)),
        );
        assert_eq!((rect.x, rect.y), (-100, -100));
    }
}
