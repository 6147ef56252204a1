//! Pointer session math for window drags and resizes.
//!
//! Drags only track a visual offset until the pointer is released, and start tracking only once
//! the pointer has travelled [`DRAG_ACTIVATION_DISTANCE_PX`]. Resizes are applied on every move,
//! clamped to the app minimum with the opposite edge held in place.

use desktop_app_contract::WindowSize;

use crate::model::{DragSession, PointerPosition, ResizeEdge, ResizeSession, WindowRect};

/// Pointer travel, in pixels, before a press on the title bar becomes a drag.
pub const DRAG_ACTIVATION_DISTANCE_PX: i32 = 5;

/// Updates the drag session for a pointer move. Returns whether the visual offset changed.
pub fn update_drag(session: &mut DragSession, pointer: PointerPosition) -> bool {
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    if !session.activated {
        let travelled = i64::from(dx).pow(2) + i64::from(dy).pow(2);
        if travelled < i64::from(DRAG_ACTIVATION_DISTANCE_PX).pow(2) {
            return false;
        }
        session.activated = true;
    }
    let changed = session.offset != (dx, dy);
    session.offset = (dx, dy);
    changed
}

/// Final position for a finished drag, or `None` when the drag never activated.
pub fn drag_commit_position(session: &DragSession) -> Option<(i32, i32)> {
    session.activated.then(|| {
        let rect = session.rect_start.offset(session.offset.0, session.offset.1);
        (rect.x, rect.y)
    })
}

fn grow_from_end(start_pos: i32, start_dim: i32, delta: i32, min: i32) -> (i32, i32) {
    (start_pos, min.max(start_dim + delta))
}

fn grow_from_start(start_pos: i32, start_dim: i32, delta: i32, min: i32) -> (i32, i32) {
    let dim = min.max(start_dim - delta);
    (start_pos + (start_dim - dim), dim)
}

/// Applies resize deltas for a given edge/corner drag, clamped to `min`.
///
/// East/south edges grow the size directly. West/north edges move the origin so the opposite
/// edge stays fixed, including when the size is clamped.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32, min: WindowSize) -> WindowRect {
    let (west, east, north, south) = match edge {
        ResizeEdge::North => (false, false, true, false),
        ResizeEdge::South => (false, false, false, true),
        ResizeEdge::East => (false, true, false, false),
        ResizeEdge::West => (true, false, false, false),
        ResizeEdge::NorthEast => (false, true, true, false),
        ResizeEdge::NorthWest => (true, false, true, false),
        ResizeEdge::SouthEast => (false, true, false, true),
        ResizeEdge::SouthWest => (true, false, false, true),
    };

    let (x, w) = if east {
        grow_from_end(start.x, start.w, dx, min.width)
    } else if west {
        grow_from_start(start.x, start.w, dx, min.width)
    } else {
        (start.x, start.w)
    };
    let (y, h) = if south {
        grow_from_end(start.y, start.h, dy, min.height)
    } else if north {
        grow_from_start(start.y, start.h, dy, min.height)
    } else {
        (start.y, start.h)
    };

    WindowRect { x, y, w, h }
}

/// Geometry for the current pointer position of a resize session.
pub fn resize_session_rect(session: &ResizeSession, pointer: PointerPosition) -> WindowRect {
    resize_rect(
        session.rect_start,
        session.edge,
        pointer.x - session.pointer_start.x,
        pointer.y - session.pointer_start.y,
        session.min_size,
    )
}
