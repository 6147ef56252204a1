//! Desktop shell UI composition and interaction surfaces.

mod window;

use leptos::*;

use self::window::DesktopWindow;
use crate::{dock::dock_items, model::PointerPosition, model::ResizeEdge};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const CLOCK_TICK_MS: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
    weekday: u32,
    month: u32,
    day: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
                weekday: date.get_day(),
                month: date.get_month() + 1,
                day: date.get_date(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                hour: 0,
                minute: 0,
                weekday: 4,
                month: 1,
                day: 1,
            }
        }
    }
}

fn format_clock(snapshot: ClockSnapshot) -> String {
    const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let weekday = WEEKDAYS[(snapshot.weekday % 7) as usize];
    format!(
        "{weekday} {}/{} {:02}:{:02}",
        snapshot.month, snapshot.day, snapshot.hour, snapshot.minute
    )
}

#[component]
/// Renders the desktop: top bar, window layer and dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-theme=move || state.get().theme_mode.class_name()
            data-locale=move || state.get().locale.tag()
        >
            <TopBar />
            <main
                class="desktop-window-layer"
                class:maximized=move || state.with(|desktop| desktop.any_window_maximized())
            >
                <For
                    each=move || state.get().window_order
                    key=|id| id.0.clone()
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </main>
            <Dock />
        </div>
    }
}

#[component]
fn TopBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = create_rw_signal(ClockSnapshot::now());

    match set_interval_with_handle(
        move || clock.set(ClockSnapshot::now()),
        std::time::Duration::from_millis(CLOCK_TICK_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("top bar clock disabled: {err:?}"),
    }

    let active_title = move || {
        let desktop = state.get();
        desktop
            .topmost_window_id()
            .filter(|id| desktop.is_active(id))
            .and_then(|id| desktop.display_title(id))
            .unwrap_or_else(|| "Long OS".to_string())
    };

    view! {
        <header class="desktop-topbar">
            <span class="desktop-topbar-title">{active_title}</span>
            <span class="desktop-topbar-clock">{move || format_clock(clock.get())}</span>
        </header>
    }
}

#[component]
fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <nav class="desktop-dock" aria-label="Dock">
            <For
                each=move || dock_items(&state.get())
                key=|item| (item.app_id.to_string(), item.title.clone(), item.running)
                let:item
            >
                {{
                    let app_id = item.app_id.clone();
                    let title = item.title.clone();
                    view! {
                        <button
                            type="button"
                            class="desktop-dock-item"
                            class:running=item.running
                            title=title.clone()
                            aria-label=title
                            on:click=move |_| runtime.launch_app(app_id.clone())
                        >
                            <span
                                class="desktop-dock-icon"
                                data-icon=item.icon.token().to_string()
                                aria-hidden="true"
                            ></span>
                            <span class="desktop-dock-indicator" aria-hidden="true"></span>
                        </button>
                    }
                }}
            </For>
        </nav>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_weekday_date_and_padded_time() {
        let snapshot = ClockSnapshot {
            hour: 9,
            minute: 5,
            weekday: 1,
            month: 3,
            day: 14,
        };
        assert_eq!(format_clock(snapshot), "Mon 3/14 09:05");
    }

    #[test]
    fn every_edge_has_a_distinct_class() {
        let mut classes: Vec<&str> = ResizeEdge::ALL.iter().map(|e| resize_edge_class(*e)).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), 8);
    }
}
