use desktop_app_contract::{translations, AppHost, AppMountContext};
use leptos::leptos_dom::helpers::WindowListenerHandle;

use super::*;
use crate::{
    model::{WindowId, WindowState, WindowVisualState},
    reducer::DesktopAction,
};

/// Inline style for a window frame.
///
/// Maximized windows cover the viewport in viewport units so they follow browser resizes; minimized windows stay mounted but hidden; an active
/// drag is rendered as a translate of the stored position.
pub(super) fn window_frame_style(
    window: &WindowState,
    z_index: u32,
    drag_offset: Option<(i32, i32)>,
) -> String {
    match window.visual_state() {
        WindowVisualState::Minimized => format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{z_index};display:none;pointer-events:none;",
            window.rect.x, window.rect.y, window.rect.w, window.rect.h
        ),
        WindowVisualState::Maximized => {
            format!("left:0;top:0;width:100vw;height:100vh;z-index:{z_index};")
        }
        WindowVisualState::Normal => {
            let mut style = format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{z_index};",
                window.rect.x, window.rect.y, window.rect.w, window.rect.h
            );
            if let Some((dx, dy)) = drag_offset {
                style.push_str(&format!("transform:translate({dx}px, {dy}px);"));
            }
            style
        }
    }
}

/// Attaches transient `pointermove`/`pointerup` listeners on `window` for the active drag or
/// resize. They detach on release and when the frame unmounts.
fn attach_interaction_listeners(
    runtime: DesktopRuntimeContext,
    listeners: StoredValue<Vec<WindowListenerHandle>>,
) {
    detach_interaction_listeners(listeners);

    let on_move = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    });
    let on_up = window_event_listener(ev::pointerup, move |_| {
        end_interaction(runtime);
        detach_interaction_listeners(listeners);
    });
    let on_cancel = window_event_listener(ev::pointercancel, move |_| {
        runtime.dispatch_action(DesktopAction::CancelInteraction);
        detach_interaction_listeners(listeners);
    });

    listeners.update_value(|handles| handles.extend([on_move, on_up, on_cancel]));
}

fn detach_interaction_listeners(listeners: StoredValue<Vec<WindowListenerHandle>>) {
    let handles = listeners
        .try_update_value(std::mem::take)
        .unwrap_or_default();
    for handle in handles {
        handle.remove();
    }
}

fn end_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let listeners = store_value(Vec::<WindowListenerHandle>::new());
    on_cleanup(move || detach_interaction_listeners(listeners));

    let window = {
        let window_id = window_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.window(&window_id).cloned()))
    };
    let title = {
        let window_id = window_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.display_title(&window_id)).unwrap_or_default())
    };
    let active = {
        let window_id = window_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.is_active(&window_id)))
    };
    let z_index = {
        let window_id = window_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.z_index_of(&window_id)).unwrap_or(0))
    };
    let drag_offset = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            runtime
                .interaction
                .with(|interaction| interaction.drag_offset_for(&window_id))
        })
    };
    let labels = move || &translations(state.get().locale).window;

    let focus = {
        let window_id = window_id.clone();
        move |_: web_sys::PointerEvent| {
            if !active.get_untracked() {
                runtime.dispatch_action(DesktopAction::FocusWindow {
                    window_id: window_id.clone(),
                });
            }
        }
    };
    let begin_move = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if !is_primary_press(&ev) {
                return;
            }
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
            if runtime.interaction.get_untracked().dragging.is_some() {
                attach_interaction_listeners(runtime, listeners);
            }
        }
    };
    let toggle_maximize = {
        let window_id = window_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                window_id: window_id.clone(),
            })
        }
    };
    let titlebar_double_click = {
        let toggle_maximize = toggle_maximize.clone();
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            toggle_maximize();
        }
    };
    let close = {
        let window_id = window_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: window_id.clone(),
            })
        }
    };
    let minimize = {
        let window_id = window_id.clone();
        move || {
            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                window_id: window_id.clone(),
            })
        }
    };

    let frame_style = move || {
        window
            .get()
            .map(|win| window_frame_style(&win, z_index.get(), drag_offset.get()))
            .unwrap_or_default()
    };
    let frame_class = move || {
        let mut class = String::from("desktop-window");
        if active.get() {
            class.push_str(" focused");
        }
        match window.get().map(|win| win.visual_state()) {
            Some(WindowVisualState::Minimized) => class.push_str(" minimized"),
            Some(WindowVisualState::Maximized) => class.push_str(" maximized"),
            _ => {}
        }
        if drag_offset.get().is_some() {
            class.push_str(" dragging");
        }
        class
    };
    let maximized = move || window.get().is_some_and(|win| win.maximized);

    view! {
        <section
            class=frame_class
            style=frame_style
            on:pointerdown=focus
            role="dialog"
            aria-label=title
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-controls traffic-lights">
                    <button
                        class="traffic-light close"
                        aria-label=move || labels().close
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click={
                            let close = close.clone();
                            move |ev| {
                                stop_mouse_event(&ev);
                                close();
                            }
                        }
                    />
                    <button
                        class="traffic-light minimize"
                        aria-label=move || labels().minimize
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click={
                            let minimize = minimize.clone();
                            move |ev| {
                                stop_mouse_event(&ev);
                                minimize();
                            }
                        }
                    />
                    <button
                        class="traffic-light maximize"
                        aria-label=move || if maximized() { labels().restore } else { labels().maximize }
                        on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:dblclick=move |ev| stop_mouse_event(&ev)
                        on:click={
                            let toggle_maximize = toggle_maximize.clone();
                            move |ev| {
                                stop_mouse_event(&ev);
                                toggle_maximize();
                            }
                        }
                    />
                </div>
                <div class="titlebar-title">{title}</div>
            </header>
            <div class="window-body">
                <WindowBody window_id=window_id.clone() />
            </div>
            <Show when=move || window.get().is_some_and(|win| !win.maximized) fallback=|| ()>
                {
                    let window_id = window_id.clone();
                    ResizeEdge::ALL
                        .into_iter()
                        .map(|edge| {
                            view! {
                                <WindowResizeHandle
                                    window_id=window_id.clone()
                                    edge=edge
                                    listeners=listeners
                                />
                            }
                        })
                        .collect_view()
                }
            </Show>
        </section>
    }
}

#[component]
fn WindowResizeHandle(
    window_id: WindowId,
    edge: ResizeEdge,
    listeners: StoredValue<Vec<WindowListenerHandle>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: window_id.clone(),
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
        if runtime.interaction.get_untracked().resizing.is_some() {
            attach_interaction_listeners(runtime, listeners);
        }
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let lifecycle = {
        let window_id = window_id.clone();
        Signal::derive(move || state.with(|desktop| desktop.lifecycle_of(&window_id)))
    };
    let locale = Signal::derive(move || state.with(|desktop| desktop.locale));
    let theme_mode = Signal::derive(move || state.with(|desktop| desktop.theme_mode));
    let theme_config = Signal::derive(move || state.with(|desktop| desktop.theme_config.clone()));
    let host = {
        let window_id = window_id.clone();
        AppHost::new(Callback::new(move |command| {
            runtime.handle_app_command(window_id.clone(), command)
        }))
    };
    let chat = runtime.host.with_value(|host| host.chat.clone());

    let desktop = state.get_untracked();
    let contents = desktop
        .window(&window_id)
        .and_then(|win| desktop.app(&win.app_id).map(|app| (win, app)))
        .map(|(win, app)| {
            app.module.mount(AppMountContext {
                app_id: win.app_id.clone(),
                window_id: win.id.0.clone(),
                lifecycle,
                locale,
                theme_mode,
                theme_config,
                host,
                chat,
            })
        })
        .unwrap_or_else(|| view! { <p class="window-body-missing">"App unavailable"</p> }.into_view());

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}
