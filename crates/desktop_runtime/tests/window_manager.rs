use desktop_app_contract::{
    AppIcon, AppModule, ApplicationId, AppMountContext, Locale, WindowSize,
};
use desktop_runtime::{
    apps::catalog_app_records, dock_items, reduce_desktop, AppRecord, DesktopAction,
    DesktopState, InteractionState, LaunchPlacement, PointerPosition, ResizeEdge, RuntimeEffect,
    WindowId, WindowRect, BASE_WINDOW_Z_INDEX, LAUNCH_JITTER_PX,
};
use leptos::{IntoView, View};
use platform_host::Viewport;
use pretty_assertions::assert_eq;

const VIEWPORT: Viewport = Viewport::new(1280, 800);

fn mount_nothing(_: AppMountContext) -> View {
    ().into_view()
}

fn record(id: &str, single_instance: bool, min_size: Option<WindowSize>) -> AppRecord {
    AppRecord {
        id: ApplicationId::trusted(id),
        title: id.to_string(),
        icon: AppIcon::new(id),
        module: AppModule::new(mount_nothing),
        min_size,
        single_instance,
    }
}

struct Desktop {
    state: DesktopState,
    interaction: InteractionState,
}

impl Desktop {
    fn with_apps(apps: Vec<AppRecord>) -> Self {
        let mut desktop = Self {
            state: DesktopState::default(),
            interaction: InteractionState::default(),
        };
        for app in apps {
            desktop.apply(DesktopAction::RegisterApp(app));
        }
        desktop
    }

    fn catalog() -> Self {
        Self::with_apps(catalog_app_records(Locale::En))
    }

    fn apply(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(&mut self.state, &mut self.interaction, action)
    }

    fn launch_at(&mut self, app: &str, placement: LaunchPlacement) -> Option<WindowId> {
        self.apply(DesktopAction::LaunchApp {
            app_id: ApplicationId::trusted(app),
            placement,
        });
        self.state.topmost_window_id().cloned()
    }

    fn launch(&mut self, app: &str) -> WindowId {
        self.launch_at(app, LaunchPlacement::centered(VIEWPORT))
            .expect("launch opened a window")
    }
}

#[test]
fn catalog_registers_every_builtin_app_in_dock_order() {
    let desktop = Desktop::catalog();
    let ids: Vec<_> = dock_items(&desktop.state)
        .into_iter()
        .map(|item| item.app_id.to_string())
        .collect();

    assert_eq!(
        ids,
        vec!["terminal", "safari", "calculator", "paint", "files", "im", "settings"]
    );
}

#[test]
fn single_instance_launch_focuses_existing_window() {
    let mut desktop = Desktop::catalog();
    let calculator = desktop.launch("calculator");
    let files = desktop.launch("files");
    desktop.apply(DesktopAction::MinimizeWindow {
        window_id: calculator.clone(),
    });

    let again = desktop.launch("calculator");

    assert_eq!(again, calculator);
    assert_eq!(desktop.state.windows.len(), 2);
    assert_eq!(desktop.state.window_order, vec![files, calculator.clone()]);
    assert!(!desktop.state.window(&calculator).unwrap().minimized);
}

#[test]
fn multi_instance_apps_open_distinct_windows() {
    let mut desktop = Desktop::with_apps(vec![record("notes", false, None)]);
    let first = desktop.launch("notes");
    let second = desktop.launch("notes");

    assert_ne!(first, second);
    assert_eq!(desktop.state.window_order, vec![first, second]);
}

#[test]
fn launch_uses_larger_of_minimum_and_default_size() {
    let mut desktop = Desktop::catalog();
    let chat = desktop.launch("im");

    assert_eq!(
        desktop.state.window(&chat).unwrap().rect,
        WindowRect {
            x: 210,
            y: 100,
            w: 860,
            h: 600,
        }
    );
}

#[test]
fn sampled_launch_jitter_stays_within_bounds() {
    for _ in 0..50 {
        let mut desktop = Desktop::catalog();
        let id = desktop
            .launch_at("files", LaunchPlacement::sample(VIEWPORT))
            .expect("window opened");
        let rect = desktop.state.window(&id).unwrap().rect;

        assert!((rect.x - 240).abs() <= LAUNCH_JITTER_PX, "x = {}", rect.x);
        assert!((rect.y - 100).abs() <= LAUNCH_JITTER_PX, "y = {}", rect.y);
    }
}

#[test]
fn launching_unknown_app_changes_nothing() {
    let mut desktop = Desktop::catalog();
    let before = desktop.state.clone();

    assert_eq!(desktop.launch_at("doom", LaunchPlacement::centered(VIEWPORT)), None);
    assert_eq!(desktop.state, before);
}

#[test]
fn focusing_topmost_window_is_a_noop() {
    let mut desktop = Desktop::catalog();
    desktop.launch("files");
    let top = desktop.launch("terminal");
    let before = desktop.state.clone();

    desktop.apply(DesktopAction::FocusWindow { window_id: top });

    assert_eq!(desktop.state, before);
}

#[test]
fn z_index_follows_focus_order() {
    let mut desktop = Desktop::catalog();
    let files = desktop.launch("files");
    let terminal = desktop.launch("terminal");

    desktop.apply(DesktopAction::FocusWindow {
        window_id: files.clone(),
    });

    assert_eq!(desktop.state.z_index_of(&terminal), Some(BASE_WINDOW_Z_INDEX));
    assert_eq!(desktop.state.z_index_of(&files), Some(BASE_WINDOW_Z_INDEX + 1));
    assert!(desktop.state.is_active(&files));
}

#[test]
fn minimize_keeps_stack_position_and_deactivates() {
    let mut desktop = Desktop::catalog();
    let files = desktop.launch("files");
    let terminal = desktop.launch("terminal");

    desktop.apply(DesktopAction::MinimizeWindow {
        window_id: terminal.clone(),
    });

    assert_eq!(desktop.state.window_order, vec![files, terminal.clone()]);
    assert!(!desktop.state.is_active(&terminal));
}

#[test]
fn maximize_then_restore_keeps_stored_rect() {
    let mut desktop = Desktop::catalog();
    let files = desktop.launch("files");
    let rect = desktop.state.window(&files).unwrap().rect;

    desktop.apply(DesktopAction::ToggleMaximize {
        window_id: files.clone(),
    });
    assert!(desktop.state.window(&files).unwrap().maximized);
    assert_eq!(desktop.state.window(&files).unwrap().rect, rect);

    desktop.apply(DesktopAction::ToggleMaximize {
        window_id: files.clone(),
    });
    let window = desktop.state.window(&files).unwrap();
    assert!(!window.maximized);
    assert_eq!(window.rect, rect);
}

#[test]
fn restore_clears_both_flags_and_returns_to_the_pre_maximize_rect() {
    let mut desktop = Desktop::catalog();
    let files = desktop.launch("files");
    let rect = desktop.state.window(&files).unwrap().rect;

    desktop.apply(DesktopAction::MaximizeWindow {
        window_id: files.clone(),
    });
    desktop.apply(DesktopAction::MinimizeWindow {
        window_id: files.clone(),
    });
    let window = desktop.state.window(&files).unwrap();
    assert!(window.maximized && window.minimized);

    desktop.apply(DesktopAction::RestoreWindow {
        window_id: files.clone(),
    });
    let window = desktop.state.window(&files).unwrap();
    assert!(!window.maximized);
    assert!(!window.minimized);
    assert_eq!(window.rect, rect);
}

#[test]
fn window_layer_is_maximized_only_while_a_maximized_window_is_visible() {
    let mut desktop = Desktop::catalog();
    let files = desktop.launch("files");
    desktop.launch("terminal");
    assert!(!desktop.state.any_window_maximized());

    desktop.apply(DesktopAction::MaximizeWindow {
        window_id: files.clone(),
    });
    assert!(desktop.state.any_window_maximized());

    desktop.apply(DesktopAction::MinimizeWindow {
        window_id: files.clone(),
    });
    assert!(!desktop.state.any_window_maximized());

    desktop.apply(DesktopAction::FocusWindow {
        window_id: files.clone(),
    });
    assert!(desktop.state.any_window_maximized());

    desktop.apply(DesktopAction::CloseWindow { window_id: files });
    assert!(!desktop.state.any_window_maximized());
}

#[test]
fn close_is_idempotent() {
    let mut desktop = Desktop::catalog();
    let files = desktop.launch("files");
    let terminal = desktop.launch("terminal");

    desktop.apply(DesktopAction::CloseWindow {
        window_id: files.clone(),
    });
    let after_first = desktop.state.clone();
    desktop.apply(DesktopAction::CloseWindow { window_id: files });

    assert_eq!(desktop.state, after_first);
    assert_eq!(desktop.state.window_order, vec![terminal]);
}

#[test]
fn window_actions_on_unknown_ids_are_noops() {
    let mut desktop = Desktop::catalog();
    desktop.launch("files");
    let before = desktop.state.clone();
    let ghost = WindowId("ghost-1".to_string());

    for action in [
        DesktopAction::FocusWindow { window_id: ghost.clone() },
        DesktopAction::MinimizeWindow { window_id: ghost.clone() },
        DesktopAction::MaximizeWindow { window_id: ghost.clone() },
        DesktopAction::RestoreWindow { window_id: ghost.clone() },
        DesktopAction::ToggleMaximize { window_id: ghost.clone() },
        DesktopAction::UpdateWindowPosition { window_id: ghost.clone(), x: 1, y: 2 },
        DesktopAction::UpdateWindowSize { window_id: ghost.clone(), w: 3, h: 4 },
        DesktopAction::BeginMove { window_id: ghost.clone(), pointer: PointerPosition::new(0, 0) },
        DesktopAction::CloseWindow { window_id: ghost.clone() },
    ] {
        desktop.apply(action);
    }

    assert_eq!(desktop.state, before);
    assert_eq!(desktop.interaction, InteractionState::default());
}

#[test]
fn reregistering_replaces_record_in_place() {
    let mut desktop = Desktop::catalog();
    let mut renamed = desktop.state.apps[2].clone();
    renamed.title = "Abacus".to_string();

    desktop.apply(DesktopAction::RegisterApp(renamed));

    assert_eq!(desktop.state.apps.len(), 7);
    assert_eq!(desktop.state.apps[2].id.as_str(), "calculator");
    assert_eq!(desktop.state.apps[2].title, "Abacus");
}

#[test]
fn dock_marks_running_apps() {
    let mut desktop = Desktop::catalog();
    let terminal = desktop.launch("terminal");
    desktop.apply(DesktopAction::MinimizeWindow { window_id: terminal });

    let running: Vec<_> = dock_items(&desktop.state)
        .into_iter()
        .filter(|item| item.running)
        .map(|item| item.app_id.to_string())
        .collect();

    assert_eq!(running, vec!["terminal"]);
}

#[test]
fn drag_below_activation_distance_does_not_move_window() {
    let mut desktop = Desktop::catalog();
    let files = desktop.launch("files");
    let rect = desktop.state.window(&files).unwrap().rect;

    desktop.apply(DesktopAction::BeginMove {
        window_id: files.clone(),
        pointer: PointerPosition::new(300, 110),
    });
    desktop.apply(DesktopAction::UpdateMove {
        pointer: PointerPosition::new(303, 113),
    });
    assert_eq!(desktop.interaction.drag_offset_for(&files), None);
    desktop.apply(DesktopAction::EndMove);

    assert_eq!(desktop.state.window(&files).unwrap().rect, rect);
    assert_eq!(desktop.interaction.dragging, None);
}

#[test]
fn drag_past_activation_distance_commits_on_release() {
    let mut desktop = Desktop::catalog();
    let files = desktop.launch("files");

    desktop.apply(DesktopAction::BeginMove {
        window_id: files.clone(),
        pointer: PointerPosition::new(300, 110),
    });
    desktop.apply(DesktopAction::UpdateMove {
        pointer: PointerPosition::new(350, 90),
    });
    assert_eq!(desktop.interaction.drag_offset_for(&files), Some((50, -20)));
    assert_eq!(desktop.state.window(&files).unwrap().rect.x, 240);

    desktop.apply(DesktopAction::EndMove);

    let rect = desktop.state.window(&files).unwrap().rect;
    assert_eq!((rect.x, rect.y), (290, 80));
}

#[test]
fn resize_from_west_edge_anchors_right_side_at_minimum() {
    let mut desktop = Desktop::catalog();
    let chat = desktop.launch("im");
    let start = desktop.state.window(&chat).unwrap().rect;

    desktop.apply(DesktopAction::BeginResize {
        window_id: chat.clone(),
        edge: ResizeEdge::West,
        pointer: PointerPosition::new(start.x, 300),
    });
    desktop.apply(DesktopAction::UpdateResize {
        pointer: PointerPosition::new(start.x + 500, 300),
    });
    desktop.apply(DesktopAction::EndResize);

    let rect = desktop.state.window(&chat).unwrap().rect;
    assert_eq!(rect.w, 860);
    assert_eq!(rect.x + rect.w, start.x + start.w);
    assert_eq!(rect.y, start.y);
}

#[test]
fn resize_from_south_east_grows_freely() {
    let mut desktop = Desktop::catalog();
    let files = desktop.launch("files");
    let start = desktop.state.window(&files).unwrap().rect;

    desktop.apply(DesktopAction::BeginResize {
        window_id: files.clone(),
        edge: ResizeEdge::SouthEast,
        pointer: PointerPosition::new(0, 0),
    });
    desktop.apply(DesktopAction::UpdateResize {
        pointer: PointerPosition::new(40, 25),
    });

    assert_eq!(
        desktop.state.window(&files).unwrap().rect,
        WindowRect {
            w: start.w + 40,
            h: start.h + 25,
            ..start
        }
    );
}

#[test]
fn locale_switch_relocalizes_once() {
    let mut desktop = Desktop::catalog();

    let effects = desktop.apply(DesktopAction::SetLocale(Locale::ZhTw));
    assert_eq!(effects, vec![RuntimeEffect::RelocalizeApps(Locale::ZhTw)]);
    for app in catalog_app_records(Locale::ZhTw) {
        desktop.apply(DesktopAction::RegisterApp(app));
    }

    assert_eq!(desktop.state.apps[2].title, "計算機");
    assert!(desktop.apply(DesktopAction::SetLocale(Locale::ZhTw)).is_empty());
}

/// Small deterministic generator for action sequences.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }
}

#[test]
fn invariants_hold_across_mixed_action_sequences() {
    const APPS: [&str; 4] = ["files", "terminal", "im", "notes"];

    for seed in 1..=20u64 {
        let mut apps = catalog_app_records(Locale::En);
        apps.push(record("notes", false, Some(WindowSize::new(320, 240))));
        let mut desktop = Desktop::with_apps(apps);
        let mut rng = XorShift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));

        for _ in 0..200 {
            let known: Vec<WindowId> = desktop.state.window_order.clone();
            let target = if known.is_empty() || rng.below(10) == 0 {
                WindowId("ghost-1".to_string())
            } else {
                known[rng.below(known.len())].clone()
            };
            let pointer = PointerPosition::new(rng.below(1280) as i32, rng.below(800) as i32);

            let action = match rng.below(12) {
                0 | 1 => DesktopAction::LaunchApp {
                    app_id: ApplicationId::trusted(APPS[rng.below(APPS.len())]),
                    placement: LaunchPlacement::sample(VIEWPORT),
                },
                2 => DesktopAction::CloseWindow { window_id: target },
                3 => DesktopAction::FocusWindow { window_id: target },
                4 => DesktopAction::MinimizeWindow { window_id: target },
                5 => DesktopAction::ToggleMaximize { window_id: target },
                6 => DesktopAction::RestoreWindow { window_id: target },
                7 => DesktopAction::BeginMove { window_id: target, pointer },
                8 => DesktopAction::UpdateMove { pointer },
                9 => DesktopAction::EndMove,
                10 => DesktopAction::BeginResize {
                    window_id: target,
                    edge: ResizeEdge::ALL[rng.below(ResizeEdge::ALL.len())],
                    pointer,
                },
                _ => DesktopAction::UpdateResize { pointer },
            };
            desktop.apply(action);

            if let Err(violation) = desktop.state.check_invariants() {
                panic!("seed {seed}: {violation}");
            }
            for app in ["files", "terminal", "im"] {
                let open = desktop
                    .state
                    .windows
                    .values()
                    .filter(|window| window.app_id.as_str() == app)
                    .count();
                assert!(open <= 1, "seed {seed}: {open} windows for {app}");
            }
        }
    }
}
