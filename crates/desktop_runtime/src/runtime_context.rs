//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, host services
//! and built-in app registration. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use desktop_app_contract::{AppCommand, ApplicationId};
use leptos::*;
use platform_host::{HostServices, Viewport};

use crate::{
    apps, effect_executor,
    model::{DesktopState, InteractionState, LaunchPlacement, WindowId},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<HostServices>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Returns the current viewport reported by the host.
    pub fn viewport(&self) -> Viewport {
        self.host.with_value(|host| host.viewport.viewport())
    }

    /// Launches (or focuses) an app, placing new windows around the viewport center.
    pub fn launch_app(&self, app_id: ApplicationId) {
        self.dispatch_action(DesktopAction::LaunchApp {
            app_id,
            placement: LaunchPlacement::sample(self.viewport()),
        });
    }

    /// Applies a command sent by the app hosted in `window_id`.
    pub fn handle_app_command(&self, window_id: WindowId, command: AppCommand) {
        self.dispatch_action(app_command_action(window_id, command));
    }
}

/// Maps an app command onto the reducer action it requests.
pub fn app_command_action(window_id: WindowId, command: AppCommand) -> DesktopAction {
    match command {
        AppCommand::SetThemeMode(mode) => DesktopAction::SetThemeMode(mode),
        AppCommand::PatchTheme(patch) => DesktopAction::PatchThemeConfig(patch),
        AppCommand::SetLocale(locale) => DesktopAction::SetLocale(locale),
        AppCommand::CloseWindow => DesktopAction::CloseWindow { window_id },
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    let locale = runtime.state.get_untracked().locale;
    for record in apps::catalog_app_records(locale) {
        runtime.dispatch_action(DesktopAction::RegisterApp(record));
    }
    runtime.effects.update(|queue| queue.push(RuntimeEffect::ApplyTheme));
    effect_executor::install(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and registers built-in apps.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    logging::log!(
        "desktop runtime starting with {} host",
        host_services.host_strategy.as_str()
    );
    let host = store_value(host_services);
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let new_effects = reduce_desktop(&mut desktop, &mut ui, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            effects.update(|queue| queue.extend(new_effects));
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{Locale, ThemeMode};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_commands_map_to_reducer_actions() {
        let window_id = WindowId("settings-1".to_string());
        assert_eq!(
            app_command_action(window_id.clone(), AppCommand::CloseWindow),
            DesktopAction::CloseWindow {
                window_id: window_id.clone()
            }
        );
        assert_eq!(
            app_command_action(window_id.clone(), AppCommand::SetLocale(Locale::ZhTw)),
            DesktopAction::SetLocale(Locale::ZhTw)
        );
        assert_eq!(
            app_command_action(window_id, AppCommand::SetThemeMode(ThemeMode::Light)),
            DesktopAction::SetThemeMode(ThemeMode::Light)
        );
    }
}
