//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{
    apps, reducer::DesktopAction, reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext, theme,
};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the current queue before processing so nested dispatches enqueue a fresh batch instead
    // of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::ApplyTheme => {
            let desktop = runtime.state.get_untracked();
            runtime.host.with_value(|host| {
                theme::apply_theme(host.style.as_ref(), &desktop.theme_config, desktop.theme_mode)
            });
        }
        RuntimeEffect::RelocalizeApps(locale) => {
            let records = apps::catalog_app_records(locale);
            if records.is_empty() {
                logging::warn!("no catalog apps to relocalize for {}", locale.tag());
            }
            for record in records {
                runtime.dispatch_action(DesktopAction::RegisterApp(record));
            }
        }
    }
}
