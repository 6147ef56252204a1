//! Desktop window manager runtime: reducer, app registry, theme projection and shell UI.
//!
//! State transitions live in [`reducer::reduce_desktop`] and are pure; browser work (theme CSS
//! variables, pointer listeners, chat requests) happens behind [`platform_host::HostServices`].

pub mod apps;
pub mod components;
pub mod dock;
mod effect_executor;
pub mod interaction;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod theme;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use dock::{dock_items, DockItem};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::app_command_action;
pub use theme::{apply_theme, theme_style_plan, ThemeStylePlan};
