//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! Apps are plain Leptos views mounted inside runtime-managed windows. They receive an
//! [`AppMountContext`] describing their window, reactive shell state (lifecycle, locale, theme)
//! and an [`AppHost`] handle for the few shell mutations an app may request.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod i18n;
pub mod theme;

use std::rc::Rc;

use leptos::{Callable, Callback, Signal, View};
use platform_host::ChatService;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use i18n::{translations, Locale, Translations};
pub use theme::{ShadowPreset, ThemeConfig, ThemeConfigPatch, ThemeMode};

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = String;

/// Minimum window width applied when an app does not declare one.
pub const DEFAULT_MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum window height applied when an app does not declare one.
pub const DEFAULT_MIN_WINDOW_HEIGHT: i32 = 200;

/// Rejection reasons for [`ApplicationId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationIdError {
    /// The identifier was empty.
    #[error("application id must not be empty")]
    Empty,
    /// The identifier exceeded the length limit.
    #[error("application id `{0}` is longer than 64 characters")]
    TooLong(String),
    /// The identifier contained characters outside `[a-z0-9-]` or did not start with a letter.
    #[error("invalid application id `{0}`; expected lowercase letters, digits and dashes")]
    InvalidCharacters(String),
}

/// Stable identifier for an app package/module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase slug such as `calculator` or `im`.
    pub fn new(raw: impl Into<String>) -> Result<Self, ApplicationIdError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ApplicationIdError::Empty);
        }
        if raw.len() > 64 {
            return Err(ApplicationIdError::TooLong(raw));
        }
        let bytes = raw.as_bytes();
        let valid = bytes[0].is_ascii_lowercase()
            && !raw.ends_with('-')
            && bytes
                .iter()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-');
        if !valid {
            return Err(ApplicationIdError::InvalidCharacters(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque icon token rendered by the shell (dock, title bar).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppIcon(String);

impl AppIcon {
    /// Creates an icon token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the icon token.
    pub fn token(&self) -> &str {
        &self.0
    }
}

/// Width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl WindowSize {
    /// Creates a size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Minimum size used for apps that do not declare one.
    pub const fn default_minimum() -> Self {
        Self::new(DEFAULT_MIN_WINDOW_WIDTH, DEFAULT_MIN_WINDOW_HEIGHT)
    }
}

/// Lifecycle state derived by the window manager for a mounted app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppLifecycleEvent {
    /// Window is the topmost visible window.
    Focused,
    /// Window is visible but another window is on top.
    Blurred,
    /// Window is minimized and hidden.
    Minimized,
}

impl AppLifecycleEvent {
    /// Returns a stable string token for debugging hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Focused => "focused",
            Self::Blurred => "blurred",
            Self::Minimized => "minimized",
        }
    }
}

/// Shell mutations an app may request through [`AppHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Switch between dark and light mode.
    SetThemeMode(ThemeMode),
    /// Merge a partial theme update into the global theme configuration.
    PatchTheme(ThemeConfigPatch),
    /// Change the system language.
    SetLocale(Locale),
    /// Close the window hosting the app.
    CloseWindow,
}

#[derive(Clone, Copy)]
/// Command channel from a mounted app to the desktop runtime.
pub struct AppHost {
    sender: Callback<AppCommand>,
}

impl AppHost {
    /// Creates a host handle backed by a runtime callback.
    pub fn new(sender: Callback<AppCommand>) -> Self {
        Self { sender }
    }

    /// Sends a command to the runtime.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }

    /// Requests a theme mode change.
    pub fn set_theme_mode(&self, mode: ThemeMode) {
        self.send(AppCommand::SetThemeMode(mode));
    }

    /// Requests a partial theme configuration update.
    pub fn patch_theme(&self, patch: ThemeConfigPatch) {
        self.send(AppCommand::PatchTheme(patch));
    }

    /// Requests a system language change.
    pub fn set_locale(&self, locale: Locale) {
        self.send(AppCommand::SetLocale(locale));
    }

    /// Requests closing the current window.
    pub fn close_window(&self) {
        self.send(AppCommand::CloseWindow);
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Stable app id from the registry.
    pub app_id: ApplicationId,
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Reactive lifecycle state for this window.
    pub lifecycle: Signal<AppLifecycleEvent>,
    /// Reactive system language.
    pub locale: Signal<Locale>,
    /// Reactive theme mode.
    pub theme_mode: Signal<ThemeMode>,
    /// Reactive theme configuration.
    pub theme_config: Signal<ThemeConfig>,
    /// Command channel back to the runtime.
    pub host: AppHost,
    /// AI chat service used by messaging apps.
    pub chat: Rc<dyn ChatService>,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module referenced by the app registry.
///
/// The mount function only runs when a window body is rendered, so registering an app never
/// builds its view.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

impl PartialEq for AppModule {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.mount_fn as *const (), other.mount_fn as *const ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_id_accepts_plain_slugs() {
        assert_eq!(ApplicationId::new("calculator").unwrap().as_str(), "calculator");
        assert_eq!(ApplicationId::new("im").unwrap().as_str(), "im");
        assert!(ApplicationId::new("web-view2").is_ok());
    }

    #[test]
    fn application_id_rejects_malformed_values() {
        assert_eq!(ApplicationId::new(""), Err(ApplicationIdError::Empty));
        assert!(matches!(
            ApplicationId::new("Calc"),
            Err(ApplicationIdError::InvalidCharacters(_))
        ));
        assert!(matches!(
            ApplicationId::new("9lives"),
            Err(ApplicationIdError::InvalidCharacters(_))
        ));
        assert!(matches!(
            ApplicationId::new("calc-"),
            Err(ApplicationIdError::InvalidCharacters(_))
        ));
        assert!(matches!(
            ApplicationId::new("a".repeat(65)),
            Err(ApplicationIdError::TooLong(_))
        ));
    }

    #[test]
    fn lifecycle_tokens_name_each_state() {
        let tokens: Vec<_> = [
            AppLifecycleEvent::Focused,
            AppLifecycleEvent::Blurred,
            AppLifecycleEvent::Minimized,
        ]
        .into_iter()
        .map(AppLifecycleEvent::token)
        .collect();
        assert_eq!(tokens, vec!["focused", "blurred", "minimized"]);
    }

    #[test]
    fn default_minimum_size_is_300_by_200() {
        assert_eq!(WindowSize::default_minimum(), WindowSize::new(300, 200));
    }
}
