//! Built-in app catalog and registry records.
//!
//! Catalog metadata comes from `app_catalog.toml`, validated by the build script and embedded as
//! JSON. Titles are resolved per locale when records are built, so a locale change re-registers
//! every catalog app.

mod placeholders;

use desktop_app_calculator::CalculatorApp;
use desktop_app_chat::ChatApp;
use desktop_app_contract::{
    translations, AppIcon, AppMountContext, AppMountFn, AppModule, ApplicationId, ApplicationIdError, Locale,
    WindowSize, DEFAULT_MIN_WINDOW_HEIGHT, DEFAULT_MIN_WINDOW_WIDTH,
};
use desktop_app_settings::SettingsApp;
use desktop_app_terminal::TerminalApp;
use leptos::*;
use serde::Deserialize;
use thiserror::Error;

use crate::model::AppRecord;

pub use placeholders::{mock_files, normalize_browser_url, MockFile, MockFileKind};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Catalog entry as embedded by the build script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub app_id: String,
    pub title_key: String,
    pub icon: String,
    #[serde(default)]
    pub min_width: Option<i32>,
    #[serde(default)]
    pub min_height: Option<i32>,
    #[serde(default = "default_single_instance")]
    pub single_instance: bool,
}

fn default_single_instance() -> bool {
    true
}

#[derive(Debug, Error)]
/// Failures turning catalog JSON into registry records.
pub enum CatalogError {
    /// The catalog JSON did not match the entry schema.
    #[error("app catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// An entry carried an invalid app id.
    #[error(transparent)]
    InvalidAppId(#[from] ApplicationIdError),
    /// An entry referenced a title key missing from the locale tables.
    #[error("unknown title key `{0}`")]
    UnknownTitleKey(String),
    /// No mountable module is linked for the app id.
    #[error("no app module linked for `{0}`")]
    MissingModule(String),
}

pub fn parse_app_catalog(raw: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

fn mount_calculator_app(context: AppMountContext) -> View {
    view! { <CalculatorApp context=context /> }.into_view()
}

fn mount_terminal_app(context: AppMountContext) -> View {
    view! { <TerminalApp context=context /> }.into_view()
}

fn mount_settings_app(context: AppMountContext) -> View {
    view! { <SettingsApp context=context /> }.into_view()
}

fn mount_chat_app(context: AppMountContext) -> View {
    view! { <ChatApp context=context /> }.into_view()
}

/// Returns the module linked for a catalog app id.
pub fn app_module_by_id(app_id: &str) -> Option<AppModule> {
    let mount: AppMountFn = match app_id {
        "terminal" => mount_terminal_app,
        "safari" => placeholders::mount_browser_app,
        "calculator" => mount_calculator_app,
        "paint" => placeholders::mount_paint_app,
        "files" => placeholders::mount_files_app,
        "im" => mount_chat_app,
        "settings" => mount_settings_app,
        _ => return None,
    };
    Some(AppModule::new(mount))
}

/// Builds the registry record for one catalog entry with the title for `locale`.
pub fn app_record_from_entry(entry: &CatalogEntry, locale: Locale) -> Result<AppRecord, CatalogError> {
    let id = ApplicationId::new(entry.app_id.clone())?;
    let title = translations(locale)
        .apps
        .by_key(&entry.title_key)
        .ok_or_else(|| CatalogError::UnknownTitleKey(entry.title_key.clone()))?;
    let module =
        app_module_by_id(id.as_str()).ok_or_else(|| CatalogError::MissingModule(entry.app_id.clone()))?;
    let min_size = match (entry.min_width, entry.min_height) {
        (None, None) => None,
        (width, height) => Some(WindowSize::new(
            width.unwrap_or(DEFAULT_MIN_WINDOW_WIDTH),
            height.unwrap_or(DEFAULT_MIN_WINDOW_HEIGHT),
        )),
    };

    Ok(AppRecord {
        id,
        title: title.to_string(),
        icon: AppIcon::new(entry.icon.clone()),
        module,
        min_size,
        single_instance: entry.single_instance,
    })
}

/// Registry records for every built-in app, localized for `locale`, in dock order.
///
/// Broken entries are logged and skipped.
pub fn catalog_app_records(locale: Locale) -> Vec<AppRecord> {
    let entries = match parse_app_catalog(APP_CATALOG_JSON) {
        Ok(entries) => entries,
        Err(err) => {
            logging::warn!("app catalog unavailable: {err}");
            return Vec::new();
        }
    };

    entries
        .iter()
        .filter_map(|entry| match app_record_from_entry(entry, locale) {
            Ok(record) => Some(record),
            Err(err) => {
                logging::warn!("skipping app `{}`: {err}", entry.app_id);
                None
            }
        })
        .collect()
}
