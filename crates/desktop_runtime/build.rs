use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_TITLE_KEYS: [&str; 7] = [
    "terminal",
    "safari",
    "calculator",
    "paint",
    "files",
    "chat",
    "settings",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogEntry {
    app_id: String,
    title_key: String,
    icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_height: Option<i32>,
    #[serde(default = "default_single_instance")]
    single_instance: bool,
}

fn default_single_instance() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    apps: Vec<CatalogEntry>,
}

fn is_app_slug(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    !bytes.is_empty()
        && bytes.len() <= 64
        && bytes[0].is_ascii_lowercase()
        && !raw.ends_with('-')
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    let mut seen = BTreeSet::new();
    for entry in &catalog.apps {
        if !is_app_slug(&entry.app_id) {
            panic!("invalid app id `{}` in {}", entry.app_id, path.display());
        }
        if !seen.insert(entry.app_id.clone()) {
            panic!("duplicate app id `{}` in {}", entry.app_id, path.display());
        }
        if !KNOWN_TITLE_KEYS.contains(&entry.title_key.as_str()) {
            panic!(
                "unknown title key `{}` for app `{}`",
                entry.title_key, entry.app_id
            );
        }
        for (axis, value) in [("min_width", entry.min_width), ("min_height", entry.min_height)] {
            if value.is_some_and(|v| v <= 0) {
                panic!("{axis} for app `{}` must be positive", entry.app_id);
            }
        }
    }

    let json = serde_json::to_string_pretty(&catalog.apps).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON, in dock order.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
