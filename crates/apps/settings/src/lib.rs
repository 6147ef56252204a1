//! Built-in System Settings app for theme mode, brand colors, typography, component tokens and
//! system language.
//!
//! Every change is sent to the runtime through [`desktop_app_contract::AppHost`]; the app keeps
//! no copy of the theme and renders straight from the reactive mount context.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod color;

use desktop_app_contract::{
    translations, AppMountContext, Locale, ShadowPreset, ThemeConfigPatch, ThemeMode,
};
use leptos::*;

use crate::color::{hex_to_hsl, hsl_to_hex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Appearance,
    Components,
    System,
}

impl SettingsTab {
    const ALL: [SettingsTab; 3] = [Self::Appearance, Self::Components, Self::System];

    fn label(self, locale: Locale) -> &'static str {
        let tabs = &translations(locale).settings.tabs;
        match self {
            Self::Appearance => tabs.appearance,
            Self::Components => tabs.components,
            Self::System => tabs.system,
        }
    }
}

const FONT_FAMILIES: [(&str, &str); 4] = [
    ("Inter", "Inter (Default)"),
    ("'Roboto Mono', monospace", "Roboto Mono"),
    ("'Outfit', sans-serif", "Outfit"),
    ("serif", "Times New Roman"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrandColor {
    Primary,
    Secondary,
}

fn brand_color_patch(which: BrandColor, picked_hex: &str) -> Option<ThemeConfigPatch> {
    let hsl = hex_to_hsl(picked_hex)?;
    Some(match which {
        BrandColor::Primary => ThemeConfigPatch {
            primary: Some(hsl),
            ..ThemeConfigPatch::default()
        },
        BrandColor::Secondary => ThemeConfigPatch {
            secondary: Some(hsl),
            ..ThemeConfigPatch::default()
        },
    })
}

#[component]
/// Settings app window contents.
pub fn SettingsApp(context: AppMountContext) -> impl IntoView {
    let active_tab = create_rw_signal(SettingsTab::Appearance);
    let locale = context.locale;
    let theme_mode = context.theme_mode;
    let theme_config = context.theme_config;
    let host = context.host;
    let strings = move || &translations(locale.get()).settings;

    let tab_bar = move || {
        SettingsTab::ALL
            .into_iter()
            .map(|tab| {
                view! {
                    <button
                        type="button"
                        role="tab"
                        class="settings-tab"
                        class:active=move || active_tab.get() == tab
                        aria-selected=move || (active_tab.get() == tab).to_string()
                        on:click=move |_| active_tab.set(tab)
                    >
                        {move || tab.label(locale.get())}
                    </button>
                }
            })
            .collect_view()
    };

    let mode_button = move |mode: ThemeMode| {
        view! {
            <button
                type="button"
                class="settings-mode-option"
                class:active=move || theme_mode.get() == mode
                on:click=move |_| host.set_theme_mode(mode)
            >
                <span class=format!("settings-mode-swatch {}", mode.class_name()) aria-hidden="true"></span>
                <span>
                    {move || match mode {
                        ThemeMode::Dark => strings().theme.dark,
                        ThemeMode::Light => strings().theme.light,
                    }}
                </span>
            </button>
        }
    };

    let color_row = move |which: BrandColor| {
        let current = move || {
            theme_config.with(|config| match which {
                BrandColor::Primary => hsl_to_hex(&config.primary),
                BrandColor::Secondary => hsl_to_hex(&config.secondary),
            })
        };
        view! {
            <div class="settings-color-row">
                <label class="settings-label">
                    {move || match which {
                        BrandColor::Primary => strings().brand.primary,
                        BrandColor::Secondary => strings().brand.secondary,
                    }}
                </label>
                <input
                    type="color"
                    class="settings-color-input"
                    prop:value=current
                    on:input=move |ev| {
                        if let Some(patch) = brand_color_patch(which, &event_target_value(&ev)) {
                            host.patch_theme(patch);
                        }
                    }
                />
                <span class="settings-hint">
                    {move || match which {
                        BrandColor::Primary => strings().brand.desc_primary,
                        BrandColor::Secondary => strings().brand.desc_secondary,
                    }}
                </span>
            </div>
        }
    };

    let appearance = move || {
        view! {
            <section class="settings-panel">
                <h2>{move || strings().theme.title}</h2>
                <div class="settings-mode-grid">
                    {mode_button(ThemeMode::Dark)}
                    {mode_button(ThemeMode::Light)}
                </div>
            </section>
            <section class="settings-panel">
                <h2>{move || strings().brand.title}</h2>
                {color_row(BrandColor::Primary)}
                {color_row(BrandColor::Secondary)}
            </section>
            <section class="settings-panel">
                <h2>{move || strings().typography.title}</h2>
                <label class="settings-label">{move || strings().typography.family}</label>
                <select
                    class="settings-select"
                    on:change=move |ev| {
                        host.patch_theme(ThemeConfigPatch {
                            font_family: Some(event_target_value(&ev)),
                            ..ThemeConfigPatch::default()
                        })
                    }
                >
                    {FONT_FAMILIES
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <option
                                    value=value
                                    selected=move || theme_config.with(|config| config.font_family == value)
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </section>
        }
    };

    let components = move || {
        view! {
            <section class="settings-panel">
                <h2>{move || strings().components.title}</h2>
                <label class="settings-label settings-slider-label">
                    <span>{move || strings().components.font_size}</span>
                    <span class="settings-value">{move || format!("{}px", theme_config.with(|c| c.font_size))}</span>
                </label>
                <input
                    type="range"
                    min="12"
                    max="24"
                    step="1"
                    prop:value=move || theme_config.with(|c| c.font_size.to_string())
                    on:input=move |ev| {
                        if let Ok(font_size) = event_target_value(&ev).parse::<u32>() {
                            host.patch_theme(ThemeConfigPatch {
                                font_size: Some(font_size),
                                ..ThemeConfigPatch::default()
                            });
                        }
                    }
                />
                <label class="settings-label settings-slider-label">
                    <span>{move || strings().components.radius}</span>
                    <span class="settings-value">{move || format!("{}rem", theme_config.with(|c| c.radius))}</span>
                </label>
                <input
                    type="range"
                    min="0"
                    max="2"
                    step="0.1"
                    prop:value=move || theme_config.with(|c| c.radius.to_string())
                    on:input=move |ev| {
                        if let Ok(radius) = event_target_value(&ev).parse::<f64>() {
                            host.patch_theme(ThemeConfigPatch {
                                radius: Some(radius),
                                ..ThemeConfigPatch::default()
                            });
                        }
                    }
                />
                <label class="settings-label settings-slider-label">
                    <span>{move || strings().components.spacing}</span>
                    <span class="settings-value">{move || format!("{}x", theme_config.with(|c| c.spacing))}</span>
                </label>
                <input
                    type="range"
                    min="0.5"
                    max="2"
                    step="0.1"
                    prop:value=move || theme_config.with(|c| c.spacing.to_string())
                    on:input=move |ev| {
                        if let Ok(spacing) = event_target_value(&ev).parse::<f64>() {
                            host.patch_theme(ThemeConfigPatch {
                                spacing: Some(spacing),
                                ..ThemeConfigPatch::default()
                            });
                        }
                    }
                />
                <label class="settings-label">{move || strings().components.shadow}</label>
                <div class="settings-shadow-grid">
                    {ShadowPreset::ALL
                        .into_iter()
                        .map(|shadow| {
                            view! {
                                <button
                                    type="button"
                                    class="settings-shadow-option"
                                    class:active=move || theme_config.with(|c| c.shadow == shadow)
                                    on:click=move |_| {
                                        host.patch_theme(ThemeConfigPatch {
                                            shadow: Some(shadow),
                                            ..ThemeConfigPatch::default()
                                        })
                                    }
                                >
                                    {shadow.token().to_uppercase()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        }
    };

    let system = move || {
        view! {
            <section class="settings-panel">
                <h2>{move || strings().system.language}</h2>
                <label class="settings-label">{move || strings().system.sys_language}</label>
                <select
                    class="settings-select"
                    aria-label=move || strings().system.placeholder
                    on:change=move |ev| {
                        if let Some(next) = Locale::from_tag(&event_target_value(&ev)) {
                            host.set_locale(next);
                        }
                    }
                >
                    {Locale::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.tag() selected=move || locale.get() == option>
                                    {option.native_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </section>
        }
    };

    view! {
        <div class="app-shell app-settings-shell">
            <h1 class="settings-title">{move || strings().title}</h1>
            <div class="settings-tabs" role="tablist">{tab_bar}</div>
            <div class="settings-tab-panel" role="tabpanel">
                {move || match active_tab.get() {
                    SettingsTab::Appearance => appearance().into_view(),
                    SettingsTab::Components => components().into_view(),
                    SettingsTab::System => system().into_view(),
                }}
            </div>
            <p class="settings-tip">{move || strings().tip}</p>
        </div>
    }
}
