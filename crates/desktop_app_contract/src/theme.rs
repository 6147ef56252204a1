//! Global theme value types shared by the shell's theme manager and the settings app.

use serde::{Deserialize, Serialize};

/// Dark/light presentation mode applied as a root class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark surfaces (default).
    #[default]
    Dark,
    /// Light surfaces.
    Light,
}

impl ThemeMode {
    /// Returns the root class name for this mode.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Named shadow presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowPreset {
    /// No shadow.
    None,
    /// Small shadow.
    Sm,
    /// Default shadow.
    #[default]
    Base,
    /// Large shadow.
    Lg,
    /// Extra large shadow.
    Xl,
}

impl ShadowPreset {
    /// All presets in display order.
    pub const ALL: [ShadowPreset; 5] = [Self::None, Self::Sm, Self::Base, Self::Lg, Self::Xl];

    /// Returns the stable token for this preset.
    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Parses a preset token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.token() == token)
    }
}

/// Visual style tokens applied globally by the theme manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Primary color: an HSL component triple (`"262.1 83.3% 57.8%"`) or a full color expression.
    pub primary: String,
    /// Secondary color, same format as [`ThemeConfig::primary`].
    pub secondary: String,
    /// Corner radius in rem.
    pub radius: f64,
    /// Base font size in pixels.
    pub font_size: u32,
    /// Font family name.
    pub font_family: String,
    /// Shadow preset.
    pub shadow: ShadowPreset,
    /// Spacing multiplier.
    pub spacing: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "262.1 83.3% 57.8%".to_string(),
            secondary: "262.1 40% 90%".to_string(),
            radius: 0.5,
            font_size: 16,
            font_family: "Inter".to_string(),
            shadow: ShadowPreset::Base,
            spacing: 1.0,
        }
    }
}

impl ThemeConfig {
    /// Merges every field present in `patch`, leaving the others untouched.
    pub fn merge(&mut self, patch: ThemeConfigPatch) {
        if let Some(primary) = patch.primary {
            self.primary = primary;
        }
        if let Some(secondary) = patch.secondary {
            self.secondary = secondary;
        }
        if let Some(radius) = patch.radius {
            self.radius = radius;
        }
        if let Some(font_size) = patch.font_size {
            self.font_size = font_size;
        }
        if let Some(font_family) = patch.font_family {
            self.font_family = font_family;
        }
        if let Some(shadow) = patch.shadow {
            self.shadow = shadow;
        }
        if let Some(spacing) = patch.spacing {
            self.spacing = spacing;
        }
    }
}

/// Partial update for [`ThemeConfig`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeConfigPatch {
    /// New primary color.
    pub primary: Option<String>,
    /// New secondary color.
    pub secondary: Option<String>,
    /// New corner radius.
    pub radius: Option<f64>,
    /// New base font size.
    pub font_size: Option<u32>,
    /// New font family.
    pub font_family: Option<String>,
    /// New shadow preset.
    pub shadow: Option<ShadowPreset>,
    /// New spacing multiplier.
    pub spacing: Option<f64>,
}

impl ThemeConfigPatch {
    /// Returns whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_only_overwrites_present_fields() {
        let mut config = ThemeConfig::default();
        config.merge(ThemeConfigPatch {
            radius: Some(1.25),
            shadow: Some(ShadowPreset::Xl),
            ..ThemeConfigPatch::default()
        });

        assert_eq!(
            config,
            ThemeConfig {
                radius: 1.25,
                shadow: ShadowPreset::Xl,
                ..ThemeConfig::default()
            }
        );
    }

    #[test]
    fn empty_patch_is_a_noop() {
        let mut config = ThemeConfig::default();
        let patch = ThemeConfigPatch::default();
        assert!(patch.is_empty());
        config.merge(patch);
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn shadow_tokens_round_trip_through_serde() {
        let json = serde_json::to_string(&ShadowPreset::Lg).unwrap();
        assert_eq!(json, "\"lg\"");
        assert_eq!(ShadowPreset::from_token("sm"), Some(ShadowPreset::Sm));
        assert_eq!(ShadowPreset::from_token("huge"), None);
    }
}
