//! Projection of the theme configuration onto global style variables.

use desktop_app_contract::{ShadowPreset, ThemeConfig, ThemeMode};
use platform_host::StyleSink;

/// CSS value for a shadow preset.
pub fn shadow_css(shadow: ShadowPreset) -> &'static str {
    match shadow {
        ShadowPreset::None => "none",
        ShadowPreset::Sm => "0 1px 2px 0 rgb(0 0 0 / 0.05)",
        ShadowPreset::Base => "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
        ShadowPreset::Lg => "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
        ShadowPreset::Xl => "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    }
}

/// Wraps bare HSL component triples in `hsl(...)`; full color expressions pass through.
pub fn color_css(value: &str) -> String {
    if value.contains('(') {
        value.to_string()
    } else {
        format!("hsl({value})")
    }
}

/// Every style write needed to apply a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStylePlan {
    pub root_properties: Vec<(&'static str, String)>,
    pub body_styles: Vec<(&'static str, String)>,
    pub mode_class: &'static str,
}

pub fn theme_style_plan(config: &ThemeConfig, mode: ThemeMode) -> ThemeStylePlan {
    let font_size = format!("{}px", config.font_size);
    ThemeStylePlan {
        root_properties: vec![
            ("--primary", color_css(&config.primary)),
            ("--secondary", color_css(&config.secondary)),
            ("--radius", format!("{}rem", config.radius)),
            ("--font-size-base", font_size.clone()),
            ("--font-family", config.font_family.clone()),
            ("--spacing-scale", config.spacing.to_string()),
            ("--shadow-custom", shadow_css(config.shadow).to_string()),
        ],
        body_styles: vec![
            ("font-size", font_size),
            ("font-family", config.font_family.clone()),
        ],
        mode_class: mode.class_name(),
    }
}

/// Writes the theme into `sink`.
pub fn apply_theme(sink: &dyn StyleSink, config: &ThemeConfig, mode: ThemeMode) {
    let plan = theme_style_plan(config, mode);
    for (name, value) in &plan.root_properties {
        sink.set_root_property(name, value);
    }
    for (name, value) in &plan.body_styles {
        sink.set_body_style(name, value);
    }
    sink.set_root_class(
        plan.mode_class,
        &[ThemeMode::Dark.class_name(), ThemeMode::Light.class_name()],
    );
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ThemeConfigPatch;
    use platform_host::MemoryStyleSink;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_theme_projects_expected_variables() {
        let sink = MemoryStyleSink::default();
        apply_theme(&sink, &ThemeConfig::default(), ThemeMode::Dark);

        assert_eq!(
            sink.root_property("--primary").as_deref(),
            Some("hsl(262.1 83.3% 57.8%)")
        );
        assert_eq!(sink.root_property("--radius").as_deref(), Some("0.5rem"));
        assert_eq!(
            sink.root_property("--font-size-base").as_deref(),
            Some("16px")
        );
        assert_eq!(sink.root_property("--spacing-scale").as_deref(), Some("1"));
        assert_eq!(
            sink.root_property("--shadow-custom").as_deref(),
            Some(shadow_css(ShadowPreset::Base))
        );
        assert_eq!(sink.body_style("font-family").as_deref(), Some("Inter"));
        assert_eq!(sink.root_classes(), vec!["dark".to_string()]);
    }

    #[test]
    fn full_color_expressions_are_not_wrapped() {
        let mut config = ThemeConfig::default();
        config.merge(ThemeConfigPatch {
            primary: Some("rgb(1 2 3)".to_string()),
            radius: Some(1.25),
            spacing: Some(1.5),
            ..ThemeConfigPatch::default()
        });
        let plan = theme_style_plan(&config, ThemeMode::Light);
        assert_eq!(plan.root_properties[0], ("--primary", "rgb(1 2 3)".to_string()));
        assert_eq!(plan.root_properties[2], ("--radius", "1.25rem".to_string()));
        assert_eq!(plan.root_properties[5], ("--spacing-scale", "1.5".to_string()));
        assert_eq!(plan.mode_class, "light");
    }

    #[test]
    fn mode_switch_replaces_previous_class() {
        let sink = MemoryStyleSink::default();
        apply_theme(&sink, &ThemeConfig::default(), ThemeMode::Dark);
        apply_theme(&sink, &ThemeConfig::default(), ThemeMode::Light);
        assert_eq!(sink.root_classes(), vec!["light".to_string()]);
    }
}
