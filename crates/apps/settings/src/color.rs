//! Conversions between `#rrggbb` picker values and the HSL component triples stored in the theme.

/// Returns the HSL triple (`"262 83.3% 57.8%"`) for a `#rgb` or `#rrggbb` color.
pub(crate) fn hex_to_hsl(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    let channel = |raw: &str| u8::from_str_radix(raw, 16).ok().map(|v| f64::from(v) / 255.0);
    let (r, g, b) = match digits.len() {
        3 => {
            let expand = |i: usize| {
                let pair = digits.get(i..=i)?.repeat(2);
                channel(&pair)
            };
            (expand(0)?, expand(1)?, expand(2)?)
        }
        6 => (
            channel(digits.get(0..2)?)?,
            channel(digits.get(2..4)?)?,
            channel(digits.get(4..6)?)?,
        ),
        _ => return None,
    };

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    // Folds negative sectors and `-0` into `[0, 360)`.
    let hue = ((sector * 60.0).round() + 360.0) % 360.0;

    let lightness = (max + min) / 2.0;
    let saturation = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    Some(format!(
        "{hue} {}% {}%",
        one_decimal(saturation * 100.0),
        one_decimal(lightness * 100.0)
    ))
}

/// Returns `#rrggbb` for an HSL triple, or black when the value is not a triple.
pub(crate) fn hsl_to_hex(hsl: &str) -> String {
    parse_hsl(hsl)
        .map(|(h, s, l)| {
            let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
            let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
            let m = l - c / 2.0;
            let (r, g, b) = match h {
                h if (0.0..60.0).contains(&h) => (c, x, 0.0),
                h if (60.0..120.0).contains(&h) => (x, c, 0.0),
                h if (120.0..180.0).contains(&h) => (0.0, c, x),
                h if (180.0..240.0).contains(&h) => (0.0, x, c),
                h if (240.0..300.0).contains(&h) => (x, 0.0, c),
                h if (300.0..360.0).contains(&h) => (c, 0.0, x),
                _ => (0.0, 0.0, 0.0),
            };
            let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
            format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
        })
        .unwrap_or_else(|| "#000000".to_string())
}

fn parse_hsl(hsl: &str) -> Option<(f64, f64, f64)> {
    let mut parts = hsl.split_whitespace().map(|part| part.trim_end_matches('%').parse::<f64>());
    let h = parts.next()?.ok()?;
    let s = parts.next()?.ok()? / 100.0;
    let l = parts.next()?.ok()? / 100.0;
    if parts.next().is_some() {
        return None;
    }
    Some((h, s, l))
}

fn one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hex_to_hsl_matches_default_primary() {
        assert_eq!(hex_to_hsl("#7c3aed").as_deref(), Some("262 83.3% 57.8%"));
        assert_eq!(hex_to_hsl("#ff0000").as_deref(), Some("0 100% 50%"));
        assert_eq!(hex_to_hsl("#808080").as_deref(), Some("0 0% 50.2%"));
    }

    #[test]
    fn reds_leaning_blue_wrap_into_positive_hues() {
        assert_eq!(hex_to_hsl("#ff0001").as_deref(), Some("0 100% 50%"));
        assert_eq!(hex_to_hsl("#ff0080").as_deref(), Some("330 100% 50%"));
    }

    #[test]
    fn short_hex_expands_each_digit() {
        assert_eq!(hex_to_hsl("#f00"), hex_to_hsl("#ff0000"));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(hex_to_hsl("7c3aed"), None);
        assert_eq!(hex_to_hsl("#7c3ae"), None);
        assert_eq!(hex_to_hsl("#zzzzzz"), None);
    }

    #[test]
    fn hsl_to_hex_converts_theme_triples() {
        assert_eq!(hsl_to_hex("262.1 83.3% 57.8%"), "#7c3aed");
        assert_eq!(hsl_to_hex("0 100% 50%"), "#ff0000");
        assert_eq!(hsl_to_hex("120 100% 25%"), "#008000");
    }

    #[test]
    fn non_triples_fall_back_to_black() {
        assert_eq!(hsl_to_hex("rgb(1, 2, 3)"), "#000000");
        assert_eq!(hsl_to_hex("10 20%"), "#000000");
    }

    #[test]
    fn picked_colors_survive_a_round_trip() {
        for hex in ["#ff0000", "#008000", "#336699"] {
            let hsl = hex_to_hsl(hex).unwrap();
            assert_eq!(hsl_to_hex(&hsl), hex, "{hsl}");
        }
    }
}
