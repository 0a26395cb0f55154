use serde::{Deserialize, Serialize};

/// Concrete visual treatment for cards. Missing keys in JSON fall back to
/// the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CardTheme {
    /// Pixels per spacing unit; layout gaps are given in units.
    pub spacing_px: f32,
    pub border_color: String,
    pub active_border_color: String,
    pub background: String,
    pub active_background: String,
    pub radius_px: u32,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self {
            spacing_px: 8.0,
            border_color: "#e0e0e0".to_string(),
            active_border_color: "#1976d2".to_string(),
            background: "#ffffff".to_string(),
            active_background: "#e3f2fd".to_string(),
            radius_px: 8,
        }
    }
}

// Colors are spliced into an inline style, so they must stay a single value.
fn validate_color(key: &str, value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("Invalid {}: empty color", key));
    }
    if value.contains(|c: char| matches!(c, ';' | ':' | '{' | '}' | '"' | '\'' | '<' | '>' | '\\')) {
        return Err(format!("Invalid {}: '{}'", key, value));
    }
    Ok(())
}

impl CardTheme {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let theme: CardTheme = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse card theme: {}", e))?;
        theme.validate()?;
        Ok(theme)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.spacing_px.is_finite() || self.spacing_px < 0.0 {
            return Err(format!("Invalid spacing: {}", self.spacing_px));
        }
        for (key, value) in [
            ("borderColor", &self.border_color),
            ("activeBorderColor", &self.active_border_color),
            ("background", &self.background),
            ("activeBackground", &self.active_background),
        ] {
            validate_color(key, value)?;
        }
        Ok(())
    }

    /// Converts spacing units to a CSS length.
    pub fn spacing(&self, units: f32) -> String {
        format!("{}px", units * self.spacing_px)
    }

    pub fn shadow(&self, elevation: u8) -> String {
        match elevation {
            0 => "none".to_string(),
            n => format!("0 {}px {}px rgba(0, 0, 0, 0.2)", n, u32::from(n) * 2),
        }
    }

    /// Inline style for a card container. Active cards swap in the accent
    /// border and background.
    pub fn container_css(&self, elevation: u8, active: bool) -> String {
        let (border, background) = if active {
            (&self.active_border_color, &self.active_background)
        } else {
            (&self.border_color, &self.background)
        };
        format!(
            "border: 1px solid {}; background: {}; border-radius: {}px; box-shadow: {}; padding: {}",
            border,
            background,
            self.radius_px,
            self.shadow(elevation),
            self.spacing(2.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let theme = CardTheme::from_json(r##"{"activeBorderColor":"#ff5722"}"##).unwrap();
        assert_eq!(theme.active_border_color, "#ff5722");
        assert_eq!(theme.border_color, CardTheme::default().border_color);
        assert_eq!(theme.spacing_px, 8.0);
    }

    #[test]
    fn rejects_negative_spacing() {
        let err = CardTheme::from_json(r#"{"spacingPx":-2}"#).unwrap_err();
        assert!(err.contains("Invalid spacing"));
        assert!(CardTheme::from_json("not json").is_err());
    }

    #[test]
    fn rejects_colors_that_break_out_of_the_style() {
        for json in [
            r#"{"borderColor":"red; display: none"}"#,
            r#"{"activeBackground":"url(x) } body { color: red"}"#,
            r#"{"background":"\"blue\""}"#,
            r#"{"activeBorderColor":"  "}"#,
        ] {
            assert!(CardTheme::from_json(json).is_err(), "{} should be rejected", json);
        }

        let theme = CardTheme { border_color: "red; display: none".to_string(), ..CardTheme::default() };
        assert_eq!(theme.validate().unwrap_err(), "Invalid borderColor: 'red; display: none'");
    }

    #[test]
    fn accepts_common_color_forms() {
        for color in ["#abc", "rebeccapurple", "rgb(25, 118, 210)", "hsla(210, 79%, 46%, 0.5)"] {
            let theme = CardTheme { active_border_color: color.to_string(), ..CardTheme::default() };
            assert!(theme.validate().is_ok(), "{} should be accepted", color);
        }
    }

    #[test]
    fn container_style_has_no_trailing_separator() {
        let css = CardTheme::default().container_css(0, false);
        assert!(css.ends_with("padding: 16px"));
        assert!(!css.contains(";;"));
    }

    #[test]
    fn spacing_scales_units() {
        let theme = CardTheme::default();
        assert_eq!(theme.spacing(1.0), "8px");
        assert_eq!(theme.spacing(0.5), "4px");
    }

    #[test]
    fn active_container_uses_accent_colors() {
        let theme = CardTheme::default();
        let active = theme.container_css(0, true);
        let inactive = theme.container_css(0, false);
        assert!(active.contains("border: 1px solid #1976d2"));
        assert!(active.contains("background: #e3f2fd"));
        assert!(inactive.contains("border: 1px solid #e0e0e0"));
        assert!(inactive.contains("background: #ffffff"));
        assert!(inactive.contains("box-shadow: none"));
    }

    #[test]
    fn raised_elevation_has_shadow() {
        assert_eq!(CardTheme::default().shadow(2), "0 2px 4px rgba(0, 0, 0, 0.2)");
    }
}
