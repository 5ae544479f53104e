use ratatui::style::Color;

use crate::model::config::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub cyan: Color,
    pub selection_bg: Color,
    pub match_bg: Color,
    pub match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0xA8, 0xB5, 0xC8),
            text_bright: Color::Rgb(0xF2, 0xF4, 0xF8),
            highlight: Color::Rgb(0x4E, 0x9A, 0xF5),
            dim: Color::Rgb(0x5C, 0x66, 0x78),
            red: Color::Rgb(0xE8, 0x5A, 0x5A),
            green: Color::Rgb(0x5A, 0xD8, 0x8C),
            yellow: Color::Rgb(0xE8, 0xC5, 0x5A),
            cyan: Color::Rgb(0x5A, 0xC8, 0xD8),
            selection_bg: Color::Rgb(0x22, 0x30, 0x45),
            match_bg: Color::Rgb(0xE8, 0xC5, 0x5A),
            match_fg: Color::Rgb(0x10, 0x14, 0x1C),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "green" => theme.green = color,
                    "yellow" => theme.yellow = color,
                    "cyan" => theme.cyan = color,
                    "selection_bg" => theme.selection_bg = color,
                    "match_bg" => theme.match_bg = color,
                    "match_fg" => theme.match_fg = color,
                    _ => {}
                }
            }
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn config_overrides_named_colors() {
        let mut colors = HashMap::new();
        colors.insert("highlight".to_string(), "#FF0000".to_string());
        colors.insert("bogus_key".to_string(), "#00FF00".to_string());
        colors.insert("dim".to_string(), "not-a-color".to_string());
        let ui = UiConfig {
            show_key_hints: true,
            colors,
        };

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.highlight, Color::Rgb(0xFF, 0x00, 0x00));
        // invalid values and unknown keys fall back to defaults
        assert_eq!(theme.dim, Theme::default().dim);
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn hex_parsing_requires_full_rgb() {
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("123456"), None);
        assert_eq!(parse_hex_color("#12345G"), None);
        assert_eq!(parse_hex_color("#A1B2C3"), Some(Color::Rgb(0xA1, 0xB2, 0xC3)));
    }
}
