use std::collections::HashMap;
use std::str::FromStr;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    /// Colors for task color tags
    pub tag_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut tag_colors = HashMap::new();
        tag_colors.insert("lightblue".into(), Color::Rgb(0x44, 0x88, 0xFF));
        tag_colors.insert("orange".into(), Color::Rgb(0xFF, 0xA5, 0x00));
        tag_colors.insert("lightgreen".into(), Color::Rgb(0x44, 0xFF, 0x88));
        tag_colors.insert("darkred".into(), Color::Rgb(0x8B, 0x00, 0x00));
        tag_colors.insert("gray".into(), Color::Rgb(0x80, 0x80, 0x80));
        tag_colors.insert("grey".into(), Color::Rgb(0x80, 0x80, 0x80));
        tag_colors.insert("darkmagenta".into(), Color::Rgb(0x8B, 0x00, 0x8B));

        Theme {
            background: Color::Reset,
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x80, 0x80, 0x80),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            tag_colors,
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
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    _ => tracing::warn!(key = %key, "unknown theme color"),
                }
            }
        }

        // Apply tag color overrides from [ui.tag_colors]
        for (tag, value) in &ui.tag_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.tag_colors.insert(tag.clone(), color);
            }
        }

        theme
    }

    /// Resolve a task color tag: named tag, then "#RRGGBB", then a terminal
    /// color name, then the plain text color.
    pub fn task_color(&self, tag: &str) -> Color {
        if let Some(color) = self.tag_colors.get(tag) {
            return *color;
        }
        parse_hex_color(tag)
            .or_else(|| Color::from_str(tag).ok())
            .unwrap_or(self.text)
    }
}
