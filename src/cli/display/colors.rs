//! Color theme for CLI output

use colored::{Color, Colorize};

/// Color theme for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    pub key: Color,
    pub string: Color,
    pub number: Color,
    pub boolean: Color,
    pub null: Color,
    pub timestamp: Color,
    pub stream: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            key: Color::White,
            string: Color::Green,
            number: Color::Cyan,
            boolean: Color::Yellow,
            null: Color::Magenta,
            timestamp: Color::Red,
            stream: Color::White,
        }
    }
}

impl ColorTheme {
    /// Keys drawn in black so values stand out on light-on-dark terminals
    pub fn inverted() -> Self {
        Self {
            key: Color::Black,
            ..Self::default()
        }
    }
}

/// Apply `color` to `text`, or return it untouched when coloring is off
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.color(color).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.key, Color::White);
        assert_eq!(theme.string, Color::Green);
        assert_eq!(theme.timestamp, Color::Red);
    }

    #[test]
    fn test_inverted_theme_only_changes_keys() {
        let theme = ColorTheme::inverted();
        assert_eq!(theme.key, Color::Black);
        assert_eq!(theme.string, ColorTheme::default().string);
    }

    #[test]
    fn test_paint_disabled() {
        assert_eq!(paint("plain", Color::Red, false), "plain");
    }
}
