use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::Color;

use crate::layout_constants::DEFAULT_COMPACT_BREAKPOINT;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Terminal width below which pickers open as a centered modal
    pub compact_breakpoint: u16,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent for the date picker (selected day, month highlight)
    #[serde(deserialize_with = "deserialize_color")]
    pub primary: Color,
    /// Accent for the month picker and the year grid
    #[serde(deserialize_with = "deserialize_color")]
    pub secondary: Color,
    /// Disabled days, placeholders and borders
    #[serde(deserialize_with = "deserialize_color")]
    pub muted: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub today_fg: Option<Color>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            primary: Color::Rgb(124, 58, 237),   // Violet
            secondary: Color::Rgb(148, 163, 184), // Slate
            muted: Color::DarkGray,
            today_fg: None,
        }
    }
}

impl ThemeConfig {
    /// Color for today's cell, a lighter primary unless explicitly set
    pub fn today_fg(&self) -> Color {
        self.today_fg.unwrap_or_else(|| lighten_color(self.primary, 0.5))
    }
}

/// Blend a color toward white (0.0 = original, 1.0 = white)
fn lighten_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let blend = |c: u8| (c as f32 + (255.0 - c as f32) * factor) as u8;
            Color::Rgb(blend(r), blend(g), blend(b))
        }
        // Named colors are left as-is
        other => other,
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Deserialize an optional color from a string
fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "violet", "slate", "gray", etc.
/// - Hex colors: "#7c3aed", "#f60"
/// - RGB tuples: "124,58,237"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "white" => return Some(Color::White),
        "violet" => return Some(Color::Rgb(124, 58, 237)),
        "slate" => return Some(Color::Rgb(148, 163, 184)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("violet"), Some(Color::Rgb(124, 58, 237)));
        assert_eq!(parse_color("slate"), Some(Color::Rgb(148, 163, 184)));
        assert_eq!(parse_color("darkgrey"), Some(Color::DarkGray));
    }

    #[test]
    fn test_parse_color_case_insensitive() {
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color("Violet"), Some(Color::Rgb(124, 58, 237)));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#7c3aed"), Some(Color::Rgb(124, 58, 237)));
        assert_eq!(parse_color("#F60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("256,0,0"), None);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.compact_breakpoint, DEFAULT_COMPACT_BREAKPOINT);
        assert_eq!(config.theme.primary, Color::Rgb(124, 58, 237));
        assert_eq!(config.log_file, "/dev/null");
    }

    #[test]
    fn test_today_fg_defaults_to_lighter_primary() {
        let theme = ThemeConfig {
            primary: Color::Rgb(0, 0, 0),
            ..Default::default()
        };
        assert_eq!(theme.today_fg(), Color::Rgb(127, 127, 127));

        let theme = ThemeConfig {
            today_fg: Some(Color::Cyan),
            ..Default::default()
        };
        assert_eq!(theme.today_fg(), Color::Cyan);
    }

    #[test]
    fn test_config_from_toml_partial() {
        let toml_str = r#"
compact_breakpoint = 100

[theme]
primary = "cyan"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.compact_breakpoint, 100);
        assert_eq!(config.theme.primary, Color::Cyan);
        assert_eq!(config.theme.secondary, Color::Rgb(148, 163, 184));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_from_toml_invalid_color_fails() {
        let toml_str = r#"
[theme]
primary = "not-a-color"
        "#;

        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
