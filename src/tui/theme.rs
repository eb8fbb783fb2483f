use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;

/// Accent used for selection highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    /// Date picker accent (violet by default)
    #[default]
    Primary,
    /// Month picker and year grid accent (slate by default)
    Secondary,
}

/// Resolved colors for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub today: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            primary: config.primary,
            secondary: config.secondary,
            muted: config.muted,
            today: config.today_fg(),
        }
    }

    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Primary => self.primary,
            Accent::Secondary => self.secondary,
        }
    }

    pub fn selected_style(&self, accent: Accent) -> Style {
        Style::new()
            .bg(self.accent(accent))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary emphasis: today's day cell
    pub fn today_style(&self) -> Style {
        Style::new().fg(self.today).add_modifier(Modifier::BOLD)
    }

    /// Secondary emphasis: the real-world current year
    pub fn current_year_style(&self) -> Style {
        Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn disabled_style(&self) -> Style {
        Style::new().fg(self.muted).add_modifier(Modifier::DIM)
    }

    pub fn normal_style(&self) -> Style {
        Style::new()
    }

    pub fn header_style(&self) -> Style {
        Style::new().add_modifier(Modifier::BOLD)
    }

    pub fn nav_style(&self, accent: Accent) -> Style {
        Style::new().fg(self.accent(accent))
    }

    pub fn weekday_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn border_style(&self, focused: bool, accent: Accent) -> Style {
        if focused {
            Style::new().fg(self.accent(accent))
        } else {
            Style::new().fg(self.muted)
        }
    }

    pub fn backdrop_style(&self) -> Style {
        Style::new().fg(self.muted).add_modifier(Modifier::DIM)
    }

    pub fn hint_style(&self) -> Style {
        Style::new().fg(self.muted).add_modifier(Modifier::DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_lookup() {
        let theme = Theme::default();
        assert_eq!(theme.accent(Accent::Primary), Color::Rgb(124, 58, 237));
        assert_eq!(theme.accent(Accent::Secondary), Color::Rgb(148, 163, 184));
    }

    #[test]
    fn test_selected_style_uses_accent_background() {
        let theme = Theme::default();
        let style = theme.selected_style(Accent::Secondary);
        assert_eq!(style.bg, Some(theme.secondary));
        assert_eq!(style.fg, Some(Color::White));
    }
}
