use std::{str::FromStr, sync::RwLock};

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};

/// Which of the two built-in palettes is active. Persisted as a bare
/// `light`/`dark` string by the host application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
  #[default]
  Light,
  Dark,
}

impl ThemeMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      ThemeMode::Light => "light",
      ThemeMode::Dark => "dark",
    }
  }

  pub fn toggle(&self) -> ThemeMode {
    match self {
      ThemeMode::Light => ThemeMode::Dark,
      ThemeMode::Dark => ThemeMode::Light,
    }
  }
}

impl FromStr for ThemeMode {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "light" => Ok(ThemeMode::Light),
      "dark" => Ok(ThemeMode::Dark),
      _ => Err(()),
    }
  }
}

/// One Dark Pro inspired palette plus a light counterpart, modeled on
/// popular Rust TUI applications like Helix, gitui, and bottom.
struct Palette {
  bg_primary: Color,
  bg_secondary: Color,
  bg_tertiary: Color,
  bg_selection: Color,
  fg_primary: Color,
  fg_secondary: Color,
  fg_tertiary: Color,
  accent_blue: Color,
  accent_cyan: Color,
  accent_green: Color,
  accent_red: Color,
  border_normal: Color,
  border_focused: Color,
  warning: Color,
}

static DARK: Palette = Palette {
  bg_primary: Color::Rgb(40, 44, 52),
  bg_secondary: Color::Rgb(33, 37, 43),
  bg_tertiary: Color::Rgb(44, 49, 58),
  bg_selection: Color::Rgb(62, 68, 81),
  fg_primary: Color::Rgb(171, 178, 191),
  fg_secondary: Color::Rgb(92, 99, 112),
  fg_tertiary: Color::Rgb(139, 148, 158),
  accent_blue: Color::Rgb(97, 175, 239),
  accent_cyan: Color::Rgb(86, 182, 194),
  accent_green: Color::Rgb(152, 195, 121),
  accent_red: Color::Rgb(224, 108, 117),
  border_normal: Color::Rgb(92, 99, 112),
  border_focused: Color::Rgb(97, 175, 239),
  warning: Color::Rgb(229, 192, 123),
};

static LIGHT: Palette = Palette {
  bg_primary: Color::Rgb(250, 250, 250),
  bg_secondary: Color::Rgb(240, 240, 241),
  bg_tertiary: Color::Rgb(234, 234, 235),
  bg_selection: Color::Rgb(214, 218, 228),
  fg_primary: Color::Rgb(56, 58, 66),
  fg_secondary: Color::Rgb(160, 161, 167),
  fg_tertiary: Color::Rgb(118, 121, 129),
  accent_blue: Color::Rgb(64, 120, 242),
  accent_cyan: Color::Rgb(1, 132, 188),
  accent_green: Color::Rgb(80, 161, 79),
  accent_red: Color::Rgb(228, 86, 73),
  border_normal: Color::Rgb(160, 161, 167),
  border_focused: Color::Rgb(64, 120, 242),
  warning: Color::Rgb(193, 132, 1),
};

static ACTIVE: Lazy<RwLock<ThemeMode>> = Lazy::new(|| RwLock::new(ThemeMode::default()));

pub fn set_mode(mode: ThemeMode) {
  if let Ok(mut active) = ACTIVE.write() {
    *active = mode;
  }
}

pub fn mode() -> ThemeMode {
  ACTIVE.read().map(|m| *m).unwrap_or_default()
}

fn palette() -> &'static Palette {
  match mode() {
    ThemeMode::Light => &LIGHT,
    ThemeMode::Dark => &DARK,
  }
}

/// Main application background
pub fn bg_primary() -> Style {
  Style::default().bg(palette().bg_primary).fg(palette().fg_primary)
}

/// Secondary panel background
pub fn bg_secondary() -> Style {
  Style::default().bg(palette().bg_secondary).fg(palette().fg_primary)
}

/// Input field styling
pub fn input() -> Style {
  Style::default().bg(palette().bg_tertiary).fg(palette().fg_primary)
}

/// Active selection with accent color
pub fn selection_active() -> Style {
  Style::default().bg(palette().accent_blue).fg(palette().bg_primary).add_modifier(Modifier::BOLD)
}

/// Normal border styling
pub fn border_normal() -> Style {
  Style::default().fg(palette().border_normal)
}

/// Focused border styling
pub fn border_focused() -> Style {
  Style::default().fg(palette().border_focused)
}

/// Header styling for tables
pub fn header() -> Style {
  Style::default()
    .bg(palette().bg_selection)
    .fg(palette().accent_cyan)
    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Title styling
pub fn title() -> Style {
  Style::default().fg(palette().accent_blue).add_modifier(Modifier::BOLD)
}

/// Success message styling
pub fn success() -> Style {
  Style::default().fg(palette().accent_green).add_modifier(Modifier::BOLD)
}

/// Warning message styling
pub fn warning() -> Style {
  Style::default().fg(palette().warning).add_modifier(Modifier::BOLD)
}

/// Error message styling
pub fn error() -> Style {
  Style::default().fg(palette().accent_red).add_modifier(Modifier::BOLD)
}

/// Info message styling
pub fn info() -> Style {
  Style::default().fg(palette().accent_blue)
}

/// Muted text styling
pub fn muted() -> Style {
  Style::default().fg(palette().fg_secondary)
}

/// Line numbers styling
pub fn line_numbers() -> Style {
  Style::default().fg(palette().fg_tertiary)
}

/// Tab styling - normal
pub fn tab_normal() -> Style {
  Style::default().fg(palette().fg_secondary)
}

/// Tab styling - selected
pub fn tab_selected() -> Style {
  Style::default().fg(palette().accent_blue).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Status bar styling
pub fn status_bar() -> Style {
  Style::default().bg(palette().bg_secondary).fg(palette().fg_primary)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mode_round_trips_through_str() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
      assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
    }
  }

  #[test]
  fn double_toggle_is_identity() {
    assert_eq!(ThemeMode::Light.toggle().toggle(), ThemeMode::Light);
    assert_eq!(ThemeMode::Dark.toggle().toggle(), ThemeMode::Dark);
  }
}
