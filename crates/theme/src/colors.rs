//! Base palette and foreground/background color pairs.

use std::fmt;
use std::str::FromStr;

use crate::ThemeError;

/// One of the 16 base console colors.
///
/// Declaration order matches the console palette index (0..=15) and is
/// the order used when enumerating preset themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// Every palette color, in declaration order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkRed,
        Color::DarkMagenta,
        Color::DarkYellow,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// Palette index (0..=15).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a color by palette index.
    pub fn from_index(index: u8) -> Option<Color> {
        Self::ALL.get(index as usize).copied()
    }

    /// Color name as used in config files and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::DarkBlue => "DarkBlue",
            Color::DarkGreen => "DarkGreen",
            Color::DarkCyan => "DarkCyan",
            Color::DarkRed => "DarkRed",
            Color::DarkMagenta => "DarkMagenta",
            Color::DarkYellow => "DarkYellow",
            Color::Gray => "Gray",
            Color::DarkGray => "DarkGray",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Cyan => "Cyan",
            Color::Red => "Red",
            Color::Magenta => "Magenta",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    /// Case-insensitive; `_` and `-` separators are ignored
    /// (`dark_blue`, `Dark-Blue` and `DarkBlue` are the same color).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        Color::ALL
            .iter()
            .copied()
            .find(|color| color.name().to_lowercase() == normalized)
            .ok_or_else(|| ThemeError::UnknownColor(s.to_string()))
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(color: Color) -> Self {
        use ratatui::style::Color as Rc;

        match color {
            Color::Black => Rc::Black,
            Color::DarkBlue => Rc::Blue,
            Color::DarkGreen => Rc::Green,
            Color::DarkCyan => Rc::Cyan,
            Color::DarkRed => Rc::Red,
            Color::DarkMagenta => Rc::Magenta,
            Color::DarkYellow => Rc::Yellow,
            Color::Gray => Rc::Gray,
            Color::DarkGray => Rc::DarkGray,
            Color::Blue => Rc::LightBlue,
            Color::Green => Rc::LightGreen,
            Color::Cyan => Rc::LightCyan,
            Color::Red => Rc::LightRed,
            Color::Magenta => Rc::LightMagenta,
            Color::Yellow => Rc::LightYellow,
            Color::White => Rc::White,
        }
    }
}

/// A foreground/background color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colors {
    pub foreground: Color,
    pub background: Color,
}

impl Colors {
    pub fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Palette used for a selected list item: foreground and background swapped.
    pub fn to_selected_item(self) -> Colors {
        Colors::new(self.background, self.foreground)
    }

    /// Same pair with a different foreground.
    pub fn with_foreground(self, foreground: Color) -> Colors {
        Colors::new(foreground, self.background)
    }
}

impl fmt::Display for Colors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.foreground, self.background)
    }
}

impl From<Colors> for ratatui::style::Style {
    fn from(colors: Colors) -> Self {
        ratatui::style::Style::default()
            .fg(colors.foreground.into())
            .bg(colors.background.into())
    }
}
