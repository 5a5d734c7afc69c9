//! Border and line weights.

use std::fmt;
use std::str::FromStr;

use ratatui::widgets::BorderType;

use crate::ThemeError;

/// Weight of the lines drawn around a control or its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineThickness {
    None,
    #[default]
    Single,
    Double,
}

impl LineThickness {
    pub const ALL: [LineThickness; 3] = [
        LineThickness::None,
        LineThickness::Single,
        LineThickness::Double,
    ];

    /// Single-letter code used in style codes.
    pub fn code(self) -> char {
        match self {
            LineThickness::None => 'N',
            LineThickness::Single => 'S',
            LineThickness::Double => 'D',
        }
    }

    /// Inverse of [`LineThickness::code`], case-insensitive.
    pub fn from_code(code: char) -> Option<LineThickness> {
        match code.to_ascii_uppercase() {
            'N' => Some(LineThickness::None),
            'S' => Some(LineThickness::Single),
            'D' => Some(LineThickness::Double),
            _ => None,
        }
    }

    /// Ratatui border type, or `None` when no border is drawn.
    pub fn border_type(self) -> Option<BorderType> {
        match self {
            LineThickness::None => None,
            LineThickness::Single => Some(BorderType::Plain),
            LineThickness::Double => Some(BorderType::Double),
        }
    }

    fn name(self) -> &'static str {
        match self {
            LineThickness::None => "None",
            LineThickness::Single => "Single",
            LineThickness::Double => "Double",
        }
    }
}

impl fmt::Display for LineThickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineThickness {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(LineThickness::None),
            "single" => Ok(LineThickness::Single),
            "double" => Ok(LineThickness::Double),
            _ => Err(ThemeError::UnknownThickness(s.to_string())),
        }
    }
}
