//! A single resolved appearance: body and title regions.

use std::fmt;
use std::str::FromStr;

use ratatui::widgets::BorderType;

use crate::{Color, Colors, LineThickness, StyleTheme, ThemeError};

/// Length of an encoded style code, in characters.
pub const CODE_LEN: usize = 13;

/// Fixed prefix of every style code.
const CODE_TAG: &str = "style:";

/// Colors and line weight of one region of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub colors: Colors,
    pub thickness: LineThickness,
}

impl Region {
    pub fn new(colors: Colors, thickness: LineThickness) -> Self {
        Self { colors, thickness }
    }

    pub fn foreground(&self) -> Color {
        self.colors.foreground
    }

    pub fn background(&self) -> Color {
        self.colors.background
    }
}

/// Visual appearance of a control in one interaction state.
///
/// The body covers the control's content area, the title its caption
/// and frame header. `Style` is a plain value: every `with_*` method
/// returns a modified copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub body: Region,
    pub title: Region,
}

impl Style {
    /// Single-line style with the same colors for body and title.
    pub fn new(foreground: Color, background: Color) -> Self {
        Self::with_line(foreground, background, LineThickness::Single)
    }

    /// Same as [`Style::new`] with an explicit line thickness.
    pub fn with_line(foreground: Color, background: Color, thickness: LineThickness) -> Self {
        let region = Region::new(Colors::new(foreground, background), thickness);
        Self {
            body: region,
            title: region,
        }
    }

    /// Preset style derived from a single palette color.
    ///
    /// The body draws `color` on black (on white for black itself), the
    /// title uses the selected-item palette of the body.
    pub fn from_color(color: Color) -> Self {
        let background = if color == Color::Black {
            Color::White
        } else {
            Color::Black
        };
        let body = Colors::new(color, background);
        Self {
            body: Region::new(body, LineThickness::Single),
            title: Region::new(body.to_selected_item(), LineThickness::Single),
        }
    }

    /// Decode a style from its 13-character code.
    ///
    /// Layout: `style:FBT/FBT`, body then title, where `F`/`B` are
    /// palette indices in hex and `T` is a thickness letter (`N`, `S`, `D`).
    pub fn from_code(code: &str) -> Result<Self, ThemeError> {
        if code.trim().is_empty() {
            return Err(ThemeError::InvalidArgument);
        }

        let chars: Vec<char> = code.chars().collect();
        if chars.len() != CODE_LEN {
            return Err(ThemeError::OutOfRange { len: chars.len() });
        }

        let invalid = |position: usize| ThemeError::InvalidCode {
            code: code.to_string(),
            position,
        };

        if let Some(position) = CODE_TAG
            .chars()
            .zip(chars.iter())
            .position(|(expected, actual)| !expected.eq_ignore_ascii_case(actual))
        {
            return Err(invalid(position));
        }

        let tag_len = CODE_TAG.len();
        if chars[tag_len + 3] != '/' {
            return Err(invalid(tag_len + 3));
        }

        let region_at = |start: usize| -> Result<Region, ThemeError> {
            let color_at = |pos: usize| {
                chars[pos]
                    .to_digit(16)
                    .and_then(|digit| Color::from_index(digit as u8))
                    .ok_or_else(|| invalid(pos))
            };
            let foreground = color_at(start)?;
            let background = color_at(start + 1)?;
            let thickness =
                LineThickness::from_code(chars[start + 2]).ok_or_else(|| invalid(start + 2))?;
            Ok(Region::new(Colors::new(foreground, background), thickness))
        };

        Ok(Self {
            body: region_at(tag_len)?,
            title: region_at(tag_len + 4)?,
        })
    }

    /// Canonical code of this style; [`Style::from_code`] decodes it back.
    pub fn code(&self) -> String {
        let region = |r: &Region| {
            format!(
                "{:X}{:X}{}",
                r.colors.foreground.index(),
                r.colors.background.index(),
                r.thickness.code()
            )
        };
        format!("{}{}/{}", CODE_TAG, region(&self.body), region(&self.title))
    }

    /// One preset style per palette color, in palette order.
    pub fn get_styles() -> Vec<Style> {
        Color::ALL.iter().copied().map(Style::from_color).collect()
    }

    /// Theme using this style for every interaction state.
    pub fn to_theme(self) -> StyleTheme {
        StyleTheme::from(self)
    }

    pub fn with_title(self, colors: Colors) -> Self {
        Self {
            title: Region { colors, ..self.title },
            ..self
        }
    }

    /// Replaces the body colors; the title keeps its own palette.
    pub fn with_colors(self, colors: Colors) -> Self {
        Self {
            body: Region { colors, ..self.body },
            ..self
        }
    }

    pub fn with_foreground(self, foreground: Color) -> Self {
        self.with_colors(self.body.colors.with_foreground(foreground))
    }

    /// Applies the thickness to both body and title lines.
    pub fn with_thickness(self, thickness: LineThickness) -> Self {
        Self {
            body: Region { thickness, ..self.body },
            title: Region {
                thickness,
                ..self.title
            },
        }
    }

    pub fn body_style(&self) -> ratatui::style::Style {
        self.body.colors.into()
    }

    pub fn title_style(&self) -> ratatui::style::Style {
        self.title.colors.into()
    }

    /// Border type for the control frame, `None` when the body has no lines.
    pub fn border_type(&self) -> Option<BorderType> {
        self.body.thickness.border_type()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, title {}, {}",
            self.body.colors, self.title.colors, self.body.thickness
        )?;
        if self.title.thickness != self.body.thickness {
            write!(f, "/{}", self.title.thickness)?;
        }
        Ok(())
    }
}

impl FromStr for Style {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::from_code(s)
    }
}
