//! Interaction state of a control and style resolution for it.

use std::str::FromStr;

use crate::{Style, StyleTheme};

/// Interaction state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlStatus {
    Active,
    Inactive,
    Disabled,
    #[default]
    Undefined,
}

impl ControlStatus {
    /// Status from its numeric tag. Unknown tags map to `Undefined`.
    pub fn from_index(index: u8) -> ControlStatus {
        match index {
            0 => ControlStatus::Active,
            1 => ControlStatus::Inactive,
            2 => ControlStatus::Disabled,
            _ => ControlStatus::Undefined,
        }
    }

    /// Status of a control from its enabled and focused flags.
    pub fn from_flags(enabled: bool, focused: bool) -> ControlStatus {
        match (enabled, focused) {
            (false, _) => ControlStatus::Disabled,
            (true, true) => ControlStatus::Active,
            (true, false) => ControlStatus::Inactive,
        }
    }
}

impl FromStr for ControlStatus {
    type Err = std::convert::Infallible;

    /// Never fails: unrecognised names parse as `Undefined`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "active" => ControlStatus::Active,
            "inactive" => ControlStatus::Inactive,
            "disabled" => ControlStatus::Disabled,
            _ => ControlStatus::Undefined,
        })
    }
}

/// Style to render for `theme` in the given `status`.
///
/// Total over every status; anything not inactive or disabled draws the
/// active style.
pub fn get_active(theme: &StyleTheme, status: ControlStatus) -> &Style {
    theme.get_active(status)
}
