//! Theme model for winkit controls.
//!
//! A [`StyleTheme`] bundles the three appearances a control can show
//! (active, inactive, disabled). Each appearance is a [`Style`] made of
//! colors and line thickness for the control body and its title. Themes
//! are immutable values; derivation methods return modified copies.
//!
//! At render time a control resolves its style with [`get_active`] and
//! hands it to the drawing layer, e.g. through [`Style::body_style`].

mod colors;
mod error;
mod provider;
mod status;
pub mod style;
mod style_theme;
mod thickness;

pub use colors::{Color, Colors};
pub use error::ThemeError;
pub use provider::{reset_global_default, set_global_default, GlobalDefault, ThemeProvider};
pub use status::{get_active, ControlStatus};
pub use style::{Region, Style};
pub use style_theme::StyleTheme;
pub use thickness::LineThickness;
