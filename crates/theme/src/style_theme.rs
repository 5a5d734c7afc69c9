//! Immutable triple of styles keyed by interaction state.

use std::fmt;
use std::str::FromStr;

use crate::{provider, Color, Colors, ControlStatus, LineThickness, Style, ThemeError};

/// The three appearances a control can display.
///
/// A theme is never modified in place: every `with_*` method returns a
/// new theme built from the receiver's slots. All three slots are always
/// populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleTheme {
    active: Style,
    inactive: Style,
    disabled: Style,
}

impl StyleTheme {
    /// Build a theme from explicit slots. `disabled` falls back to `inactive`.
    pub fn new(active: Style, inactive: Style, disabled: Option<Style>) -> Self {
        Self {
            active,
            inactive,
            disabled: disabled.unwrap_or(inactive),
        }
    }

    /// Decode a 13-character style code and use it for every slot.
    pub fn from_code(code: &str) -> Result<Self, ThemeError> {
        Style::from_code(code).map(Self::from)
    }

    /// Single-line theme with the same colors in every state.
    pub fn from_colors(foreground: Color, background: Color) -> Self {
        Self::from(Style::new(foreground, background))
    }

    pub fn from_colors_with_thickness(
        foreground: Color,
        background: Color,
        thickness: LineThickness,
    ) -> Self {
        Self::from(Style::with_line(foreground, background, thickness))
    }

    /// One preset theme per palette color, in palette order.
    ///
    /// Built fresh on every call.
    pub fn get_style_themes() -> Vec<StyleTheme> {
        Style::get_styles().into_iter().map(Style::to_theme).collect()
    }

    /// Current process-wide default theme.
    ///
    /// Evaluates the installed factory on every call, see
    /// [`set_global_default`](crate::set_global_default).
    pub fn global_default() -> StyleTheme {
        provider::current()
    }

    pub fn active(&self) -> &Style {
        &self.active
    }

    pub fn inactive(&self) -> &Style {
        &self.inactive
    }

    pub fn disabled(&self) -> &Style {
        &self.disabled
    }

    /// Style to draw for a control in the given state.
    ///
    /// `Undefined` resolves to the active style.
    pub fn get_active(&self, status: ControlStatus) -> &Style {
        match status {
            ControlStatus::Active => &self.active,
            ControlStatus::Inactive => &self.inactive,
            ControlStatus::Disabled => &self.disabled,
            ControlStatus::Undefined => &self.active,
        }
    }

    /// Title colors for active and inactive; disabled gets the
    /// selected-item palette of `colors`.
    pub fn with_title(&self, colors: Colors) -> Self {
        self.with_titles(colors, colors, colors.to_selected_item())
    }

    pub fn with_title_fg_bg(&self, foreground: Color, background: Color) -> Self {
        self.with_title(Colors::new(foreground, background))
    }

    pub fn with_titles(&self, active: Colors, inactive: Colors, disabled: Colors) -> Self {
        Self::new(
            self.active.with_title(active),
            self.inactive.with_title(inactive),
            Some(self.disabled.with_title(disabled)),
        )
    }

    pub fn with_active(&self, active: Style) -> Self {
        Self::new(active, self.inactive, Some(self.disabled))
    }

    pub fn with_inactive(&self, inactive: Style) -> Self {
        Self::new(self.active, inactive, Some(self.disabled))
    }

    pub fn with_disabled(&self, disabled: Style) -> Self {
        Self::new(self.active, self.inactive, Some(disabled))
    }

    pub fn with_thickness(&self, thickness: LineThickness) -> Self {
        self.map(|style| style.with_thickness(thickness))
    }

    pub fn with_foreground(&self, color: Color) -> Self {
        self.map(|style| style.with_foreground(color))
    }

    pub fn with_color(&self, colors: Colors) -> Self {
        self.map(|style| style.with_colors(colors))
    }

    fn map(&self, f: impl Fn(Style) -> Style) -> Self {
        Self::new(f(self.active), f(self.inactive), Some(f(self.disabled)))
    }
}

/// Process-wide default, equivalent to [`StyleTheme::global_default`].
impl Default for StyleTheme {
    fn default() -> Self {
        Self::global_default()
    }
}

impl From<Style> for StyleTheme {
    fn from(style: Style) -> Self {
        Self::new(style, style, Some(style))
    }
}

impl FromStr for StyleTheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for StyleTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} [{}]",
            self.active.body.foreground(),
            self.active.body.background(),
            self.active
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> StyleTheme {
        StyleTheme::new(
            Style::new(Color::White, Color::Blue),
            Style::new(Color::Gray, Color::Blue),
            Some(Style::with_line(
                Color::DarkGray,
                Color::Black,
                LineThickness::None,
            )),
        )
    }

    #[test]
    fn test_disabled_defaults_to_inactive() {
        let active = Style::new(Color::White, Color::Blue);
        let inactive = Style::new(Color::Gray, Color::Blue);
        let theme = StyleTheme::new(active, inactive, None);
        assert_eq!(theme.active(), &active);
        assert_eq!(theme.inactive(), &inactive);
        assert_eq!(theme.disabled(), &inactive);
    }

    #[test]
    fn test_from_colors_fills_every_slot() {
        let theme = StyleTheme::from_colors(Color::Yellow, Color::DarkBlue);
        assert_eq!(theme.active(), theme.inactive());
        assert_eq!(theme.active(), theme.disabled());
        assert_eq!(theme.active().body.thickness, LineThickness::Single);

        let thick =
            StyleTheme::from_colors_with_thickness(Color::Yellow, Color::DarkBlue, LineThickness::Double);
        assert_eq!(thick.disabled().title.thickness, LineThickness::Double);
        assert_eq!(thick.inactive().body.colors, theme.inactive().body.colors);
    }

    #[test]
    fn test_from_code_errors() {
        assert_eq!(StyleTheme::from_code(""), Err(ThemeError::InvalidArgument));
        assert_eq!(StyleTheme::from_code("  "), Err(ThemeError::InvalidArgument));
        assert_eq!(
            StyleTheme::from_code("style:F0S/F0"),
            Err(ThemeError::OutOfRange { len: 12 })
        );
        assert!(matches!(
            "style:F0S/F0Q".parse::<StyleTheme>(),
            Err(ThemeError::InvalidCode { position: 12, .. })
        ));
    }

    #[test]
    fn test_status_resolution() {
        let theme = sample();
        assert_eq!(theme.get_active(ControlStatus::Active), theme.active());
        assert_eq!(theme.get_active(ControlStatus::Inactive), theme.inactive());
        assert_eq!(theme.get_active(ControlStatus::Disabled), theme.disabled());
        assert_eq!(theme.get_active(ControlStatus::Undefined), theme.active());
    }

    #[test]
    fn test_single_slot_replacement() {
        let theme = sample();
        let replacement = Style::new(Color::Red, Color::Black);

        let a = theme.with_active(replacement);
        assert_eq!(a.active(), &replacement);
        assert_eq!(a.inactive(), theme.inactive());
        assert_eq!(a.disabled(), theme.disabled());

        let i = theme.with_inactive(replacement);
        assert_eq!(i.active(), theme.active());
        assert_eq!(i.inactive(), &replacement);
        assert_eq!(i.disabled(), theme.disabled());

        let d = theme.with_disabled(replacement);
        assert_eq!(d.active(), theme.active());
        assert_eq!(d.inactive(), theme.inactive());
        assert_eq!(d.disabled(), &replacement);
    }

    #[test]
    fn test_with_title_derives_disabled_palette() {
        let theme = sample();
        let colors = Colors::new(Color::Yellow, Color::DarkRed);
        let titled = theme.with_title(colors);

        assert_eq!(titled.active().title.colors, colors);
        assert_eq!(titled.inactive().title.colors, colors);
        assert_eq!(titled.disabled().title.colors, colors.to_selected_item());
        assert_ne!(titled.disabled().title.colors, colors);

        assert_eq!(
            theme.with_title_fg_bg(Color::Yellow, Color::DarkRed),
            titled
        );
    }

    #[test]
    fn test_with_titles_is_verbatim() {
        let a = Colors::new(Color::White, Color::Blue);
        let i = Colors::new(Color::Gray, Color::Blue);
        let d = Colors::new(Color::DarkGray, Color::Black);
        let theme = sample().with_titles(a, i, d);
        assert_eq!(theme.active().title.colors, a);
        assert_eq!(theme.inactive().title.colors, i);
        assert_eq!(theme.disabled().title.colors, d);
    }

    #[test]
    fn test_derivation_leaves_receiver_untouched() {
        let theme = sample();
        let copy = theme;
        let _ = theme
            .with_color(Colors::new(Color::Red, Color::Red))
            .with_thickness(LineThickness::Double);
        assert_eq!(theme, copy);
    }

    #[test]
    fn test_display() {
        let theme = StyleTheme::from_colors(Color::White, Color::Black);
        assert_eq!(
            theme.to_string(),
            format!("White on Black [{}]", theme.active())
        );
        assert!(theme.to_string().starts_with("White on Black ["));
    }

    #[test]
    fn test_presets() {
        let themes = StyleTheme::get_style_themes();
        assert_eq!(themes.len(), Color::ALL.len());
        assert_eq!(themes, StyleTheme::get_style_themes());
        for (theme, color) in themes.iter().zip(Color::ALL) {
            assert_eq!(theme.active().body.foreground(), color);
            assert_eq!(theme.active(), theme.disabled());
        }
    }

    fn any_color() -> impl Strategy<Value = Color> {
        (0u8..16).prop_map(|i| Color::from_index(i).unwrap())
    }

    fn any_thickness() -> impl Strategy<Value = LineThickness> {
        prop::sample::select(LineThickness::ALL.to_vec())
    }

    fn any_style() -> impl Strategy<Value = Style> {
        (any_color(), any_color(), any_thickness(), any_color(), any_color(), any_thickness())
            .prop_map(|(bf, bb, bt, tf, tb, tt)| Style {
                body: crate::Region::new(Colors::new(bf, bb), bt),
                title: crate::Region::new(Colors::new(tf, tb), tt),
            })
    }

    fn any_theme() -> impl Strategy<Value = StyleTheme> {
        (any_style(), any_style(), any_style())
            .prop_map(|(a, i, d)| StyleTheme::new(a, i, Some(d)))
    }

    proptest! {
        #[test]
        fn code_fills_all_slots_equally(style in any_style()) {
            let theme = StyleTheme::from_code(&style.code()).unwrap();
            prop_assert_eq!(theme.active(), theme.inactive());
            prop_assert_eq!(theme.active(), theme.disabled());
            prop_assert_eq!(theme.active(), &style);
        }

        #[test]
        fn wrong_length_codes_are_rejected(code in "[a-zA-Z0-9:/]{1,30}") {
            prop_assume!(code.chars().count() != 13);
            prop_assert_eq!(
                StyleTheme::from_code(&code),
                Err(ThemeError::OutOfRange { len: code.chars().count() })
            );
        }

        #[test]
        fn with_foreground_applies_everywhere(theme in any_theme(), color in any_color()) {
            let derived = theme.with_foreground(color);
            for status in [ControlStatus::Active, ControlStatus::Inactive, ControlStatus::Disabled] {
                prop_assert_eq!(derived.get_active(status).body.foreground(), color);
                prop_assert_eq!(
                    derived.get_active(status).body.background(),
                    theme.get_active(status).body.background()
                );
            }
        }

        #[test]
        fn with_thickness_keeps_colors(theme in any_theme(), thickness in any_thickness()) {
            let derived = theme.with_thickness(thickness);
            for status in [ControlStatus::Active, ControlStatus::Inactive, ControlStatus::Disabled] {
                let before = theme.get_active(status);
                let after = derived.get_active(status);
                prop_assert_eq!(after.body.thickness, thickness);
                prop_assert_eq!(after.title.thickness, thickness);
                prop_assert_eq!(after.body.colors, before.body.colors);
                prop_assert_eq!(after.title.colors, before.title.colors);
            }
        }

        #[test]
        fn with_color_is_idempotent(theme in any_theme(), fg in any_color(), bg in any_color()) {
            let colors = Colors::new(fg, bg);
            let once = theme.with_color(colors);
            prop_assert_eq!(once.with_color(colors), once);
        }

        #[test]
        fn undefined_resolves_to_active(theme in any_theme()) {
            prop_assert_eq!(theme.get_active(ControlStatus::Active), theme.active());
            prop_assert_eq!(theme.get_active(ControlStatus::Undefined), theme.active());
        }
    }
}
