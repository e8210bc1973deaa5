//! Theme system for consistent UI styling.

use nimbus_types::backend::Color;

/// Complete visual theme for the site shell.
pub struct Theme {
    /// Main page background color.
    pub background: Color,
    /// Header bar background color.
    pub surface: Color,
    /// Full-screen overlay background color.
    pub overlay: Color,

    /// Primary text color.
    pub text_primary: Color,
    /// Secondary/muted text color.
    pub text_secondary: Color,
    /// Text on accent-colored backgrounds.
    pub text_on_accent: Color,

    /// Primary accent color.
    pub accent: Color,
    /// Accent color on hover.
    pub accent_hover: Color,
    /// Accent color when pressed.
    pub accent_pressed: Color,
    /// Secondary decorative gradient stop.
    pub accent_alt: Color,

    /// Default border color.
    pub border: Color,
    /// Subtle/faint border color.
    pub border_subtle: Color,

    /// Button background color.
    pub button_bg: Color,
    /// Button background on hover.
    pub button_bg_hover: Color,
    /// Button background when pressed.
    pub button_bg_pressed: Color,

    /// Small font size.
    pub font_size_sm: u16,
    /// Medium/default font size.
    pub font_size_md: u16,
    /// Large font size.
    pub font_size_lg: u16,
    /// Extra-large font size (mobile overlay links).
    pub font_size_xl: u16,

    /// Small spacing.
    pub spacing_sm: u16,
    /// Medium spacing.
    pub spacing_md: u16,
    /// Large spacing.
    pub spacing_lg: u16,

    /// Small border radius.
    pub border_radius_sm: u16,
    /// Medium border radius.
    pub border_radius_md: u16,
}

impl Theme {
    /// Dark theme matching the site's night aesthetic.
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(14, 12, 21),
            surface: Color::rgb(21, 18, 32),
            overlay: Color::rgb(14, 12, 21),

            text_primary: Color::rgb(230, 230, 235),
            text_secondary: Color::rgb(135, 135, 143),
            text_on_accent: Color::rgb(14, 12, 21),

            accent: Color::rgb(172, 106, 255),
            accent_hover: Color::rgb(190, 136, 255),
            accent_pressed: Color::rgb(148, 82, 228),
            accent_alt: Color::rgb(255, 200, 118),

            border: Color::rgb(62, 58, 77),
            border_subtle: Color::rgb(37, 34, 52),

            button_bg: Color::rgb(37, 34, 52),
            button_bg_hover: Color::rgb(49, 45, 67),
            button_bg_pressed: Color::rgb(28, 26, 40),

            font_size_sm: 8,
            font_size_md: 16,
            font_size_lg: 24,
            font_size_xl: 32,

            spacing_sm: 4,
            spacing_md: 8,
            spacing_lg: 16,

            border_radius_sm: 4,
            border_radius_md: 8,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
