//! Dialog chrome tokens
//!
//! The handful of colors a dialog paints with, in light and dark variants.

use scrim_core::Color;

/// Color tokens for dialog chrome
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeTokens {
    /// Dialog panel background
    pub surface: Color,
    /// Backdrop behind the panel
    pub scrim: Color,
    /// Title and body text
    pub text_primary: Color,
    /// Secondary/body text
    pub text_secondary: Color,
    /// Action button labels
    pub accent: Color,
    /// Panel border / hairlines
    pub border: Color,
}

impl ThemeTokens {
    /// Light variant
    pub fn light() -> Self {
        Self {
            surface: Color::WHITE,
            scrim: Color::BLACK.with_alpha(0.32),
            text_primary: Color::from_hex(0x212121),
            text_secondary: Color::from_hex(0x616161),
            accent: Color::from_hex(0x1A73E8),
            border: Color::rgba(0.0, 0.0, 0.0, 0.12),
        }
    }

    /// Dark variant
    pub fn dark() -> Self {
        Self {
            surface: Color::from_hex(0x2D2D2D),
            scrim: Color::BLACK.with_alpha(0.5),
            text_primary: Color::WHITE,
            text_secondary: Color::from_hex(0xB3B3B3),
            accent: Color::from_hex(0x8AB4F8),
            border: Color::rgba(1.0, 1.0, 1.0, 0.12),
        }
    }
}
