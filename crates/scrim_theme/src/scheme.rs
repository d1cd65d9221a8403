//! Color scheme inference
//!
//! Dialog chrome should contrast with the ambient text color: a host whose
//! primary text is dark is itself light, so the dialog uses the Light
//! scheme, and vice versa. Inference is pure, infallible, and runs exactly
//! once per dialog at construction.

use scrim_core::{ColorAttr, Context, StyleId};

use crate::tokens::ThemeTokens;

/// Style identifier for the light scheme
pub const STYLE_LIGHT: StyleId = StyleId(0x7f01_0001);
/// Style identifier for the dark scheme
pub const STYLE_DARK: StyleId = StyleId(0x7f01_0002);

/// The two dialog color schemes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Infer the scheme from the context's primary text color
    ///
    /// Dark text means a light ambient surface, so the dialog takes the
    /// Light scheme; light text means the opposite.
    pub fn infer(context: &Context) -> ColorScheme {
        let primary = context.color(ColorAttr::TextPrimary);
        let scheme = if primary.is_dark() {
            ColorScheme::Light
        } else {
            ColorScheme::Dark
        };
        tracing::debug!(?scheme, luminance = primary.luminance(), "inferred scheme");
        scheme
    }

    /// The style identifier for this scheme
    pub fn style_id(self) -> StyleId {
        match self {
            ColorScheme::Light => STYLE_LIGHT,
            ColorScheme::Dark => STYLE_DARK,
        }
    }

    /// The chrome tokens for this scheme
    pub fn tokens(self) -> ThemeTokens {
        match self {
            ColorScheme::Light => ThemeTokens::light(),
            ColorScheme::Dark => ThemeTokens::dark(),
        }
    }
}
