//! Scrim Theme
//!
//! Light/dark scheme inference from the ambient context plus the chrome
//! tokens each scheme paints with.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use scrim_core::{Color, ColorAttr, Context, ResourceTable};
//! use scrim_theme::ColorScheme;
//!
//! // A host with light text is itself dark, so the dialog goes Dark
//! let ctx = Context::new(Rc::new(ResourceTable::new()))
//!     .with_color(ColorAttr::TextPrimary, Color::WHITE);
//! assert_eq!(ColorScheme::infer(&ctx), ColorScheme::Dark);
//! ```

pub mod scheme;
pub mod tokens;

pub use scheme::{ColorScheme, STYLE_DARK, STYLE_LIGHT};
pub use tokens::ThemeTokens;
