//! Scrim Core
//!
//! Foundation types shared by the scrim dialog stack:
//!
//! - **Color**: linear RGBA with perceptual darkness classification
//! - **Resources**: the accessor boundary for host strings and drawables
//! - **Context**: ambient attribute colors plus a shared resource accessor
//! - **Errors**: the single programmer-error taxonomy for configuration
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use scrim_core::{ColorAttr, Color, Context, ResourceTable, StringId};
//!
//! let resources = ResourceTable::new().with_string(StringId(1), "Hello");
//! let ctx = Context::new(Rc::new(resources))
//!     .with_color(ColorAttr::TextPrimary, Color::WHITE);
//!
//! assert_eq!(ctx.string(StringId(1)), "Hello");
//! assert!(!ctx.color(ColorAttr::TextPrimary).is_dark());
//! ```

pub mod color;
pub mod context;
pub mod error;
pub mod resource;

pub use color::Color;
pub use context::{ColorAttr, Context};
pub use error::{DialogError, Result};
pub use resource::{Drawable, DrawableId, ResourceTable, Resources, StringId, StyleId};
