//! # Scrim Dialogs (scrim_dialog)
//!
//! Fluent, themed modal dialogs built on the `scrim_view` tree.
//!
//! ## Philosophy
//!
//! A dialog is one aggregate owning one view tree. Configuration is a
//! chain of in-place mutations that each return the dialog, ending in a
//! terminal `show()`; the light/dark scheme is inferred once from the host
//! context so dialog chrome always contrasts with the ambient text color.
//!
//! - **Foundation**: `scrim_core` provides colors, resources and the context
//! - **View tree**: `scrim_view` provides slots and template inflation
//! - **Theme**: `scrim_theme` provides scheme inference and chrome tokens
//! - **Dialogs**: this crate wires them into the builder surface
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use scrim_dialog::prelude::*;
//!
//! let ctx = Context::new(Rc::new(ResourceTable::new()));
//! let mut d = dialog(ctx)
//!     .title(None, Some("Unsaved changes"))
//!     .message(None, Some("Save before closing?"))
//!     .positive_button(None, Some("Save"), Some(callback(|_| { /* save */ })))
//!     .negative_button(None, None, None)
//!     .on_dismiss(|_| { /* release */ })
//!     .show();
//!
//! d.press(ActionButton::Positive);
//! assert_eq!(d.state(), DialogState::Dismissed);
//! ```

pub mod action;
pub mod dialog;

pub use action::ActionButton;
pub use dialog::{callback, dialog, Dialog, DialogCallback, DialogState};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::ActionButton;
    pub use crate::dialog::{callback, dialog, Dialog, DialogCallback, DialogState};
    // Re-export commonly needed foundation and theme types
    pub use scrim_core::{
        Color, ColorAttr, Context, Drawable, DrawableId, ResourceTable, Resources, StringId,
    };
    pub use scrim_theme::{ColorScheme, ThemeTokens};
    pub use scrim_view::{Slot, ViewTree};
}
