//! Scrim View Tree
//!
//! A minimal retained view layer: slot-addressed nodes a dialog mutates,
//! plus the template inflator that materializes the dialog chrome. Layout,
//! measurement and pixel rendering belong to whatever toolkit embeds this
//! tree; nothing here draws.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use scrim_core::{Context, ResourceTable};
//! use scrim_view::{inflate, Slot, TemplateId, ViewTree};
//!
//! let ctx = Context::new(Rc::new(ResourceTable::new()));
//! let mut tree = ViewTree::new();
//! let root = inflate(&mut tree, &ctx, TemplateId::DialogBase, None);
//!
//! let title = tree.find_slot(root, Slot::Title).unwrap();
//! tree.set_text(title, "Hello");
//! assert_eq!(tree.text(title), Some("Hello"));
//! ```

pub mod template;
pub mod tree;

pub use template::{inflate, TemplateId};
pub use tree::{Slot, ViewId, ViewKind, ViewTree};
