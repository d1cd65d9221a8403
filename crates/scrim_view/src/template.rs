//! Template inflation
//!
//! Templates are the fixed declarative subtrees the dialog is assembled
//! from. [`inflate`] materializes one under a parent container (or as the
//! tree root) and returns the subtree's root id; semantic slots inside it
//! are found afterwards via [`ViewTree::find_slot`].

use scrim_core::Context;

use crate::tree::{Slot, ViewId, ViewKind, ViewTree};

/// The declarative subtrees known to the inflator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateId {
    /// The dialog base chrome: title row (icon + title), content frame,
    /// and the action row with its three buttons in fixed semantic order
    DialogBase,
    /// Scrollable container for body content
    ContentScrollView,
    /// Body text label
    MessageLabel,
}

/// Materialize `template` under `parent`, or as the tree root when no
/// parent is given. Returns the subtree root.
pub fn inflate(
    tree: &mut ViewTree,
    _context: &Context,
    template: TemplateId,
    parent: Option<ViewId>,
) -> ViewId {
    let root = match template {
        TemplateId::DialogBase => inflate_dialog_base(tree),
        TemplateId::ContentScrollView => tree.create_node(ViewKind::Scroll, Some(Slot::ScrollFrame)),
        TemplateId::MessageLabel => tree.create_node(ViewKind::Label, Some(Slot::Message)),
    };

    match parent {
        Some(parent) => tree.attach(parent, root),
        None => tree.set_root(root),
    }

    tracing::debug!(?template, nodes = tree.len(), "inflated template");
    root
}

fn inflate_dialog_base(tree: &mut ViewTree) -> ViewId {
    let root = tree.create_node(ViewKind::Frame, None);

    let title_row = tree.create_node(ViewKind::Frame, Some(Slot::TitleRow));
    let icon = tree.create_node(ViewKind::Icon, Some(Slot::Icon));
    let title = tree.create_node(ViewKind::Label, Some(Slot::Title));
    // Icon stays hidden until the host supplies a drawable
    tree.set_visible(icon, false);
    tree.attach(title_row, icon);
    tree.attach(title_row, title);
    tree.attach(root, title_row);

    let content = tree.create_node(ViewKind::Frame, Some(Slot::Content));
    tree.attach(root, content);

    let action_row = tree.create_node(ViewKind::Frame, Some(Slot::ActionRow));
    for slot in [
        Slot::PositiveAction,
        Slot::NegativeAction,
        Slot::NeutralAction,
    ] {
        let button = tree.create_node(ViewKind::Button, Some(slot));
        // Buttons surface only once configured with a label
        tree.set_visible(button, false);
        tree.attach(action_row, button);
    }
    tree.attach(root, action_row);

    root
}
