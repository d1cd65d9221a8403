//! Retained view tree
//!
//! The dialog owns exactly one [`ViewTree`] for its whole lifetime and
//! mutates it through slot handles. Nodes are typed ([`ViewKind`]) and may
//! carry a semantic [`Slot`] marker so templates stay queryable after
//! inflation without the caller holding on to every id.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use scrim_core::{Color, Drawable};

new_key_type! {
    /// Handle to a node in a [`ViewTree`]
    pub struct ViewId;
}

/// What a node is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// Generic container
    Frame,
    /// Single-run text
    Label,
    /// Drawable display
    Icon,
    /// Scrollable container
    Scroll,
    /// Activatable action button
    Button,
}

/// Semantic slot markers for template nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    TitleRow,
    Icon,
    Title,
    Content,
    ActionRow,
    PositiveAction,
    NegativeAction,
    NeutralAction,
    ScrollFrame,
    Message,
}

/// One node in the tree
#[derive(Clone, Debug)]
pub struct ViewNode {
    kind: ViewKind,
    slot: Option<Slot>,
    children: SmallVec<[ViewId; 4]>,
    text: Option<String>,
    icon: Option<Drawable>,
    color: Option<Color>,
    visible: bool,
}

impl ViewNode {
    fn new(kind: ViewKind, slot: Option<Slot>) -> Self {
        Self {
            kind,
            slot,
            children: SmallVec::new(),
            text: None,
            icon: None,
            color: None,
            visible: true,
        }
    }
}

/// Exclusively-owned view tree with slot queries
///
/// Mutators index by [`ViewId`]; passing a stale id is a programmer error
/// and panics, matching the rest of the configuration surface.
#[derive(Default)]
pub struct ViewTree {
    nodes: SlotMap<ViewId, ViewNode>,
    root: Option<ViewId>,
    debug: bool,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node
    pub fn create_node(&mut self, kind: ViewKind, slot: Option<Slot>) -> ViewId {
        self.nodes.insert(ViewNode::new(kind, slot))
    }

    /// Append `child` under `parent`
    pub fn attach(&mut self, parent: ViewId, child: ViewId) {
        self.nodes[parent].children.push(child);
    }

    /// Mark a node as the tree root
    pub fn set_root(&mut self, id: ViewId) {
        self.root = Some(id);
    }

    pub fn root(&self) -> Option<ViewId> {
        self.root
    }

    pub fn kind(&self, id: ViewId) -> ViewKind {
        self.nodes[id].kind
    }

    pub fn children(&self, id: ViewId) -> &[ViewId] {
        &self.nodes[id].children
    }

    pub fn set_text(&mut self, id: ViewId, text: impl Into<String>) {
        self.nodes[id].text = Some(text.into());
    }

    pub fn text(&self, id: ViewId) -> Option<&str> {
        self.nodes[id].text.as_deref()
    }

    pub fn set_icon(&mut self, id: ViewId, icon: Drawable) {
        self.nodes[id].icon = Some(icon);
    }

    pub fn icon(&self, id: ViewId) -> Option<&Drawable> {
        self.nodes[id].icon.as_ref()
    }

    pub fn set_color(&mut self, id: ViewId, color: Color) {
        self.nodes[id].color = Some(color);
    }

    pub fn color(&self, id: ViewId) -> Option<Color> {
        self.nodes[id].color
    }

    pub fn set_visible(&mut self, id: ViewId, visible: bool) {
        self.nodes[id].visible = visible;
    }

    pub fn is_visible(&self, id: ViewId) -> bool {
        self.nodes[id].visible
    }

    /// Depth-first search for the first node carrying `slot` under `scope`
    pub fn find_slot(&self, scope: ViewId, slot: Slot) -> Option<ViewId> {
        if self.nodes[scope].slot == Some(slot) {
            return Some(scope);
        }
        // Children are appended in template order, so DFS visits slots in
        // their declared order
        for &child in self.nodes[scope].children.iter() {
            if let Some(found) = self.find_slot(child, slot) {
                return Some(found);
            }
        }
        None
    }

    /// Count nodes carrying `slot` under `scope`
    pub fn count_slot(&self, scope: ViewId, slot: Slot) -> usize {
        let own = usize::from(self.nodes[scope].slot == Some(slot));
        own + self.nodes[scope]
            .children
            .iter()
            .map(|&child| self.count_slot(child, slot))
            .sum::<usize>()
    }

    /// Toggle diagnostic bounds visualization. Read by renderers only;
    /// has no effect on tree contents.
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_and_children() {
        let mut tree = ViewTree::new();
        let root = tree.create_node(ViewKind::Frame, None);
        let label = tree.create_node(ViewKind::Label, Some(Slot::Title));
        tree.attach(root, label);

        assert_eq!(tree.children(root), &[label]);
        assert_eq!(tree.kind(label), ViewKind::Label);
    }

    #[test]
    fn test_find_slot_depth_first() {
        let mut tree = ViewTree::new();
        let root = tree.create_node(ViewKind::Frame, None);
        let row = tree.create_node(ViewKind::Frame, Some(Slot::TitleRow));
        let title = tree.create_node(ViewKind::Label, Some(Slot::Title));
        tree.attach(root, row);
        tree.attach(row, title);

        assert_eq!(tree.find_slot(root, Slot::Title), Some(title));
        assert_eq!(tree.find_slot(root, Slot::Message), None);
    }

    #[test]
    fn test_text_and_visibility() {
        let mut tree = ViewTree::new();
        let label = tree.create_node(ViewKind::Label, None);

        assert!(tree.text(label).is_none());
        assert!(tree.is_visible(label));

        tree.set_text(label, "Hello");
        tree.set_visible(label, false);

        assert_eq!(tree.text(label), Some("Hello"));
        assert!(!tree.is_visible(label));
    }

    #[test]
    fn test_debug_flag() {
        let mut tree = ViewTree::new();
        assert!(!tree.debug());
        tree.set_debug(true);
        assert!(tree.debug());
    }
}
