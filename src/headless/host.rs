// SPDX-License-Identifier: MPL-2.0
//! In-memory host tree.

use crate::error::MountError;
use crate::host::{Host, NodeId};
use crate::layer::LayerToken;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Tree {
    /// Attached roots in insertion order.
    roots: Vec<(NodeId, LayerToken)>,
    /// Layered elements the application created before any overlay.
    existing: Option<LayerToken>,
    unavailable: bool,
}

/// A host that records attached roots instead of rendering them.
///
/// Clones share the same tree, so a test can hand one clone to
/// `Overlays::new` and inspect the tree through another.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    tree: Rc<RefCell<Tree>>,
}

impl HeadlessHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that already contains an element layered at `layer`.
    #[must_use]
    pub fn with_existing_layer(layer: LayerToken) -> Self {
        let host = Self::new();
        host.tree.borrow_mut().existing = Some(layer);
        host
    }

    /// Makes every subsequent attach fail with [`MountError::HostUnavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.tree.borrow_mut().unavailable = unavailable;
    }

    #[must_use]
    pub fn is_attached(&self, root: NodeId) -> bool {
        self.tree.borrow().roots.iter().any(|(node, _)| *node == root)
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.tree.borrow().roots.len()
    }

    /// Layer a root was attached at.
    #[must_use]
    pub fn layer_of(&self, root: NodeId) -> Option<LayerToken> {
        self.tree
            .borrow()
            .roots
            .iter()
            .find(|(node, _)| *node == root)
            .map(|(_, layer)| *layer)
    }

    /// The root rendered above all others.
    #[must_use]
    pub fn topmost(&self) -> Option<NodeId> {
        self.tree
            .borrow()
            .roots
            .iter()
            .max_by_key(|(_, layer)| *layer)
            .map(|(node, _)| *node)
    }
}

impl Host for HeadlessHost {
    fn highest_layer(&self) -> Option<LayerToken> {
        let tree = self.tree.borrow();
        tree.roots
            .iter()
            .map(|(_, layer)| *layer)
            .chain(tree.existing)
            .max()
    }

    fn attach(&mut self, root: NodeId, layer: LayerToken) -> Result<(), MountError> {
        let mut tree = self.tree.borrow_mut();
        if tree.unavailable {
            return Err(MountError::HostUnavailable);
        }
        if tree.roots.iter().any(|(node, _)| *node == root) {
            return Err(MountError::AlreadyAttached(root));
        }
        tree.roots.push((root, layer));
        Ok(())
    }

    fn detach(&mut self, root: NodeId) -> bool {
        let mut tree = self.tree.borrow_mut();
        let before = tree.roots.len();
        tree.roots.retain(|(node, _)| *node != root);
        tree.roots.len() != before
    }
}
