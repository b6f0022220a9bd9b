// SPDX-License-Identifier: MPL-2.0
//! The host tree overlays are attached to.
//!
//! Overlays first render into a detached [`Container`]; the lifecycle then
//! moves the rendered root into the [`Host`]. Teardown runs the other way:
//! detach the root, let the overlay unmount, release the container.

use crate::error::MountError;
use crate::layer::LayerToken;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of a rendered root node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new unique node ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The document tree of the surrounding UI.
pub trait Host {
    /// Highest layer used by anything already in the tree.
    fn highest_layer(&self) -> Option<LayerToken>;

    /// Inserts a rendered root at the given layer.
    fn attach(&mut self, root: NodeId, layer: LayerToken) -> Result<(), MountError>;

    /// Removes a root. Returns `false` if it was not attached.
    fn detach(&mut self, root: NodeId) -> bool;
}

/// A detached render target owned by the lifecycle of one overlay.
#[derive(Debug, Default)]
pub struct Container {
    root: Option<NodeId>,
    attached: bool,
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the container's root node, creating it on first use.
    ///
    /// Overlay bodies call this while mounting.
    pub fn render_root(&mut self) -> NodeId {
        *self.root.get_or_insert_with(NodeId::new)
    }

    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Drops the rendered content. Returns the root that was released.
    pub fn clear(&mut self) -> Option<NodeId> {
        self.root.take()
    }

    /// Whether the root currently lives in the host tree.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Moves the rendered root into the host.
    pub(crate) fn attach_to(
        &mut self,
        host: &mut dyn Host,
        layer: LayerToken,
    ) -> Result<NodeId, MountError> {
        let root = self.root.ok_or(MountError::EmptyRender)?;
        host.attach(root, layer)?;
        self.attached = true;
        Ok(root)
    }

    /// Takes the root back out of the host, if it is there.
    pub(crate) fn detach_from(&mut self, host: &mut dyn Host) {
        if !self.attached {
            return;
        }
        if let Some(root) = self.root {
            host.detach(root);
        }
        self.attached = false;
    }
}
