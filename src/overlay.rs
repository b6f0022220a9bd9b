// SPDX-License-Identifier: MPL-2.0
//! The narrow contract every overlay body implements.
//!
//! The lifecycle code never looks inside an overlay; it mounts it into a
//! [`Container`], reads and writes its exposed [`Observable`] state, and
//! unmounts it again.

use crate::error::MountError;
use crate::host::{Container, Host, NodeId};
use crate::layer::LayerToken;
use crate::modal::{ModalProps, ModalState};
use crate::state::Observable;
use crate::toast::{ToastProps, ToastState};
use std::cell::RefCell;

/// A mountable overlay body.
pub trait Overlay {
    /// State the overlay exposes to its lifecycle.
    type State: Clone + PartialEq + 'static;

    /// Renders into the detached container.
    fn mount(&mut self, target: &mut Container) -> Result<(), MountError>;

    /// Releases everything rendered by [`Overlay::mount`].
    fn unmount(&mut self, target: &mut Container);

    /// The exposed state handle.
    fn state(&self) -> Observable<Self::State>;
}

pub type ToastOverlay = Box<dyn Overlay<State = ToastState>>;
pub type ModalOverlay = Box<dyn Overlay<State = ModalState>>;

/// Builds toast bodies from merged props.
pub trait ToastFactory {
    fn build(&self, props: ToastProps) -> ToastOverlay;
}

impl<F> ToastFactory for F
where
    F: Fn(ToastProps) -> ToastOverlay,
{
    fn build(&self, props: ToastProps) -> ToastOverlay {
        self(props)
    }
}

/// Builds modal bodies from their options.
pub trait ModalFactory {
    fn build(&self, props: ModalProps) -> ModalOverlay;
}

impl<F> ModalFactory for F
where
    F: Fn(ModalProps) -> ModalOverlay,
{
    fn build(&self, props: ModalProps) -> ModalOverlay {
        self(props)
    }
}

/// Mounts `overlay` into `container`, then moves the rendered root into the host.
///
/// If the host refuses the root, the overlay is unmounted again and the
/// container released before the error is returned.
pub(crate) fn mount_detached<S>(
    host: &RefCell<Box<dyn Host>>,
    overlay: &mut dyn Overlay<State = S>,
    container: &mut Container,
    layer: LayerToken,
) -> Result<NodeId, MountError>
where
    S: Clone + PartialEq + 'static,
{
    overlay.mount(container)?;

    let attached = {
        let mut host = host.borrow_mut();
        container.attach_to(&mut **host, layer)
    };
    if attached.is_err() {
        overlay.unmount(container);
        container.clear();
    }
    attached
}

/// Reverses [`mount_detached`].
pub(crate) fn unmount_attached<S>(
    host: &RefCell<Box<dyn Host>>,
    overlay: &mut dyn Overlay<State = S>,
    container: &mut Container,
) where
    S: Clone + PartialEq + 'static,
{
    {
        let mut host = host.borrow_mut();
        container.detach_from(&mut **host);
    }
    overlay.unmount(container);
    container.clear();
}
