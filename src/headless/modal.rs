// SPDX-License-Identifier: MPL-2.0
//! Scripted modal bodies with test controls.

use crate::error::MountError;
use crate::host::Container;
use crate::layer::LayerToken;
use crate::modal::{ModalAction, ModalOptions, ModalProps, ModalState};
use crate::overlay::{ModalFactory, ModalOverlay, Overlay};
use crate::state::Observable;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct ModalCell {
    props: ModalProps,
    state: Observable<ModalState>,
    fail_render: bool,
    mounts: Cell<usize>,
    unmounts: Cell<usize>,
}

struct HeadlessModal {
    cell: Rc<ModalCell>,
}

impl Overlay for HeadlessModal {
    type State = ModalState;

    fn mount(&mut self, target: &mut Container) -> Result<(), MountError> {
        if self.cell.fail_render {
            return Err(MountError::RenderFailed("headless render refused".into()));
        }
        target.render_root();
        self.cell.mounts.set(self.cell.mounts.get() + 1);
        Ok(())
    }

    fn unmount(&mut self, _target: &mut Container) {
        self.cell.unmounts.set(self.cell.unmounts.get() + 1);
    }

    fn state(&self) -> Observable<ModalState> {
        self.cell.state.clone()
    }
}

/// Test-side handle to one headless modal body.
#[derive(Clone)]
pub struct HeadlessModalHandle {
    cell: Rc<ModalCell>,
}

impl std::fmt::Debug for HeadlessModalHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessModalHandle")
            .field("props", &self.cell.props)
            .field("state", &self.cell.state.get())
            .finish()
    }
}

impl HeadlessModalHandle {
    #[must_use]
    pub fn props(&self) -> &ModalProps {
        &self.cell.props
    }

    #[must_use]
    pub fn options(&self) -> &ModalOptions {
        &self.cell.props.options
    }

    #[must_use]
    pub fn layer(&self) -> LayerToken {
        self.cell.props.layer
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.cell.state.get()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.cell.state.with(|state| state.visible)
    }

    /// User pressed the confirm button.
    pub fn confirm(&self) {
        self.hide_with(ModalAction::Confirm);
    }

    /// User pressed the cancel button.
    pub fn cancel(&self) {
        self.hide_with(ModalAction::Cancel);
    }

    /// User dismissed the dialog without answering.
    pub fn close(&self) {
        self.hide_with(ModalAction::Close);
    }

    pub fn show(&self) {
        self.cell.state.update(|state| state.visible = true);
    }

    /// Records `action` and hides the body in a single state change.
    pub fn hide_with(&self, action: ModalAction) {
        self.cell.state.update(|state| {
            state.action = action;
            state.visible = false;
        });
    }

    #[must_use]
    pub fn mount_count(&self) -> usize {
        self.cell.mounts.get()
    }

    #[must_use]
    pub fn unmount_count(&self) -> usize {
        self.cell.unmounts.get()
    }

    /// Mounted and not yet torn down.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.mount_count() > 0 && self.unmount_count() == 0
    }
}

/// Factory that records every modal body it builds.
///
/// The record grows with every dialog until [`HeadlessModals::prune_closed`]
/// drops the bodies that are gone.
#[derive(Debug, Clone, Default)]
pub struct HeadlessModals {
    built: Rc<RefCell<Vec<HeadlessModalHandle>>>,
    fail_render: Rc<Cell<bool>>,
}

impl HeadlessModals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes bodies built from now on fail to render.
    pub fn set_render_failure(&self, fail: bool) {
        self.fail_render.set(fail);
    }

    /// Every body built so far, oldest first.
    #[must_use]
    pub fn built(&self) -> Vec<HeadlessModalHandle> {
        self.built.borrow().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<HeadlessModalHandle> {
        self.built.borrow().last().cloned()
    }

    /// Forgets bodies that were torn down or never rendered.
    ///
    /// Returns how many were dropped.
    pub fn prune_closed(&self) -> usize {
        let mut built = self.built.borrow_mut();
        let before = built.len();
        built.retain(HeadlessModalHandle::is_live);
        before - built.len()
    }
}

impl ModalFactory for HeadlessModals {
    fn build(&self, props: ModalProps) -> ModalOverlay {
        let cell = Rc::new(ModalCell {
            props,
            state: Observable::default(),
            fail_render: self.fail_render.get(),
            mounts: Cell::new(0),
            unmounts: Cell::new(0),
        });
        self.built.borrow_mut().push(HeadlessModalHandle {
            cell: Rc::clone(&cell),
        });
        Box::new(HeadlessModal { cell })
    }
}

#[cfg(test)]
mod tests {
    use crate::headless::Harness;
    use crate::modal::ModalOptions;

    #[test]
    fn prune_closed_keeps_open_dialogs() {
        let harness = Harness::default();
        let _answered = harness
            .overlays
            .confirm(ModalOptions::new("a", "answered"))
            .expect("open");
        let _open = harness
            .overlays
            .confirm(ModalOptions::new("b", "still open"))
            .expect("open");
        harness.modals.built()[0].confirm();

        harness.modals.set_render_failure(true);
        assert!(harness
            .overlays
            .alert(ModalOptions::new("c", "refused"))
            .is_err());
        assert_eq!(harness.modals.built().len(), 3);

        assert_eq!(harness.modals.prune_closed(), 2);
        let left = harness.modals.built();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].options().message, "still open");
        assert!(left[0].is_live());
        assert_eq!(harness.modals.prune_closed(), 0);
    }
}
