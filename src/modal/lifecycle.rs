// SPDX-License-Identifier: MPL-2.0
//! Bridges a modal body's observable state to its pending result.
//!
//! `open` builds the body, mounts it into a detached fragment, attaches the
//! fragment to the host, shows it and watches its state from an effect
//! running in its own scope. The first time the body reports
//! `visible == false` the effect settles the result according to the
//! recorded action, stops the scope, and unmounts the body. Later state
//! changes find nothing left to act on.

use super::options::{ModalAction, ModalField, ModalOptions, ModalProps, ModalState};
use super::pending::{channel, PendingResult, Settle, Settlement};
use crate::config::UnrecognizedClose;
use crate::context::Shared;
use crate::diagnostics::OverlayEvent;
use crate::error::MountError;
use crate::host::Container;
use crate::layer::LayerToken;
use crate::overlay::{mount_detached, unmount_attached, ModalOverlay};
use spark_signals::{effect, effect_scope};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Everything that must be torn down exactly once.
struct Session {
    app: ModalOverlay,
    fragment: Container,
    settle: Settle,
    layer: LayerToken,
    stop: Option<Box<dyn FnOnce()>>,
}

pub(crate) fn open(
    shared: &Rc<Shared>,
    options: ModalOptions,
) -> Result<PendingResult, MountError> {
    let field = options.field;
    let layer = shared.next_layer()?;
    let app = shared.modal_factory.build(ModalProps { options, layer });
    let (settle, pending) = channel();

    show(shared, app, settle, layer, field)?;
    Ok(pending)
}

pub(crate) fn confirm(
    shared: &Rc<Shared>,
    mut options: ModalOptions,
) -> Result<PendingResult, MountError> {
    options.field = Some(ModalField::Confirm);
    open(shared, options)
}

pub(crate) fn alert(
    shared: &Rc<Shared>,
    mut options: ModalOptions,
) -> Result<PendingResult, MountError> {
    options.field = Some(ModalField::Alert);
    open(shared, options)
}

fn show(
    shared: &Rc<Shared>,
    mut app: ModalOverlay,
    settle: Settle,
    layer: LayerToken,
    field: Option<ModalField>,
) -> Result<(), MountError> {
    let mut fragment = Container::new();
    if let Err(err) = mount_detached(&shared.host, app.as_mut(), &mut fragment, layer) {
        tracing::warn!(%layer, error = %err, "modal mount failed");
        shared.diagnostics.record(OverlayEvent::MountFailed {
            reason: err.to_string(),
        });
        return Err(err);
    }

    let state = app.state();
    state.update(|state| state.visible = true);
    shared
        .diagnostics
        .record(OverlayEvent::ModalOpened { field, layer });
    tracing::debug!(%layer, ?field, "modal shown");

    let session = Rc::new(RefCell::new(Some(Session {
        app,
        fragment,
        settle,
        layer,
        stop: None,
    })));

    let scope = effect_scope(false);
    let slot = Rc::clone(&session);
    let owner = Rc::downgrade(shared);
    scope.run(move || {
        // Stopped together with the scope.
        let _effect_cleanup = effect(move || {
            let current: ModalState = state.get();
            if current.visible {
                return;
            }
            let Some(session) = slot.borrow_mut().take() else {
                return;
            };
            teardown(&owner, session, current.action);
        });
    });

    if let Some(session) = session.borrow_mut().as_mut() {
        session.stop = Some(Box::new(move || {
            scope.stop();
        }));
    }
    Ok(())
}

fn teardown(owner: &Weak<Shared>, mut session: Session, action: ModalAction) {
    let policy = owner
        .upgrade()
        .map(|shared| shared.config.modal.unrecognized_close)
        .unwrap_or_default();

    let settlement = match action {
        ModalAction::Cancel => Settlement::Rejected,
        ModalAction::Confirm => Settlement::Resolved,
        ModalAction::None | ModalAction::Close => match policy {
            UnrecognizedClose::LeavePending => Settlement::Pending,
            UnrecognizedClose::Reject => Settlement::Rejected,
            UnrecognizedClose::Resolve => Settlement::Resolved,
        },
    };

    match settlement {
        Settlement::Resolved => {
            session.settle.resolve();
        }
        Settlement::Rejected => {
            session.settle.reject();
        }
        Settlement::Pending => {
            tracing::warn!(
                layer = %session.layer,
                ?action,
                "modal closed without an answer; result stays pending"
            );
        }
    }

    if let Some(stop) = session.stop.take() {
        stop();
    }

    match owner.upgrade() {
        Some(shared) => {
            unmount_attached(&shared.host, session.app.as_mut(), &mut session.fragment);
            shared.diagnostics.record(OverlayEvent::ModalClosed {
                layer: session.layer,
                action,
                settlement,
            });
        }
        None => {
            session.app.unmount(&mut session.fragment);
            session.fragment.clear();
        }
    }
    tracing::debug!(layer = %session.layer, ?action, ?settlement, "modal torn down");
}
