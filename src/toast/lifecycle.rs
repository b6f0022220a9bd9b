// SPDX-License-Identifier: MPL-2.0
//! Mount, register, close and unmount of individual toasts.
//!
//! A toast moves through `created → visible → closing requested →
//! self-closed → destroyed`. Only the toast body ends that walk: closing
//! from the outside merely hides it, and the body fires its
//! [`SelfClose`] hook once it is done (timeout elapsed, leave transition
//! finished). That hook is the only path that unregisters and unmounts.

use super::config::ToastConfig;
use super::instance::{ToastId, ToastProps, ToastState};
use super::registry::{notify, ToastEntry, ToastEvent};
use crate::context::Shared;
use crate::diagnostics::OverlayEvent;
use crate::error::MountError;
use crate::host::Container;
use crate::layer::LayerToken;
use crate::overlay::{mount_detached, unmount_attached};
use crate::state::Observable;
use std::fmt;
use std::rc::{Rc, Weak};

/// Hook a toast body fires when it is ready to be removed.
#[derive(Clone)]
pub struct SelfClose {
    id: ToastId,
    shared: Weak<Shared>,
}

impl SelfClose {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Unregisters and unmounts the toast. Does nothing if it is already gone.
    pub fn fire(&self) {
        if let Some(shared) = self.shared.upgrade() {
            on_self_close(&shared, self.id);
        }
    }
}

impl fmt::Debug for SelfClose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelfClose").field("id", &self.id).finish()
    }
}

/// Lets a toast body read where its predecessor currently ends.
#[derive(Clone)]
pub struct StackReader {
    id: ToastId,
    shared: Weak<Shared>,
}

impl StackReader {
    /// Live bottom offset of the previous toast, or zero if there is none.
    #[must_use]
    pub fn last_bottom_offset(&self) -> f32 {
        self.shared
            .upgrade()
            .map_or(0.0, |shared| last_bottom_offset(&shared, self.id))
    }
}

impl fmt::Debug for StackReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackReader").field("id", &self.id).finish()
    }
}

/// Caller-side handle to a created toast.
#[derive(Clone)]
pub struct ToastHandle {
    id: ToastId,
    layer: LayerToken,
    state: Observable<ToastState>,
    shared: Weak<Shared>,
}

impl ToastHandle {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn layer(&self) -> LayerToken {
        self.layer
    }

    /// Snapshot of the toast's exposed state.
    #[must_use]
    pub fn state(&self) -> ToastState {
        self.state.get()
    }

    /// The toast's observable state.
    #[must_use]
    pub fn observe(&self) -> Observable<ToastState> {
        self.state.clone()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.with(|state| state.visible)
    }

    #[must_use]
    pub fn bottom_offset(&self) -> f32 {
        self.state.with(|state| state.bottom_offset)
    }

    /// Whether the toast is still in the registry.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| is_registered(&shared, self.id))
    }

    /// Asks the toast to close. Removal follows once the body self-closes.
    pub fn destroy(&self) {
        if let Some(shared) = self.shared.upgrade() {
            manual_destroy(&shared, self.id);
        }
    }
}

impl fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastHandle")
            .field("id", &self.id)
            .field("layer", &self.layer)
            .field("state", &self.state.get())
            .finish()
    }
}

pub(crate) fn create(
    shared: &Rc<Shared>,
    config: ToastConfig,
) -> Result<ToastHandle, MountError> {
    let id = shared.next_toast_id();
    let layer = shared.next_layer()?;

    let settings = &shared.config.toast;
    let duration = config.resolved_duration(settings);
    let offset = config.resolved_offset(settings);
    let props = ToastProps {
        id,
        layer,
        message: config.message,
        severity: config.severity,
        duration,
        offset,
        closable: config.closable,
        on_self_close: SelfClose {
            id,
            shared: Rc::downgrade(shared),
        },
        stack: StackReader {
            id,
            shared: Rc::downgrade(shared),
        },
    };

    let mut overlay = shared.toast_factory.build(props);
    let mut container = Container::new();
    if let Err(err) = mount_detached(&shared.host, overlay.as_mut(), &mut container, layer) {
        tracing::warn!(%id, error = %err, "toast mount failed");
        shared.diagnostics.record(OverlayEvent::MountFailed {
            reason: err.to_string(),
        });
        return Err(err);
    }

    let state = overlay.state();
    shared.toasts.borrow_mut().push(ToastEntry {
        id,
        layer,
        state: state.clone(),
        overlay,
        container,
    });
    shared
        .diagnostics
        .record(OverlayEvent::ToastCreated { id, layer });
    tracing::debug!(%id, %layer, "toast created");
    publish(shared, ToastEvent::Added(id));

    Ok(ToastHandle {
        id,
        layer,
        state,
        shared: Rc::downgrade(shared),
    })
}

pub(crate) fn on_self_close(shared: &Shared, id: ToastId) {
    let removed = shared.toasts.borrow_mut().remove(id);
    let Some(mut entry) = removed else {
        tracing::trace!(%id, "self-close for unknown toast ignored");
        return;
    };

    unmount_attached(&shared.host, entry.overlay.as_mut(), &mut entry.container);
    shared.diagnostics.record(OverlayEvent::ToastRemoved { id });
    tracing::debug!(%id, "toast removed");
    publish(shared, ToastEvent::Removed(id));
}

pub(crate) fn manual_destroy(shared: &Shared, id: ToastId) {
    let state = shared
        .toasts
        .borrow()
        .find(id)
        .map(|entry| entry.state.clone());
    let Some(state) = state else {
        tracing::trace!(%id, "destroy for unknown toast ignored");
        return;
    };

    if state.update(|state| state.visible = false) {
        shared
            .diagnostics
            .record(OverlayEvent::ToastCloseRequested { id });
        tracing::debug!(%id, "toast close requested");
    }
}

pub(crate) fn close_all(shared: &Shared) {
    let ids = shared.toasts.borrow().ids();
    tracing::debug!(count = ids.len(), "closing all toasts");
    for id in ids {
        manual_destroy(shared, id);
    }
}

pub(crate) fn last_instance(shared: &Rc<Shared>) -> Option<ToastHandle> {
    let toasts = shared.toasts.borrow();
    toasts.last().map(|entry| ToastHandle {
        id: entry.id,
        layer: entry.layer,
        state: entry.state.clone(),
        shared: Rc::downgrade(shared),
    })
}

fn is_registered(shared: &Shared, id: ToastId) -> bool {
    shared.toasts.borrow().position(id).is_some()
}

pub(crate) fn last_bottom_offset(shared: &Shared, id: ToastId) -> f32 {
    shared.toasts.borrow().last_bottom_offset(id)
}

fn publish(shared: &Shared, event: ToastEvent) {
    let snapshot = shared.toasts.borrow().listeners().snapshot();
    notify(snapshot, &event, |listener| {
        shared.toasts.borrow().listeners().contains(listener)
    });
}
