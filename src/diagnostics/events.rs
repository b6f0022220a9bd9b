// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types recorded by the overlay manager.

use crate::layer::LayerToken;
use crate::modal::{ModalAction, ModalField, Settlement};
use crate::toast::ToastId;
use std::time::Instant;

/// Something that happened to an overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// A toast was mounted and registered.
    ToastCreated { id: ToastId, layer: LayerToken },

    /// A visible toast was asked to close.
    ToastCloseRequested { id: ToastId },

    /// A toast signalled self-close and was unregistered.
    ToastRemoved { id: ToastId },

    /// A modal was mounted and shown.
    ModalOpened {
        field: Option<ModalField>,
        layer: LayerToken,
    },

    /// A modal was hidden and torn down.
    ModalClosed {
        layer: LayerToken,
        action: ModalAction,
        settlement: Settlement,
    },

    /// An overlay could not be mounted.
    MountFailed { reason: String },
}

impl OverlayEvent {
    /// Failed mounts and modals closed without an answer.
    #[must_use]
    pub fn is_notable(&self) -> bool {
        matches!(
            self,
            OverlayEvent::MountFailed { .. }
                | OverlayEvent::ModalClosed {
                    settlement: Settlement::Pending,
                    ..
                }
        )
    }
}

/// An [`OverlayEvent`] with the moment it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: OverlayEvent,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: OverlayEvent) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}
