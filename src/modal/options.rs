// SPDX-License-Identifier: MPL-2.0
//! Modal options, exposed state and props.

use crate::layer::LayerToken;

/// Which flavor of dialog the body presents.
///
/// Only changes the body's buttons; the lifecycle is the same for all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalField {
    /// Two actions: confirm and cancel.
    Confirm,
    /// One acknowledging action.
    Alert,
}

/// How the user left the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalAction {
    /// No answer recorded yet.
    #[default]
    None,
    Cancel,
    Confirm,
    /// Dismissed without an answer (close button, escape key).
    Close,
}

/// State a modal body exposes to its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    pub visible: bool,
    pub action: ModalAction,
}

/// Caller-facing dialog options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalOptions {
    pub title: String,
    pub message: String,
    pub field: Option<ModalField>,
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
}

impl ModalOptions {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }
}

/// What a modal body is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalProps {
    pub options: ModalOptions,
    pub layer: LayerToken,
}
