// SPDX-License-Identifier: MPL-2.0
//! Per-instance toast data: identity, exposed state and merged props.

use super::config::Severity;
use super::lifecycle::{SelfClose, StackReader};
use crate::layer::LayerToken;
use std::fmt;
use std::time::Duration;

/// Unique identifier for a toast, rendered as `toast_<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast_{}", self.0)
    }
}

/// State a toast body exposes to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToastState {
    /// Whether the toast is showing. Writable by the registry.
    pub visible: bool,
    /// Measured distance from the top of the stack to the toast's bottom edge.
    pub bottom_offset: f32,
}

/// Caller config merged with everything the registry supplies.
#[derive(Debug, Clone)]
pub struct ToastProps {
    pub id: ToastId,
    pub layer: LayerToken,
    pub message: String,
    pub severity: Severity,
    /// Auto-close delay; `None` keeps the toast until dismissed.
    pub duration: Option<Duration>,
    pub offset: f32,
    pub closable: bool,
    /// Must be fired by the body once it is done closing.
    pub on_self_close: SelfClose,
    /// Reads the predecessor's live offset.
    pub stack: StackReader,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_render_with_prefix() {
        assert_eq!(ToastId::new(7).to_string(), "toast_7");
    }

    #[test]
    fn default_state_is_hidden() {
        let state = ToastState::default();
        assert!(!state.visible);
        assert_eq!(state.bottom_offset, 0.0);
    }
}
