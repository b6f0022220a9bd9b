// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording overlay lifecycle events.
//!
//! Every mount, close request, removal and modal settlement is appended to
//! a bounded event log. Tools and tests read it back through a
//! [`DiagnosticsHandle`] to see what the overlay manager did and in which
//! order. A full log drops routine events before notable ones (see
//! [`OverlayEvent::is_notable`]).

mod events;
mod log;

pub use events::{DiagnosticEvent, OverlayEvent};
pub use log::BufferCapacity;

use log::EventLog;

use std::cell::RefCell;
use std::rc::Rc;

/// Cloneable handle to the lifecycle event log.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    log: Rc<RefCell<EventLog>>,
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            log: Rc::new(RefCell::new(EventLog::new(capacity))),
        }
    }

    /// Records a lifecycle event.
    pub fn record(&self, kind: OverlayEvent) {
        self.log.borrow_mut().push(DiagnosticEvent::new(kind));
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.log.borrow().iter().cloned().collect()
    }

    /// Returns only the event kinds, oldest first.
    #[must_use]
    pub fn kinds(&self) -> Vec<OverlayEvent> {
        self.log
            .borrow()
            .iter()
            .map(|event| event.kind.clone())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_clones_share_the_log() {
        let handle = DiagnosticsHandle::default();
        let other = handle.clone();

        other.record(OverlayEvent::MountFailed {
            reason: "test".into(),
        });

        assert_eq!(handle.len(), 1);
        assert_eq!(
            handle.kinds(),
            vec![OverlayEvent::MountFailed {
                reason: "test".into()
            }]
        );
    }

    #[test]
    fn events_are_timestamped_in_order() {
        let handle = DiagnosticsHandle::default();
        for reason in ["a", "b"] {
            handle.record(OverlayEvent::MountFailed {
                reason: reason.into(),
            });
        }

        let events = handle.events();
        assert!(events[0].at <= events[1].at);
        handle.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn notable_events_are_flagged() {
        assert!(OverlayEvent::MountFailed {
            reason: "render".into()
        }
        .is_notable());
        assert!(!OverlayEvent::ToastRemoved {
            id: crate::toast::ToastId::new(1)
        }
        .is_notable());
    }
}
