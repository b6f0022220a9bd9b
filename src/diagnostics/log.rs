// SPDX-License-Identifier: MPL-2.0
//! Bounded storage for recorded overlay events.
//!
//! When the log is full, the oldest routine event makes room for the new
//! one. Notable events (failed mounts and modals closed without an answer)
//! are only evicted once nothing routine is left.

use super::events::DiagnosticEvent;
use crate::config::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};
use std::collections::VecDeque;

/// Log capacity, guaranteed to be within the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EventLog {
    events: VecDeque<DiagnosticEvent>,
    capacity: usize,
}

impl EventLog {
    pub(crate) fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    pub(crate) fn push(&mut self, event: DiagnosticEvent) {
        if self.events.len() >= self.capacity {
            self.evict();
        }
        self.events.push_back(event);
    }

    fn evict(&mut self) {
        let victim = self
            .events
            .iter()
            .position(|event| !event.kind.is_notable())
            .unwrap_or(0);
        self.events.remove(victim);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }
}
