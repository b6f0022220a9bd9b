// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of live toasts.
//!
//! Entries are kept in creation order. Stacking offsets are never cached:
//! [`ToastRegistry::last_bottom_offset`] reads the predecessor's exposed
//! state every time it is asked.

use super::instance::{ToastId, ToastState};
use crate::host::Container;
use crate::layer::LayerToken;
use crate::overlay::ToastOverlay;
use crate::state::Observable;
use std::cell::RefCell;
use std::rc::Rc;

/// Membership change published to registry listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
    Added(ToastId),
    Removed(ToastId),
}

/// Handle for removing a membership listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<RefCell<dyn FnMut(&ToastEvent)>>;

/// Explicit add/remove notification for presentation layers.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    fn add(&mut self, listener: impl FnMut(&ToastEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    pub(crate) fn snapshot(&self) -> Vec<(ListenerId, Listener)> {
        self.entries.clone()
    }
}

/// Calls every listener in `snapshot` that is still registered at call time.
///
/// A listener that is already running (it caused this event) is skipped.
pub(crate) fn notify(
    snapshot: Vec<(ListenerId, Listener)>,
    event: &ToastEvent,
    still_registered: impl Fn(ListenerId) -> bool,
) {
    for (id, listener) in snapshot {
        if !still_registered(id) {
            continue;
        }
        if let Ok(mut listener) = listener.try_borrow_mut() {
            (&mut *listener)(event);
        }
    }
}

/// A mounted toast owned by the registry.
pub(crate) struct ToastEntry {
    pub(crate) id: ToastId,
    pub(crate) layer: LayerToken,
    pub(crate) state: Observable<ToastState>,
    pub(crate) overlay: ToastOverlay,
    pub(crate) container: Container,
}

#[derive(Default)]
pub(crate) struct ToastRegistry {
    entries: Vec<ToastEntry>,
    listeners: Listeners,
}

impl ToastRegistry {
    pub(crate) fn push(&mut self, entry: ToastEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn position(&self, id: ToastId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub(crate) fn find(&self, id: ToastId) -> Option<&ToastEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub(crate) fn remove(&mut self, id: ToastId) -> Option<ToastEntry> {
        let idx = self.position(id)?;
        Some(self.entries.remove(idx))
    }

    pub(crate) fn last(&self) -> Option<&ToastEntry> {
        self.entries.last()
    }

    /// Live bottom offset of the toast created right before `id`.
    ///
    /// Zero for the first toast and for unknown ids.
    pub(crate) fn last_bottom_offset(&self, id: ToastId) -> f32 {
        match self.position(id) {
            Some(idx) if idx > 0 => {
                self.entries[idx - 1].state.with(|state| state.bottom_offset)
            }
            _ => 0.0,
        }
    }

    pub(crate) fn ids(&self) -> Vec<ToastId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn subscribe(
        &mut self,
        listener: impl FnMut(&ToastEvent) + 'static,
    ) -> ListenerId {
        self.listeners.add(listener)
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub(crate) fn listeners(&self) -> &Listeners {
        &self.listeners
    }
}
