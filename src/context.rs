// SPDX-License-Identifier: MPL-2.0
//! The composition root owning all overlay state.
//!
//! [`Overlays`] holds the id seed, the layer allocator, the toast registry,
//! the host and the factories that build overlay bodies. Nothing is global:
//! an application creates one `Overlays` per window (or per test) and
//! passes it to whoever needs to show a toast or a dialog.

use crate::config::Config;
use crate::diagnostics::{BufferCapacity, DiagnosticsHandle, OverlayEvent};
use crate::error::MountError;
use crate::host::Host;
use crate::layer::{LayerAllocator, LayerToken};
use crate::modal::{self, ModalOptions, PendingResult};
use crate::overlay::{ModalFactory, ToastFactory};
use crate::toast::lifecycle as toasts;
use crate::toast::registry::ToastRegistry;
use crate::toast::{ListenerId, ToastConfig, ToastEvent, ToastHandle, ToastId};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

pub(crate) struct Shared {
    pub(crate) config: Config,
    pub(crate) host: RefCell<Box<dyn Host>>,
    pub(crate) layers: LayerAllocator,
    pub(crate) seed: Cell<u64>,
    pub(crate) toasts: RefCell<ToastRegistry>,
    pub(crate) toast_factory: Box<dyn ToastFactory>,
    pub(crate) modal_factory: Box<dyn ModalFactory>,
    pub(crate) diagnostics: DiagnosticsHandle,
}

impl Shared {
    pub(crate) fn next_toast_id(&self) -> ToastId {
        let seed = self.seed.get();
        self.seed.set(seed + 1);
        ToastId::new(seed)
    }

    pub(crate) fn next_layer(&self) -> Result<LayerToken, MountError> {
        let next = {
            let host = self.host.borrow();
            self.layers.next(&**host)
        };
        if let Err(err) = &next {
            tracing::warn!(error = %err, "layer allocation failed");
            self.diagnostics.record(OverlayEvent::MountFailed {
                reason: err.to_string(),
            });
        }
        next
    }
}

/// Entry point for creating toasts and modals.
///
/// Cloning is cheap and yields a handle to the same state.
#[derive(Clone)]
pub struct Overlays {
    shared: Rc<Shared>,
}

impl fmt::Debug for Overlays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlays")
            .field("toasts", &self.toast_count())
            .field("layer", &self.shared.layers.current())
            .finish()
    }
}

impl Overlays {
    pub fn new(
        config: Config,
        host: impl Host + 'static,
        toast_factory: impl ToastFactory + 'static,
        modal_factory: impl ModalFactory + 'static,
    ) -> Self {
        let diagnostics =
            DiagnosticsHandle::new(BufferCapacity::new(config.diagnostics.buffer_capacity));
        let layers = LayerAllocator::new(config.layer.base);
        let host: Box<dyn Host> = Box::new(host);
        Self {
            shared: Rc::new(Shared {
                config,
                host: RefCell::new(host),
                layers,
                seed: Cell::new(1),
                toasts: RefCell::new(ToastRegistry::default()),
                toast_factory: Box::new(toast_factory),
                modal_factory: Box::new(modal_factory),
                diagnostics,
            }),
        }
    }

    // ==========================================================================
    // Toasts
    // ==========================================================================

    /// Builds, mounts and registers a toast.
    pub fn create(&self, config: ToastConfig) -> Result<ToastHandle, MountError> {
        toasts::create(&self.shared, config)
    }

    /// Asks the toast with `id` to close. Unknown ids are ignored.
    pub fn destroy(&self, id: ToastId) {
        toasts::manual_destroy(&self.shared, id);
    }

    /// The most recently created toast that is still registered.
    #[must_use]
    pub fn last_instance(&self) -> Option<ToastHandle> {
        toasts::last_instance(&self.shared)
    }

    /// Live bottom offset of the toast created right before `id`.
    #[must_use]
    pub fn last_bottom_offset(&self, id: ToastId) -> f32 {
        toasts::last_bottom_offset(&self.shared, id)
    }

    /// Asks every registered toast to close, in creation order.
    pub fn close_all(&self) {
        toasts::close_all(&self.shared);
    }

    /// Registered toast ids in creation order.
    #[must_use]
    pub fn toast_ids(&self) -> Vec<ToastId> {
        self.shared.toasts.borrow().ids()
    }

    #[must_use]
    pub fn toast_count(&self) -> usize {
        self.shared.toasts.borrow().len()
    }

    /// Registers a listener for toast membership changes.
    pub fn subscribe_toasts(&self, listener: impl FnMut(&ToastEvent) + 'static) -> ListenerId {
        self.shared.toasts.borrow_mut().subscribe(listener)
    }

    pub fn unsubscribe_toasts(&self, id: ListenerId) -> bool {
        self.shared.toasts.borrow_mut().unsubscribe(id)
    }

    // ==========================================================================
    // Modals
    // ==========================================================================

    /// Shows a modal and returns its pending result.
    pub fn open(&self, options: ModalOptions) -> Result<PendingResult, MountError> {
        modal::lifecycle::open(&self.shared, options)
    }

    /// Shows a two-action confirmation dialog.
    pub fn confirm(&self, options: ModalOptions) -> Result<PendingResult, MountError> {
        modal::lifecycle::confirm(&self.shared, options)
    }

    /// Shows a one-action alert dialog.
    pub fn alert(&self, options: ModalOptions) -> Result<PendingResult, MountError> {
        modal::lifecycle::alert(&self.shared, options)
    }

    // ==========================================================================
    // Ambient
    // ==========================================================================

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn diagnostics(&self) -> DiagnosticsHandle {
        self.shared.diagnostics.clone()
    }

    /// The most recently issued layer token.
    #[must_use]
    pub fn current_layer(&self) -> Option<LayerToken> {
        self.shared.layers.current()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::diagnostics::OverlayEvent;
    use crate::headless::Harness;
    use crate::toast::{ToastConfig, ToastEvent};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn ids_start_at_one_per_instance() {
        let first = Harness::default();
        let second = Harness::default();

        let a = first.overlays.create(ToastConfig::info("a")).expect("create");
        let b = second.overlays.create(ToastConfig::info("b")).expect("create");
        assert_eq!(a.id().to_string(), "toast_1");
        assert_eq!(b.id().to_string(), "toast_1");
    }

    #[test]
    fn layer_base_comes_from_config() {
        let mut config = Config::default();
        config.layer.base = 500;
        let harness = Harness::new(config);

        assert_eq!(harness.overlays.current_layer(), None);
        let toast = harness.overlays.create(ToastConfig::info("a")).expect("create");
        assert_eq!(toast.layer().value(), 501);
        assert_eq!(harness.overlays.current_layer(), Some(toast.layer()));
    }

    #[test]
    fn listeners_see_membership_changes() {
        let harness = Harness::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = harness
            .overlays
            .subscribe_toasts(move |event| sink.borrow_mut().push(*event));

        let toast = harness.overlays.create(ToastConfig::info("a")).expect("create");
        toast.destroy();
        harness.toasts.finish_transitions();

        assert_eq!(
            *seen.borrow(),
            vec![ToastEvent::Added(toast.id()), ToastEvent::Removed(toast.id())]
        );

        assert!(harness.overlays.unsubscribe_toasts(id));
        harness.overlays.create(ToastConfig::info("b")).expect("create");
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn listener_may_query_overlays_during_dispatch() {
        let harness = Harness::default();
        let overlays = harness.overlays.clone();
        let counts = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&counts);
        harness.overlays.subscribe_toasts(move |_| {
            sink.borrow_mut().push(overlays.toast_count());
        });

        harness.overlays.create(ToastConfig::info("a")).expect("create");
        harness.overlays.close_all();
        harness.toasts.finish_transitions();

        assert_eq!(*counts.borrow(), vec![1, 0]);
    }

    #[test]
    fn diagnostics_record_toast_lifecycle() {
        let harness = Harness::default();
        let toast = harness.overlays.create(ToastConfig::info("a")).expect("create");
        harness.overlays.destroy(toast.id());
        harness.toasts.finish_transitions();

        let kinds = harness.overlays.diagnostics().kinds();
        assert!(matches!(kinds[0], OverlayEvent::ToastCreated { .. }));
        assert_eq!(kinds[1], OverlayEvent::ToastCloseRequested { id: toast.id() });
        assert_eq!(kinds[2], OverlayEvent::ToastRemoved { id: toast.id() });
    }
}
