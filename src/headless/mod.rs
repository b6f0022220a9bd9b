// SPDX-License-Identifier: MPL-2.0
//! In-memory collaborators for tests, benches and the demo binary.
//!
//! These implement the host and overlay contracts without rendering
//! anything, so the lifecycle can be driven and inspected step by step.

mod host;
mod modal;
mod toast;

pub use host::HeadlessHost;
pub use modal::{HeadlessModalHandle, HeadlessModals};
pub use toast::{HeadlessToasts, DEFAULT_TOAST_HEIGHT};

use crate::config::Config;
use crate::context::Overlays;

/// A fully wired headless setup.
#[derive(Debug, Clone)]
pub struct Harness {
    pub overlays: Overlays,
    pub host: HeadlessHost,
    pub toasts: HeadlessToasts,
    pub modals: HeadlessModals,
}

impl Harness {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_parts(
            config,
            HeadlessHost::new(),
            HeadlessToasts::new(),
            HeadlessModals::new(),
        )
    }

    #[must_use]
    pub fn with_parts(
        config: Config,
        host: HeadlessHost,
        toasts: HeadlessToasts,
        modals: HeadlessModals,
    ) -> Self {
        let overlays = Overlays::new(config, host.clone(), toasts.clone(), modals.clone());
        Self {
            overlays,
            host,
            toasts,
            modals,
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastConfig;
    use approx::assert_abs_diff_eq;
    use std::time::Duration;

    #[test]
    fn toasts_stack_on_relayout() {
        let harness = Harness::default();
        let first = harness
            .overlays
            .create(ToastConfig::info("one"))
            .expect("create");
        let second = harness
            .overlays
            .create(ToastConfig::info("two"))
            .expect("create");

        harness.toasts.relayout();

        let gap = harness.overlays.config().toast.offset;
        assert_abs_diff_eq!(first.bottom_offset(), gap + DEFAULT_TOAST_HEIGHT);
        assert_abs_diff_eq!(
            second.bottom_offset(),
            2.0 * (gap + DEFAULT_TOAST_HEIGHT)
        );
    }

    #[test]
    fn expired_toast_is_removed_on_following_tick() {
        let harness = Harness::default();
        let toast = harness
            .overlays
            .create(ToastConfig::info("bye").with_duration(Duration::from_millis(100)))
            .expect("create");

        harness.toasts.tick(Duration::from_millis(100));
        assert!(!toast.is_visible());
        assert!(toast.is_registered());

        harness.toasts.tick(Duration::ZERO);
        assert!(!toast.is_registered());
        assert_eq!(harness.toasts.mounted_count(), 0);
    }

    #[test]
    fn sticky_toast_survives_ticks() {
        let harness = Harness::default();
        let toast = harness
            .overlays
            .create(ToastConfig::error("broken"))
            .expect("create");

        for _ in 0..10 {
            harness.toasts.tick(Duration::from_secs(60));
        }
        assert!(toast.is_visible());
    }

    #[test]
    fn dismiss_requires_closable() {
        let harness = Harness::default();
        let plain = harness
            .overlays
            .create(ToastConfig::info("plain"))
            .expect("create");
        let closable = harness
            .overlays
            .create(ToastConfig::info("x").closable(true))
            .expect("create");

        assert!(!harness.toasts.dismiss(plain.id()));
        assert!(harness.toasts.dismiss(closable.id()));
        assert!(!closable.is_visible());
    }

    #[test]
    fn modal_render_failure_is_reported() {
        let harness = Harness::default();
        harness.modals.set_render_failure(true);

        let result = harness
            .overlays
            .alert(crate::modal::ModalOptions::new("t", "m"));
        assert!(matches!(
            result,
            Err(crate::error::MountError::RenderFailed(_))
        ));
    }
}
