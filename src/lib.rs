// SPDX-License-Identifier: MPL-2.0
//! `iced_overlays` manages imperatively created overlays: stacked toast
//! notifications and modal dialogs whose outcome is awaited as a future.
//!
//! Overlays live outside the declarative widget tree. Callers ask an
//! [`Overlays`] instance for a toast or a dialog and get back a
//! [`ToastHandle`] or a [`PendingResult`]; rendering is left to whatever
//! implements the [`Host`] and [`Overlay`] contracts.

#![doc(html_root_url = "https://docs.rs/iced_overlays/0.1.0")]

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod headless;
pub mod host;
pub mod layer;
pub mod modal;
pub mod overlay;
pub mod state;
pub mod toast;

pub use context::Overlays;
pub use error::{Error, MountError, Result};
pub use host::{Container, Host, NodeId};
pub use layer::{LayerAllocator, LayerToken};
pub use modal::{ModalAction, ModalField, ModalOptions, PendingResult, Rejected, Settlement};
pub use overlay::{ModalFactory, Overlay, ToastFactory};
pub use state::Observable;
pub use toast::{ListenerId, Severity, ToastConfig, ToastEvent, ToastHandle, ToastId};
