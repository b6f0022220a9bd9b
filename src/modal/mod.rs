// SPDX-License-Identifier: MPL-2.0
//! Promise-settling modal dialogs.
//!
//! Opening a modal returns a [`PendingResult`] that resolves when the user
//! confirms and rejects when they cancel. Each modal gets its own body and
//! container for the duration of one interaction; nothing is kept around
//! once it has been answered.
//!
//! # Usage
//!
//! ```ignore
//! use iced_overlays::modal::ModalOptions;
//!
//! let answer = overlays.confirm(ModalOptions::new("Delete", "Delete this image?"))?;
//! if answer.await.is_ok() {
//!     // confirmed
//! }
//! ```

pub(crate) mod lifecycle;
mod options;
mod pending;

pub use options::{ModalAction, ModalField, ModalOptions, ModalProps, ModalState};
pub use pending::{PendingResult, Rejected, Settlement};
