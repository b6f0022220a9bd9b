// SPDX-License-Identifier: MPL-2.0
//! Imperatively created, stacked toast notifications.
//!
//! Callers create a toast with a [`ToastConfig`] and get a [`ToastHandle`]
//! back; nothing has to be placed in the view tree by hand. Live toasts are
//! kept in creation order so each one can stack below its predecessor.
//!
//! # Components
//!
//! - `config` - `ToastConfig` and `Severity`
//! - `instance` - ids, exposed state and the props handed to toast bodies
//! - `registry` - ordered collection of live toasts
//! - `lifecycle` - create / close / self-close / close-all
//!
//! # Usage
//!
//! ```ignore
//! use iced_overlays::toast::ToastConfig;
//!
//! let toast = overlays.create(ToastConfig::success("Image saved"))?;
//!
//! // Later: ask it to close; the body removes itself when done.
//! toast.destroy();
//! ```

mod config;
mod instance;
pub(crate) mod lifecycle;
pub(crate) mod registry;

pub use config::{Severity, ToastConfig, ToastDuration};
pub use instance::{ToastId, ToastProps, ToastState};
pub use lifecycle::{SelfClose, StackReader, ToastHandle};
pub use registry::{ListenerId, ToastEvent};
