// SPDX-License-Identifier: MPL-2.0
//! One-shot outcome of a modal interaction.
//!
//! The sending half is created before the modal is mounted, so no state
//! change can happen before someone is ready to settle it. It settles at
//! most once. A result whose sender goes away without settling stays
//! pending forever: awaiting it never completes and
//! [`PendingResult::settlement`] keeps reporting [`Settlement::Pending`].

use futures_util::ready;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot::{self, error::TryRecvError};

/// The user cancelled the dialog. Carries no further detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rejected;

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "modal was cancelled")
    }
}

impl std::error::Error for Rejected {}

/// Where a pending result currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Pending,
    Resolved,
    Rejected,
}

type Outcome = Result<(), Rejected>;

pub(crate) fn channel() -> (Settle, PendingResult) {
    let (tx, rx) = oneshot::channel();
    (
        Settle { tx: Some(tx) },
        PendingResult {
            rx,
            settled: None,
            abandoned: false,
        },
    )
}

/// Resolve/reject pair held by the modal lifecycle.
#[derive(Debug)]
pub(crate) struct Settle {
    tx: Option<oneshot::Sender<Outcome>>,
}

impl Settle {
    pub(crate) fn resolve(&mut self) -> bool {
        self.send(Ok(()))
    }

    pub(crate) fn reject(&mut self) -> bool {
        self.send(Err(Rejected))
    }

    /// Returns `false` if the result was already settled.
    fn send(&mut self, outcome: Outcome) -> bool {
        let Some(tx) = self.tx.take() else {
            return false;
        };
        if tx.send(outcome).is_err() {
            tracing::trace!("pending result dropped before settlement");
        }
        true
    }
}

/// Eventual outcome of a modal: `Ok(())` when confirmed, `Err(Rejected)`
/// when cancelled.
#[derive(Debug)]
#[must_use = "a pending result reports nothing unless it is awaited or inspected"]
pub struct PendingResult {
    rx: oneshot::Receiver<Outcome>,
    settled: Option<Outcome>,
    abandoned: bool,
}

impl PendingResult {
    /// Checks the outcome without waiting.
    pub fn settlement(&mut self) -> Settlement {
        self.refresh();
        match self.settled {
            Some(Ok(())) => Settlement::Resolved,
            Some(Err(Rejected)) => Settlement::Rejected,
            None => Settlement::Pending,
        }
    }

    /// Whether the modal was torn down without ever settling this result.
    pub fn is_abandoned(&mut self) -> bool {
        self.refresh();
        self.abandoned
    }

    fn refresh(&mut self) {
        if self.settled.is_some() || self.abandoned {
            return;
        }
        match self.rx.try_recv() {
            Ok(outcome) => self.settled = Some(outcome),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => self.abandoned = true,
        }
    }
}

impl Future for PendingResult {
    type Output = Outcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let Some(outcome) = this.settled {
            return Poll::Ready(outcome);
        }
        if this.abandoned {
            return Poll::Pending;
        }
        match ready!(Pin::new(&mut this.rx).poll(cx)) {
            Ok(outcome) => {
                this.settled = Some(outcome);
                Poll::Ready(outcome)
            }
            Err(_) => {
                this.abandoned = true;
                Poll::Pending
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    #[test]
    fn fresh_result_is_pending() {
        let (_settle, mut pending) = channel();
        assert_eq!(pending.settlement(), Settlement::Pending);
        assert!(!pending.is_abandoned());
    }

    #[test]
    fn resolve_settles_once() {
        let (mut settle, mut pending) = channel();
        assert!(settle.resolve());
        assert!(!settle.reject());

        assert_eq!(pending.settlement(), Settlement::Resolved);
        assert_eq!(pending.now_or_never(), Some(Ok(())));
    }

    #[test]
    fn reject_yields_rejected() {
        let (mut settle, pending) = channel();
        settle.reject();
        assert_eq!(pending.now_or_never(), Some(Err(Rejected)));
    }

    #[test]
    fn dropped_sender_leaves_result_pending() {
        let (settle, mut pending) = channel();
        drop(settle);

        assert_eq!(pending.settlement(), Settlement::Pending);
        assert!(pending.is_abandoned());
        assert_eq!(pending.now_or_never(), None);
    }

    #[test]
    fn settlement_survives_repeated_checks() {
        let (mut settle, mut pending) = channel();
        settle.reject();
        assert_eq!(pending.settlement(), Settlement::Rejected);
        assert_eq!(pending.settlement(), Settlement::Rejected);
    }

    #[test]
    fn settling_after_receiver_dropped_is_harmless() {
        let (mut settle, pending) = channel();
        drop(pending);
        assert!(settle.resolve());
    }
}
