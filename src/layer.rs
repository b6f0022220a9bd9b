// SPDX-License-Identifier: MPL-2.0
//! Layering tokens for overlays.
//!
//! Every overlay gets a token strictly greater than all tokens handed out
//! before it, so a later overlay always renders above an earlier one. The
//! counter is seeded lazily from the highest layer already present in the
//! host, so overlays never collide with layered elements the application
//! created on its own. Once the token space is used up, allocation fails
//! instead of wrapping around.

use crate::error::MountError;
use crate::host::Host;
use std::cell::Cell;
use std::fmt;

/// Stacking order of an overlay. Higher tokens render on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerToken(u64);

impl LayerToken {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LayerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing [`LayerToken`]s.
#[derive(Debug)]
pub struct LayerAllocator {
    base: u64,
    current: Cell<Option<u64>>,
}

impl LayerAllocator {
    /// Creates an allocator whose first token is above both `base` and
    /// anything already layered in the host.
    #[must_use]
    pub fn new(base: u64) -> Self {
        Self {
            base,
            current: Cell::new(None),
        }
    }

    /// Returns the next token.
    ///
    /// The host is only consulted until the first token is issued.
    pub fn next(&self, host: &dyn Host) -> Result<LayerToken, MountError> {
        let current = self.current.get().unwrap_or_else(|| {
            host.highest_layer()
                .map_or(self.base, |layer| layer.value().max(self.base))
        });
        let next = current.checked_add(1).ok_or(MountError::LayerExhausted)?;
        self.current.set(Some(next));
        Ok(LayerToken(next))
    }

    /// The most recently issued token, if any.
    #[must_use]
    pub fn current(&self) -> Option<LayerToken> {
        self.current.get().map(LayerToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessHost;

    #[test]
    fn tokens_are_strictly_increasing() {
        let host = HeadlessHost::new();
        let allocator = LayerAllocator::new(2000);

        let tokens: Vec<_> = (0..5)
            .map(|_| allocator.next(&host).expect("token space left"))
            .collect();
        assert!(tokens.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(tokens[0], LayerToken::new(2001));
        assert_eq!(allocator.current(), Some(LayerToken::new(2005)));
    }

    #[test]
    fn first_token_sits_above_existing_host_layers() {
        let host = HeadlessHost::with_existing_layer(LayerToken::new(9000));
        let allocator = LayerAllocator::new(2000);

        assert_eq!(allocator.next(&host), Ok(LayerToken::new(9001)));
    }

    #[test]
    fn host_at_top_of_range_exhausts_allocator() {
        let host = HeadlessHost::with_existing_layer(LayerToken::new(u64::MAX));
        let allocator = LayerAllocator::new(0);

        assert_eq!(allocator.next(&host), Err(MountError::LayerExhausted));
        assert_eq!(allocator.next(&host), Err(MountError::LayerExhausted));
        assert_eq!(allocator.current(), None);
    }

    #[test]
    fn last_token_is_issued_once() {
        let host = HeadlessHost::with_existing_layer(LayerToken::new(u64::MAX - 1));
        let allocator = LayerAllocator::new(0);

        assert_eq!(allocator.next(&host), Ok(LayerToken::new(u64::MAX)));
        assert_eq!(allocator.next(&host), Err(MountError::LayerExhausted));
        assert_eq!(allocator.current(), Some(LayerToken::new(u64::MAX)));
    }

    #[test]
    fn base_wins_over_lower_host_layers() {
        let host = HeadlessHost::with_existing_layer(LayerToken::new(10));
        let allocator = LayerAllocator::new(2000);

        assert_eq!(allocator.next(&host), Ok(LayerToken::new(2001)));
    }

    #[test]
    fn host_is_read_only_once() {
        let host = HeadlessHost::new();
        let allocator = LayerAllocator::new(0);
        assert_eq!(allocator.next(&host), Ok(LayerToken::new(1)));

        // A later, higher host layer does not reseed the counter.
        let raised = HeadlessHost::with_existing_layer(LayerToken::new(500));
        assert_eq!(allocator.next(&raised), Ok(LayerToken::new(2)));
    }

    #[test]
    fn fresh_allocator_has_no_current_token() {
        assert_eq!(LayerAllocator::new(2000).current(), None);
    }
}
