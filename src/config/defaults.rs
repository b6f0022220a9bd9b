// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-close duration and stacking offset
//! - **Layer**: Floor for layering tokens
//! - **Diagnostics**: Lifecycle event buffer size

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays visible before closing itself (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3_000;

/// Maximum auto-close duration (in milliseconds). Zero means "sticky".
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Default gap between a toast and its predecessor (in logical pixels).
pub const DEFAULT_TOAST_OFFSET: f32 = 20.0;

/// Minimum stacking gap.
pub const MIN_TOAST_OFFSET: f32 = 0.0;

/// Maximum stacking gap.
pub const MAX_TOAST_OFFSET: f32 = 200.0;

// ==========================================================================
// Layer Defaults
// ==========================================================================

/// Lowest layer value handed out when the host has no layered elements yet.
pub const DEFAULT_LAYER_BASE: u64 = 2_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4_096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);

    assert!(MIN_TOAST_OFFSET >= 0.0);
    assert!(MAX_TOAST_OFFSET > MIN_TOAST_OFFSET);
    assert!(DEFAULT_TOAST_OFFSET >= MIN_TOAST_OFFSET);
    assert!(DEFAULT_TOAST_OFFSET <= MAX_TOAST_OFFSET);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_defaults_are_valid() {
        assert_eq!(DEFAULT_TOAST_DURATION_MS, 3_000);
        assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
        assert!(DEFAULT_TOAST_OFFSET >= MIN_TOAST_OFFSET);
        assert!(DEFAULT_TOAST_OFFSET <= MAX_TOAST_OFFSET);
    }

    #[test]
    fn diagnostics_defaults_are_valid() {
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
