// SPDX-License-Identifier: MPL-2.0
//! Caller-facing toast configuration.
//!
//! A [`ToastConfig`] is what callers hand to `Overlays::create`. Values it
//! leaves unset are filled from [`ToastSettings`] before the toast body is
//! built.

use crate::config::{ToastSettings, MAX_TOAST_DURATION_MS, MAX_TOAST_OFFSET, MIN_TOAST_OFFSET};
use iced_core::Color;
use std::time::Duration;

mod palette {
    use iced_core::Color;

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Severity level determines the accent color and default auto-close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red, stays until dismissed).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-close delay for this severity given the configured default.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_close(&self, default: ToastDuration) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info | Severity::Warning => default.as_duration(),
            Severity::Error => None,
        }
    }
}

/// Auto-close delay in milliseconds, clamped to the configured maximum.
///
/// Zero means the toast stays until it is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDuration(u64);

impl ToastDuration {
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.min(MAX_TOAST_DURATION_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        (self.0 > 0).then(|| Duration::from_millis(self.0))
    }
}

/// Options for a single toast.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastConfig {
    pub message: String,
    pub severity: Severity,
    /// Overrides the auto-close delay. `Duration::ZERO` keeps the toast open.
    pub duration: Option<Duration>,
    /// Overrides the gap to the previous toast.
    pub offset: Option<f32>,
    /// Whether the body shows a dismiss button.
    pub closable: bool,
}

impl ToastConfig {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            ..Self::default()
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the toast open until it is dismissed.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.with_duration(Duration::ZERO)
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Effective auto-close delay, `None` meaning sticky.
    #[must_use]
    pub fn resolved_duration(&self, settings: &ToastSettings) -> Option<Duration> {
        match self.duration {
            Some(duration) if duration.is_zero() => None,
            Some(duration) => Some(duration),
            None => self
                .severity
                .auto_close(ToastDuration::new(settings.duration_ms)),
        }
    }

    /// Effective stacking gap.
    #[must_use]
    pub fn resolved_offset(&self, settings: &ToastSettings) -> f32 {
        self.offset
            .unwrap_or(settings.offset)
            .clamp(MIN_TOAST_OFFSET, MAX_TOAST_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TOAST_DURATION_MS;

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_close() {
        assert!(Severity::Error
            .auto_close(ToastDuration::new(DEFAULT_TOAST_DURATION_MS))
            .is_none());
    }

    #[test]
    fn unset_duration_falls_back_to_settings() {
        let settings = ToastSettings {
            duration_ms: 1_200,
            ..ToastSettings::default()
        };
        let config = ToastConfig::info("saved");
        assert_eq!(
            config.resolved_duration(&settings),
            Some(Duration::from_millis(1_200))
        );
    }

    #[test]
    fn explicit_duration_overrides_error_stickiness() {
        let config = ToastConfig::error("failed").with_duration(Duration::from_secs(2));
        assert_eq!(
            config.resolved_duration(&ToastSettings::default()),
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn zero_duration_means_sticky() {
        let config = ToastConfig::success("pinned").sticky();
        assert_eq!(config.resolved_duration(&ToastSettings::default()), None);

        let settings = ToastSettings {
            duration_ms: 0,
            ..ToastSettings::default()
        };
        assert_eq!(ToastConfig::info("x").resolved_duration(&settings), None);
    }

    #[test]
    fn toast_duration_clamps_to_maximum() {
        assert_eq!(ToastDuration::new(u64::MAX).value(), MAX_TOAST_DURATION_MS);
    }

    #[test]
    fn offset_is_clamped() {
        let settings = ToastSettings::default();
        assert_eq!(ToastConfig::info("x").with_offset(-5.0).resolved_offset(&settings), 0.0);
        assert_eq!(
            ToastConfig::info("x").with_offset(10_000.0).resolved_offset(&settings),
            MAX_TOAST_OFFSET
        );
        assert_eq!(ToastConfig::info("x").resolved_offset(&settings), settings.offset);
    }

    #[test]
    fn builder_pattern_works() {
        let config = ToastConfig::warning("disk almost full")
            .closable(true)
            .with_offset(12.0);

        assert_eq!(config.severity, Severity::Warning);
        assert_eq!(config.message, "disk almost full");
        assert!(config.closable);
        assert_eq!(config.offset, Some(12.0));
    }
}
