//! Engine configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Tunables of the expiry feed and the simulated DNS check.
///
/// Missing fields fall back to the defaults, so a partial JSON object is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Expiry feed page size
    pub page_size: u32,
    /// Items are kept while `days_remaining < window_ahead_days`
    pub window_ahead_days: i64,
    /// Items are kept while `days_remaining > -window_behind_days`
    pub window_behind_days: i64,
    /// Artificial latency of the DNS check
    pub dns_check_latency_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            window_ahead_days: 90,
            window_behind_days: 30,
            dns_check_latency_ms: 800,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn dns_check_latency(&self) -> Duration {
        Duration::from_millis(self.dns_check_latency_ms)
    }

    /// Whether `days_remaining` falls inside the open window `(-behind, ahead)`.
    #[must_use]
    pub fn in_window(&self, days_remaining: i64) -> bool {
        days_remaining < self.window_ahead_days
            && days_remaining > self.window_behind_days.saturating_neg()
    }

    pub fn validated(self) -> CoreResult<Self> {
        if self.page_size == 0 {
            return Err(CoreError::ValidationError(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.window_ahead_days < 0 || self.window_behind_days < 0 {
            return Err(CoreError::ValidationError(
                "Expiry window bounds cannot be negative".to_string(),
            ));
        }
        Ok(self)
    }
}
