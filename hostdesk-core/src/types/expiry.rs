//! Expiry feed type definitions

use serde::{Deserialize, Serialize};

use super::response::{PaginatedResponse, PaginationParams};
use super::vps::Vps;

/// Which collection an expiry item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryKind {
    Domain,
    Hosting,
    Vps,
}

impl ExpiryKind {
    /// Badge label shown next to the item name
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Hosting => "Hosting",
            Self::Vps => "VPS",
        }
    }
}

/// Colour band of an expiry item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// 7 days or less, lapsed items included
    Critical,
    /// 30 days or less
    Warning,
    Notice,
}

impl Urgency {
    #[must_use]
    pub fn from_days(days_remaining: i64) -> Self {
        if days_remaining <= 7 {
            Self::Critical
        } else if days_remaining <= 30 {
            Self::Warning
        } else {
            Self::Notice
        }
    }
}

/// One entry of the unified expiry feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryItem {
    pub id: String,
    /// Domain name, package name or server name
    pub name: String,
    pub kind: ExpiryKind,
    pub expiry_date: String,
    /// Negative once the item has lapsed
    pub days_remaining: i64,
    pub urgency: Urgency,
}

/// The whole sorted feed; pages are cut on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryFeed {
    pub items: Vec<ExpiryItem>,
    /// Items dropped because their expiry date could not be parsed
    pub skipped: usize,
}

impl ExpiryFeed {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn total_pages(&self, page_size: u32) -> u32 {
        let total = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        total.div_ceil(page_size.max(1))
    }

    /// 1-indexed page of the feed
    #[must_use]
    pub fn page(&self, page: u32, page_size: u32) -> PaginatedResponse<ExpiryItem> {
        PaginatedResponse::from_slice(&self.items, PaginationParams::new(page, page_size))
    }
}

/// An outage alert for a server reported as offline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfflineAlert {
    pub vps_id: String,
    pub name: String,
    pub ip_address: String,
    pub provider: String,
}

impl From<&Vps> for OfflineAlert {
    fn from(vps: &Vps) -> Self {
        Self {
            vps_id: vps.id.clone(),
            name: vps.name.clone(),
            ip_address: vps.ip_address.clone(),
            provider: vps.provider.clone(),
        }
    }
}

/// Dashboard alert panel: outages first, then one page of the expiry feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryDashboard {
    pub offline_alerts: Vec<OfflineAlert>,
    pub feed: PaginatedResponse<ExpiryItem>,
}
