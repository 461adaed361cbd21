//! Dashboard statistics types

use serde::{Deserialize, Serialize};

use super::customer::Customer;

/// Headline counters of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub customer_count: usize,
    /// Domains whose status is `Active`
    pub active_domain_count: usize,
    pub hosting_count: usize,
    pub vps_count: usize,
    pub offline_vps_count: usize,
}

/// A customer with the number of services they own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPortfolio {
    pub customer: Customer,
    pub domain_count: usize,
    pub hosting_count: usize,
}
