//! Dashboard counters, customer portfolios and list filters

use std::collections::HashMap;
use std::sync::Arc;

use crate::services::EntityStore;
use crate::types::{
    CustomerPortfolio, Domain, HostingPackage, OverviewStats, ServerStatus, Status,
};

/// Overview service
pub struct OverviewService {
    store: Arc<EntityStore>,
}

impl OverviewService {
    #[must_use]
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    pub async fn stats(&self) -> OverviewStats {
        let snapshot = self.store.snapshot().await;
        OverviewStats {
            customer_count: snapshot.customers.len(),
            active_domain_count: snapshot
                .domains
                .iter()
                .filter(|d| d.status == Status::Active)
                .count(),
            hosting_count: snapshot.hostings.len(),
            vps_count: snapshot.vps.len(),
            offline_vps_count: snapshot
                .vps
                .iter()
                .filter(|v| v.status == ServerStatus::Offline)
                .count(),
        }
    }

    /// Every customer with the number of domains and packages assigned to them.
    pub async fn customer_portfolios(&self) -> Vec<CustomerPortfolio> {
        let snapshot = self.store.snapshot().await;

        let mut domain_counts: HashMap<&str, usize> = HashMap::new();
        for domain in &snapshot.domains {
            *domain_counts.entry(domain.customer_id.as_str()).or_default() += 1;
        }
        let mut hosting_counts: HashMap<&str, usize> = HashMap::new();
        for hosting in &snapshot.hostings {
            if let Some(customer_id) = hosting.customer_id.as_deref() {
                *hosting_counts.entry(customer_id).or_default() += 1;
            }
        }

        snapshot
            .customers
            .iter()
            .map(|customer| CustomerPortfolio {
                customer: customer.clone(),
                domain_count: domain_counts
                    .get(customer.id.as_str())
                    .copied()
                    .unwrap_or(0),
                hosting_count: hosting_counts
                    .get(customer.id.as_str())
                    .copied()
                    .unwrap_or(0),
            })
            .collect()
    }

    /// Case-insensitive match on domain name or registrar.
    pub async fn search_domains(&self, query: &str) -> Vec<Domain> {
        let needle = query.trim().to_lowercase();
        self.store
            .list::<Domain>()
            .await
            .into_iter()
            .filter(|d| contains(&d.domain_name, &needle) || contains(&d.registrar, &needle))
            .collect()
    }

    /// Case-insensitive match on package name or primary domain.
    pub async fn search_hostings(&self, query: &str) -> Vec<HostingPackage> {
        let needle = query.trim().to_lowercase();
        self.store
            .list::<HostingPackage>()
            .await
            .into_iter()
            .filter(|h| contains(&h.name, &needle) || contains(&h.primary_domain, &needle))
            .collect()
    }

    /// `primary_domain` values claimed by more than one package, in first-seen order.
    ///
    /// Name-based linkage only ever picks the first of them.
    pub async fn duplicate_primary_domains(&self) -> Vec<String> {
        let hostings = self.store.list::<HostingPackage>().await;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for hosting in &hostings {
            let name = hosting.primary_domain.as_str();
            if name.is_empty() {
                continue;
            }
            let count = counts.entry(name).or_default();
            *count += 1;
            if *count == 2 {
                order.push(name.to_string());
            }
        }

        if !order.is_empty() {
            log::warn!("Primary domains shared by several packages: {}", order.join(", "));
        }
        order
    }
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    lowercase_needle.is_empty() || haystack.to_lowercase().contains(lowercase_needle)
}
