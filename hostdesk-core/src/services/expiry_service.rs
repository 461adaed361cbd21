//! Expiry feed and outage alerts

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::services::EntityStore;
use crate::types::{
    Domain, EngineConfig, ExpiryDashboard, ExpiryFeed, ExpiryItem, ExpiryKind, HostingPackage,
    OfflineAlert, ServerStatus, Urgency, Vps,
};
use crate::utils::datetime::{days_remaining, parse_date};

/// Expiry service
pub struct ExpiryService {
    store: Arc<EntityStore>,
}

impl ExpiryService {
    #[must_use]
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    fn config(&self) -> &EngineConfig {
        self.store.ctx().config()
    }

    /// Feed over the current collections, evaluated at `now`.
    pub async fn feed_at(&self, now: DateTime<Utc>) -> ExpiryFeed {
        let snapshot = self.store.snapshot().await;
        Self::compute_feed(
            self.config(),
            &snapshot.domains,
            &snapshot.hostings,
            &snapshot.vps,
            now,
        )
    }

    /// Feed evaluated at the current wall-clock time
    pub async fn feed(&self) -> ExpiryFeed {
        self.feed_at(Utc::now()).await
    }

    /// Offline alerts plus one page of the feed.
    pub async fn dashboard(&self, page: u32, now: DateTime<Utc>) -> ExpiryDashboard {
        let snapshot = self.store.snapshot().await;
        let feed = Self::compute_feed(
            self.config(),
            &snapshot.domains,
            &snapshot.hostings,
            &snapshot.vps,
            now,
        );

        ExpiryDashboard {
            offline_alerts: Self::offline_alerts(&snapshot.vps),
            feed: feed.page(page, self.config().page_size),
        }
    }

    /// Builds the unified feed.
    ///
    /// Items are gathered domains first, then hosting packages, then servers,
    /// filtered to the configured window and stably sorted by days remaining.
    /// Entries with an unparseable expiry date are skipped and counted.
    #[must_use]
    pub fn compute_feed(
        config: &EngineConfig,
        domains: &[Domain],
        hostings: &[HostingPackage],
        servers: &[Vps],
        now: DateTime<Utc>,
    ) -> ExpiryFeed {
        let candidates = domains
            .iter()
            .map(|d| (&d.id, &d.domain_name, ExpiryKind::Domain, &d.expiry_date))
            .chain(
                hostings
                    .iter()
                    .map(|h| (&h.id, &h.name, ExpiryKind::Hosting, &h.expiry_date)),
            )
            .chain(
                servers
                    .iter()
                    .map(|v| (&v.id, &v.name, ExpiryKind::Vps, &v.expiry_date)),
            );

        let mut feed = ExpiryFeed::default();
        for (id, name, kind, expiry_date) in candidates {
            let expiry = match parse_date("expiryDate", expiry_date) {
                Ok(expiry) => expiry,
                Err(e) => {
                    log::warn!("Skipping {} {name} ({id}) in expiry feed: {e}", kind.label());
                    feed.skipped += 1;
                    continue;
                }
            };

            let days = days_remaining(expiry, now);
            if !config.in_window(days) {
                continue;
            }

            feed.items.push(ExpiryItem {
                id: id.clone(),
                name: name.clone(),
                kind,
                expiry_date: expiry_date.clone(),
                days_remaining: days,
                urgency: Urgency::from_days(days),
            });
        }

        // sort_by_key is stable: ties keep gathering order
        feed.items.sort_by_key(|item| item.days_remaining);
        feed
    }

    /// One alert per offline server, in collection order. Independent of the feed window.
    #[must_use]
    pub fn offline_alerts(servers: &[Vps]) -> Vec<OfflineAlert> {
        servers
            .iter()
            .filter(|vps| vps.status == ServerStatus::Offline)
            .map(OfflineAlert::from)
            .collect()
    }
}
