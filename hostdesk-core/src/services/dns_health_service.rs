//! 模拟 DNS 健康检查服务
//!
//! No resolver is queried: a domain is "verified" when the CRM links it to a
//! hosting package or server with a known IP. Each check runs as its own tokio
//! task so a slow check never holds up another domain.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::error::{CoreError, CoreResult};
use crate::services::{EntityStore, LinkageResolver};
use crate::types::{CheckState, DnsHealthRow, Domain, EntityKind, VerificationResult};

/// 单个域名的检查槽位
struct CheckSlot {
    /// Unique per started check; a task only reports if it still matches
    generation: u64,
    state: watch::Sender<CheckState>,
    task: Option<JoinHandle<()>>,
}

impl CheckSlot {
    fn new() -> Self {
        Self {
            generation: 0,
            state: watch::Sender::new(CheckState::Idle),
            task: None,
        }
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

type Slots = Arc<Mutex<HashMap<String, CheckSlot>>>;

/// DNS 健康检查服务
pub struct DnsHealthService {
    store: Arc<EntityStore>,
    latency: Duration,
    slots: Slots,
    next_generation: AtomicU64,
}

impl DnsHealthService {
    #[must_use]
    pub fn new(store: Arc<EntityStore>) -> Self {
        let latency = store.ctx().config().dns_check_latency();
        Self {
            store,
            latency,
            slots: Arc::new(Mutex::new(HashMap::new())),
            next_generation: AtomicU64::new(1),
        }
    }

    /// Start a check with the configured latency.
    pub async fn start_check(&self, domain_id: &str) -> CoreResult<()> {
        self.start_check_after(domain_id, self.latency).await
    }

    /// Start a check that completes after `latency`.
    ///
    /// Linkage is resolved now, against the current store. A check already in
    /// flight for the same domain is superseded.
    pub async fn start_check_after(&self, domain_id: &str, latency: Duration) -> CoreResult<()> {
        let result = self.resolve(domain_id).await?;

        let mut slots = self.slots.lock().await;
        let slot = slots
            .entry(domain_id.to_string())
            .or_insert_with(CheckSlot::new);
        slot.abort_task();
        slot.generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        slot.state.send_replace(CheckState::InFlight);

        let generation = slot.generation;
        let slots_handle = Arc::clone(&self.slots);
        let id = domain_id.to_string();
        slot.task = Some(tokio::spawn(async move {
            tokio::time::sleep(latency).await;

            let mut slots = slots_handle.lock().await;
            if let Some(slot) = slots.get_mut(&id) {
                if slot.generation == generation {
                    log::debug!("DNS check for {id} finished: {}", result.message());
                    slot.state.send_replace(CheckState::Done { result });
                    slot.task = None;
                }
            }
        }));

        log::debug!("DNS check for {domain_id} started (generation {generation})");
        Ok(())
    }

    /// Run a check and wait for it.
    ///
    /// Returns `None` if the check was cancelled before it finished.
    pub async fn check_domain(&self, domain_id: &str) -> CoreResult<Option<VerificationResult>> {
        self.start_check(domain_id).await?;
        Ok(self.wait_for(domain_id).await)
    }

    /// Wait until the domain has no check in flight, then return its result.
    pub async fn wait_for(&self, domain_id: &str) -> Option<VerificationResult> {
        let mut rx = {
            let slots = self.slots.lock().await;
            slots.get(domain_id)?.state.subscribe()
        };

        let state = rx
            .wait_for(|state| !matches!(state, CheckState::InFlight))
            .await
            .ok()?;
        match &*state {
            CheckState::Done { result } => Some(result.clone()),
            _ => None,
        }
    }

    /// Abort an in-flight check; the domain goes back to idle and its slot is
    /// released.
    pub async fn cancel(&self, domain_id: &str) {
        let mut slots = self.slots.lock().await;
        let in_flight = slots
            .get(domain_id)
            .is_some_and(|slot| matches!(*slot.state.borrow(), CheckState::InFlight));
        if in_flight {
            if let Some(mut slot) = slots.remove(domain_id) {
                slot.abort_task();
                slot.state.send_replace(CheckState::Idle);
            }
            log::debug!("DNS check for {domain_id} cancelled");
        }
    }

    /// Drop all check state of a domain, e.g. after it was deleted.
    pub async fn forget(&self, domain_id: &str) {
        if let Some(mut slot) = self.slots.lock().await.remove(domain_id) {
            slot.abort_task();
            slot.state.send_replace(CheckState::Idle);
        }
    }

    /// Number of domains holding check state
    pub async fn tracked_count(&self) -> usize {
        self.slots.lock().await.len()
    }

    pub async fn status(&self, domain_id: &str) -> CheckState {
        let slots = self.slots.lock().await;
        slots
            .get(domain_id)
            .map(|slot| slot.state.borrow().clone())
            .unwrap_or_default()
    }

    pub async fn is_checking(&self, domain_id: &str) -> bool {
        matches!(self.status(domain_id).await, CheckState::InFlight)
    }

    /// Result of the last completed check, if any
    pub async fn result_for(&self, domain_id: &str) -> Option<VerificationResult> {
        match self.status(domain_id).await {
            CheckState::Done { result } => Some(result),
            _ => None,
        }
    }

    /// One row per domain with its resolved hosting, server and expected IP.
    ///
    /// `is_match` only says the CRM links the domain somewhere; the stored
    /// `a_record` is not compared.
    pub async fn dns_health_table(&self) -> Vec<DnsHealthRow> {
        let snapshot = self.store.snapshot().await;
        let resolver = LinkageResolver::from_collections(&snapshot);

        snapshot
            .domains
            .iter()
            .map(|domain| health_row(&resolver, domain))
            .collect()
    }

    async fn resolve(&self, domain_id: &str) -> CoreResult<VerificationResult> {
        let snapshot = self.store.snapshot().await;
        let domain = snapshot
            .domains
            .iter()
            .find(|d| d.id == domain_id)
            .ok_or_else(|| CoreError::not_found(EntityKind::Domain, domain_id))?;

        let resolver = LinkageResolver::from_collections(&snapshot);
        Ok(VerificationResult::from_expected_ip(
            resolver.expected_ip_for(domain),
        ))
    }
}

fn health_row(resolver: &LinkageResolver<'_>, domain: &Domain) -> DnsHealthRow {
    let expected_ip = resolver.expected_ip_for(domain).map(str::to_string);
    DnsHealthRow {
        domain: domain.clone(),
        hosting: resolver.resolve_hosting_for(domain).cloned(),
        vps: resolver.resolve_vps_for(domain).cloned(),
        is_match: expected_ip.is_some(),
        expected_ip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_loaded_store, domain, hosting, vps};

    async fn service() -> DnsHealthService {
        let mut linked = domain("d1", "techsolutions.vn", "2025-01-01");
        linked.hosting_id = Some("h1".to_string());
        let (store, _) = create_loaded_store(
            &[],
            &[
                linked,
                domain("d2", "floraldesign.com", "2025-01-01"),
                domain("d3", "unused-project.net", "2025-01-01"),
            ],
            &[
                hosting("h1", "Business", "", Some("v1")),
                hosting("h2", "WordPress", "floraldesign.com", Some("v2")),
            ],
            &[
                vps("v1", "SG-01", "103.100.200.50"),
                vps("v2", "US-05", "45.76.12.34"),
            ],
        )
        .await;
        DnsHealthService::new(store)
    }

    #[tokio::test(start_paused = true)]
    async fn check_reports_expected_ip_after_latency() {
        let service = service().await;

        let result = service.check_domain("d1").await.unwrap().unwrap();
        assert_eq!(result.message(), "Verified: points to IP 103.100.200.50");

        let unlinked = service.check_domain("d3").await.unwrap().unwrap();
        assert_eq!(unlinked, VerificationResult::Unlinked);
        assert_eq!(unlinked.message(), "Not linked to any hosting.");
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_checks_do_not_interfere() {
        let service = service().await;

        service
            .start_check_after("d1", Duration::from_millis(800))
            .await
            .unwrap();
        service
            .start_check_after("d2", Duration::from_millis(100))
            .await
            .unwrap();
        assert!(service.is_checking("d1").await);
        assert!(service.is_checking("d2").await);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(service.is_checking("d1").await);
        assert_eq!(
            service.result_for("d2").await,
            Some(VerificationResult::Verified {
                ip: "45.76.12.34".to_string()
            })
        );

        let d1 = service.wait_for("d1").await.unwrap();
        assert_eq!(
            d1,
            VerificationResult::Verified {
                ip: "103.100.200.50".to_string()
            }
        );
        assert_eq!(
            service.result_for("d2").await.unwrap().message(),
            "Verified: points to IP 45.76.12.34"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn newer_check_supersedes_older_one() {
        let (store, _) = create_loaded_store(
            &[],
            &[domain("d1", "a.com", "2025-01-01")],
            &[hosting("h1", "Business", "", Some("v1"))],
            &[vps("v1", "SG-01", "10.0.0.1")],
        )
        .await;
        let service = DnsHealthService::new(Arc::clone(&store));

        service
            .start_check_after("d1", Duration::from_millis(500))
            .await
            .unwrap();

        let mut linked = store.get::<Domain>("d1").await.unwrap();
        linked.hosting_id = Some("h1".to_string());
        store.update(linked).await.unwrap();

        service
            .start_check_after("d1", Duration::from_millis(100))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(
            service.result_for("d1").await,
            Some(VerificationResult::Verified {
                ip: "10.0.0.1".to_string()
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_returns_domain_to_idle() {
        let service = service().await;

        service.start_check("d1").await.unwrap();
        service.cancel("d1").await;

        assert_eq!(service.status("d1").await, CheckState::Idle);
        assert!(service.wait_for("d1").await.is_none());

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(service.status("d1").await, CheckState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_check_domain_yields_none() {
        let service = Arc::new(service().await);

        let waiter = {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.check_domain("d2").await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        service.cancel("d2").await;

        assert_eq!(waiter.await.unwrap().unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_and_forget_release_slots() {
        let service = service().await;

        service.start_check("d1").await.unwrap();
        service.cancel("d1").await;
        assert_eq!(service.tracked_count().await, 0);

        service.check_domain("d2").await.unwrap();
        assert_eq!(service.tracked_count().await, 1);
        // a finished check keeps its result
        service.cancel("d2").await;
        assert!(service.result_for("d2").await.is_some());

        service.forget("d2").await;
        assert_eq!(service.tracked_count().await, 0);
        assert_eq!(service.status("d2").await, CheckState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn check_started_after_cancel_is_not_overwritten() {
        let service = service().await;

        service
            .start_check_after("d1", Duration::from_millis(100))
            .await
            .unwrap();
        service.cancel("d1").await;
        service
            .start_check_after("d1", Duration::from_millis(500))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(service.is_checking("d1").await);
        assert!(service.wait_for("d1").await.is_some());
    }

    #[tokio::test]
    async fn unknown_domain_is_not_found() {
        let service = service().await;

        let err = service.check_domain("missing").await.unwrap_err();
        assert_eq!(err, CoreError::not_found(EntityKind::Domain, "missing"));
        assert_eq!(service.status("missing").await, CheckState::Idle);
    }

    #[tokio::test]
    async fn health_table_flags_linked_domains() {
        let service = service().await;

        let rows = service.dns_health_table().await;
        let summary: Vec<(&str, Option<&str>, bool)> = rows
            .iter()
            .map(|r| (r.domain.id.as_str(), r.expected_ip.as_deref(), r.is_match))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("d1", Some("103.100.200.50"), true),
                ("d2", Some("45.76.12.34"), true),
                ("d3", None, false),
            ]
        );
        assert_eq!(rows[1].hosting.as_ref().unwrap().id, "h2");
        assert_eq!(rows[1].vps.as_ref().unwrap().id, "v2");
    }
}
