//! Platform-agnostic application bootstrap for HostDesk CRM.
//!
//! Provides `AppState` (service container) and `AppStateBuilder` (adapter injection).

pub mod adapters;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hostdesk_core::error::{CoreError, CoreResult};
use hostdesk_core::services::{
    DnsHealthService, EntityStore, ExpiryService, LinkageResolver, OverviewService,
    ServiceContext,
};
use hostdesk_core::traits::{EntityRepository, InMemorySessionGate, SessionGate};
use hostdesk_core::types::{
    Customer, Domain, EngineConfig, HostingPackage, InfrastructureTopology, Session, Vps,
};

/// Platform-agnostic application state.
///
/// Holds the entity store and every service built on it. Every frontend
/// constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds all storage adapters)
    pub ctx: Arc<ServiceContext>,
    /// Authoritative in-memory collections
    pub store: Arc<EntityStore>,
    /// Expiry feed and outage alerts
    pub expiry_service: ExpiryService,
    /// Simulated DNS checks
    pub dns_health_service: DnsHealthService,
    /// Dashboard counters and list filters
    pub overview_service: OverviewService,
    /// Session gate consulted before any view is rendered
    pub session_gate: Arc<dyn SessionGate>,
    /// Whether the initial load has completed
    pub load_completed: AtomicBool,
}

impl AppState {
    /// Run the startup sequence: fetch all four collections.
    ///
    /// On failure the store stays empty and the error is returned for the
    /// presentation layer to report; `load_completed` stays `false`.
    pub async fn run_startup(&self) -> CoreResult<()> {
        match self.store.load_all().await {
            Ok(()) => {
                self.load_completed.store(true, Ordering::SeqCst);
                Ok(())
            }
            Err(e) => {
                log::error!("Initial load failed: {e}");
                Err(e)
            }
        }
    }

    /// The active session, or `Unauthenticated` (caller should redirect to sign-in).
    pub fn require_session(&self) -> CoreResult<Session> {
        self.session_gate
            .current_session()
            .ok_or(CoreError::Unauthenticated)
    }

    /// Delete a domain and release its DNS check state.
    pub async fn delete_domain(&self, domain_id: &str) -> CoreResult<()> {
        self.store.delete::<Domain>(domain_id).await?;
        self.dns_health_service.forget(domain_id).await;
        Ok(())
    }

    /// Hosting -> domains and server -> packages/domains view of the current data.
    pub async fn topology(&self) -> InfrastructureTopology {
        let snapshot = self.store.snapshot().await;
        LinkageResolver::from_collections(&snapshot).topology()
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `customer_repository`
/// - `domain_repository`
/// - `hosting_repository`
/// - `vps_repository`
///
/// `repositories` sets all four from one store (e.g. `SqliteStore`).
///
/// # Optional
/// - `config`: defaults to `EngineConfig::default()`
/// - `session_gate`: defaults to `InMemorySessionGate`
pub struct AppStateBuilder {
    customer_repository: Option<Arc<dyn EntityRepository<Customer>>>,
    domain_repository: Option<Arc<dyn EntityRepository<Domain>>>,
    hosting_repository: Option<Arc<dyn EntityRepository<HostingPackage>>>,
    vps_repository: Option<Arc<dyn EntityRepository<Vps>>>,
    config: Option<EngineConfig>,
    session_gate: Option<Arc<dyn SessionGate>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            customer_repository: None,
            domain_repository: None,
            hosting_repository: None,
            vps_repository: None,
            config: None,
            session_gate: None,
        }
    }

    #[must_use]
    pub fn customer_repository(mut self, repo: Arc<dyn EntityRepository<Customer>>) -> Self {
        self.customer_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn domain_repository(mut self, repo: Arc<dyn EntityRepository<Domain>>) -> Self {
        self.domain_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn hosting_repository(mut self, repo: Arc<dyn EntityRepository<HostingPackage>>) -> Self {
        self.hosting_repository = Some(repo);
        self
    }

    #[must_use]
    pub fn vps_repository(mut self, repo: Arc<dyn EntityRepository<Vps>>) -> Self {
        self.vps_repository = Some(repo);
        self
    }

    /// Use one store for all four entity kinds.
    #[must_use]
    pub fn repositories<S>(self, store: Arc<S>) -> Self
    where
        S: EntityRepository<Customer>
            + EntityRepository<Domain>
            + EntityRepository<HostingPackage>
            + EntityRepository<Vps>
            + 'static,
    {
        self.customer_repository(store.clone())
            .domain_repository(store.clone())
            .hosting_repository(store.clone())
            .vps_repository(store)
    }

    #[must_use]
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn session_gate(mut self, gate: Arc<dyn SessionGate>) -> Self {
        self.session_gate = Some(gate);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing
    /// or the config is invalid.
    pub fn build(self) -> CoreResult<AppState> {
        let customer_repository = self.customer_repository.ok_or_else(|| {
            CoreError::ValidationError("customer_repository is required".to_string())
        })?;
        let domain_repository = self.domain_repository.ok_or_else(|| {
            CoreError::ValidationError("domain_repository is required".to_string())
        })?;
        let hosting_repository = self.hosting_repository.ok_or_else(|| {
            CoreError::ValidationError("hosting_repository is required".to_string())
        })?;
        let vps_repository = self.vps_repository.ok_or_else(|| {
            CoreError::ValidationError("vps_repository is required".to_string())
        })?;
        let config = self.config.unwrap_or_default().validated()?;
        let session_gate = self
            .session_gate
            .unwrap_or_else(|| Arc::new(InMemorySessionGate::new()));

        let ctx = Arc::new(ServiceContext::new(
            customer_repository,
            domain_repository,
            hosting_repository,
            vps_repository,
            config,
        ));

        let store = Arc::new(EntityStore::new(Arc::clone(&ctx)));
        let expiry_service = ExpiryService::new(Arc::clone(&store));
        let dns_health_service = DnsHealthService::new(Arc::clone(&store));
        let overview_service = OverviewService::new(Arc::clone(&store));

        Ok(AppState {
            ctx,
            store,
            expiry_service,
            dns_health_service,
            overview_service,
            session_gate,
            load_completed: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
