#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `AppStateBuilder` and `AppState` startup sequence.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use hostdesk_app::{AppState, AppStateBuilder};
use hostdesk_core::error::{CoreError, CoreResult};
use hostdesk_core::traits::{
    Entity, EntityRepository, InMemoryEntityRepository, InMemorySessionGate,
};
use hostdesk_core::types::{
    CreateCustomerRequest, CreateDomainRequest, CreateHostingRequest, Customer, Domain,
    EngineConfig,
    HostingPackage, Session, Status, Vps,
};

// ===== Mock Implementations =====

/// Repository whose reads always fail, to exercise startup failure.
struct UnreachableRepository;

#[async_trait]
impl<E: Entity> EntityRepository<E> for UnreachableRepository {
    async fn find_all(&self) -> CoreResult<Vec<E>> {
        Err(CoreError::StorageError("backend unreachable".to_string()))
    }

    async fn create(&self, _request: &E::Request) -> CoreResult<E> {
        Err(CoreError::StorageError("backend unreachable".to_string()))
    }

    async fn update(&self, _entity: &E) -> CoreResult<E> {
        Err(CoreError::StorageError("backend unreachable".to_string()))
    }

    async fn delete(&self, _id: &str) -> CoreResult<()> {
        Err(CoreError::StorageError("backend unreachable".to_string()))
    }
}

fn in_memory_builder() -> AppStateBuilder {
    AppStateBuilder::new()
        .customer_repository(Arc::new(InMemoryEntityRepository::<Customer>::new()))
        .domain_repository(Arc::new(InMemoryEntityRepository::<Domain>::new()))
        .hosting_repository(Arc::new(InMemoryEntityRepository::<HostingPackage>::new()))
        .vps_repository(Arc::new(InMemoryEntityRepository::<Vps>::new()))
}

async fn started_state() -> AppState {
    let state = in_memory_builder().build().expect("failed to build AppState");
    state.run_startup().await.expect("startup failed");
    state
}

fn expect_validation_error(result: CoreResult<AppState>, field: &str) {
    match result {
        Err(CoreError::ValidationError(msg)) => assert!(msg.contains(field), "{msg}"),
        Err(other) => panic!("Expected ValidationError, got: {other:?}"),
        Ok(_) => panic!("Expected error for missing {field}"),
    }
}

// ===== Builder Tests =====

#[tokio::test]
async fn builder_with_all_required_adapters_succeeds() {
    let state = in_memory_builder().build();
    assert!(state.is_ok());
}

#[tokio::test]
async fn builder_missing_customer_repository_fails() {
    let result = AppStateBuilder::new()
        .domain_repository(Arc::new(InMemoryEntityRepository::<Domain>::new()))
        .hosting_repository(Arc::new(InMemoryEntityRepository::<HostingPackage>::new()))
        .vps_repository(Arc::new(InMemoryEntityRepository::<Vps>::new()))
        .build();
    expect_validation_error(result, "customer_repository");
}

#[tokio::test]
async fn builder_missing_vps_repository_fails() {
    let result = AppStateBuilder::new()
        .customer_repository(Arc::new(InMemoryEntityRepository::<Customer>::new()))
        .domain_repository(Arc::new(InMemoryEntityRepository::<Domain>::new()))
        .hosting_repository(Arc::new(InMemoryEntityRepository::<HostingPackage>::new()))
        .build();
    expect_validation_error(result, "vps_repository");
}

#[tokio::test]
async fn builder_rejects_invalid_config() {
    let result = in_memory_builder()
        .config(EngineConfig {
            page_size: 0,
            ..EngineConfig::default()
        })
        .build();
    expect_validation_error(result, "page_size");
}

#[tokio::test]
async fn builder_applies_config() {
    let state = in_memory_builder()
        .config(EngineConfig {
            page_size: 25,
            ..EngineConfig::default()
        })
        .build()
        .unwrap();
    assert_eq!(state.ctx.config().page_size, 25);
}

// ===== Startup Tests =====

#[tokio::test]
async fn startup_marks_load_completed() {
    let state = in_memory_builder().build().unwrap();
    assert!(!state.load_completed.load(Ordering::SeqCst));

    state.run_startup().await.unwrap();
    assert!(state.load_completed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn startup_failure_is_returned() {
    let unreachable = Arc::new(UnreachableRepository);
    let state = AppStateBuilder::new()
        .repositories(unreachable)
        .build()
        .unwrap();

    let result = state.run_startup().await;
    assert!(matches!(result, Err(CoreError::StorageError(_))));
    assert!(!state.load_completed.load(Ordering::SeqCst));
    assert!(state.store.snapshot().await.customers.is_empty());
}

#[tokio::test]
async fn failed_write_is_reported_and_state_untouched() {
    let unreachable = Arc::new(UnreachableRepository);
    let state = AppStateBuilder::new()
        .customer_repository(unreachable)
        .domain_repository(Arc::new(InMemoryEntityRepository::<Domain>::new()))
        .hosting_repository(Arc::new(InMemoryEntityRepository::<HostingPackage>::new()))
        .vps_repository(Arc::new(InMemoryEntityRepository::<Vps>::new()))
        .build()
        .unwrap();

    let result = state
        .store
        .create::<Customer>(CreateCustomerRequest {
            name: "Nguyen Van A".to_string(),
            ..CreateCustomerRequest::default()
        })
        .await;
    assert!(result.is_err());
    assert!(state.store.list::<Customer>().await.is_empty());
}

// ===== Session Gate Tests =====

#[tokio::test]
async fn require_session_without_sign_in_is_unauthenticated() {
    let state = started_state().await;
    assert_eq!(state.require_session(), Err(CoreError::Unauthenticated));
}

#[tokio::test]
async fn require_session_follows_the_gate() {
    let gate = Arc::new(InMemorySessionGate::new());
    let state = in_memory_builder()
        .session_gate(gate.clone())
        .build()
        .unwrap();

    gate.sign_in(Session {
        user_id: "u1".to_string(),
        email: "admin@hostdesk.local".to_string(),
    });
    assert_eq!(state.require_session().unwrap().user_id, "u1");

    gate.sign_out();
    assert!(state.require_session().is_err());
}

// ===== Wiring Tests =====

#[tokio::test]
async fn services_share_the_store() {
    let state = started_state().await;

    let customer = state
        .store
        .create::<Customer>(CreateCustomerRequest {
            name: "Floral Design".to_string(),
            status: Status::Active,
            ..CreateCustomerRequest::default()
        })
        .await
        .unwrap();
    let hosting = state
        .store
        .create::<HostingPackage>(CreateHostingRequest {
            name: "WordPress Starter".to_string(),
            primary_domain: "floraldesign.com".to_string(),
            customer_id: Some(customer.id.clone()),
            expiry_date: "2030-01-01".to_string(),
            ..CreateHostingRequest::default()
        })
        .await
        .unwrap();

    let stats = state.overview_service.stats().await;
    assert_eq!(stats.customer_count, 1);
    assert_eq!(stats.hosting_count, 1);

    let portfolios = state.overview_service.customer_portfolios().await;
    assert_eq!(portfolios[0].hosting_count, 1);

    let topology = state.topology().await;
    assert_eq!(topology.hostings[0].hosting.id, hosting.id);
    assert!(topology.hostings[0].domains.is_empty());
}

#[tokio::test(start_paused = true)]
async fn deleting_a_domain_releases_its_check() {
    let state = started_state().await;
    let domain = state
        .store
        .create::<Domain>(CreateDomainRequest {
            domain_name: "floraldesign.com".to_string(),
            expiry_date: "2030-01-01".to_string(),
            ..CreateDomainRequest::default()
        })
        .await
        .unwrap();

    state
        .dns_health_service
        .check_domain(&domain.id)
        .await
        .unwrap();
    assert_eq!(state.dns_health_service.tracked_count().await, 1);

    state.delete_domain(&domain.id).await.unwrap();
    assert_eq!(state.dns_health_service.tracked_count().await, 0);
    assert!(state.store.list::<Domain>().await.is_empty());
}
