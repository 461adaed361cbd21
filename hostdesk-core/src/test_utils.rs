//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::{EntityStore, ServiceContext};
use crate::traits::{Entity, EntityRepository, InMemoryEntityRepository};
use crate::types::{
    ControlPanel, Customer, Domain, EngineConfig, HostingPackage, HostingType, ServerStatus,
    Status, Vps, VpsSpecs,
};

// ===== MockRepository =====

/// In-memory repository whose writes can be made to fail.
pub struct MockRepository<E: Entity> {
    inner: InMemoryEntityRepository<E>,
    /// 如果 Some，所有写操作返回此错误
    write_error: RwLock<Option<String>>,
    /// 如果 Some，find_all 返回此错误
    read_error: RwLock<Option<String>>,
}

impl<E: Entity> MockRepository<E> {
    pub fn new(seed: &[E]) -> Self {
        Self {
            inner: InMemoryEntityRepository::seeded(seed),
            write_error: RwLock::new(None),
            read_error: RwLock::new(None),
        }
    }

    pub async fn set_write_error(&self, err: Option<&str>) {
        *self.write_error.write().await = err.map(str::to_string);
    }

    pub async fn set_read_error(&self, err: Option<&str>) {
        *self.read_error.write().await = err.map(str::to_string);
    }

    async fn check_write(&self) -> CoreResult<()> {
        match self.write_error.read().await.as_ref() {
            Some(msg) => Err(CoreError::StorageError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for MockRepository<E> {
    async fn find_all(&self) -> CoreResult<Vec<E>> {
        if let Some(ref msg) = *self.read_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.inner.find_all().await
    }

    async fn create(&self, request: &E::Request) -> CoreResult<E> {
        self.check_write().await?;
        self.inner.create(request).await
    }

    async fn update(&self, entity: &E) -> CoreResult<E> {
        self.check_write().await?;
        self.inner.update(entity).await
    }

    async fn delete(&self, id: &str) -> CoreResult<()> {
        self.check_write().await?;
        self.inner.delete(id).await
    }
}

// ===== 实体构造 =====

pub fn customer(id: &str, name: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        company: format!("{name} Co."),
        email: format!("{id}@example.com"),
        phone: "0900000000".to_string(),
        notes: String::new(),
        status: Status::Active,
    }
}

pub fn domain(id: &str, name: &str, expiry_date: &str) -> Domain {
    Domain {
        id: id.to_string(),
        domain_name: name.to_string(),
        registrar: "Namecheap".to_string(),
        purchase_date: "2023-01-01".to_string(),
        expiry_date: expiry_date.to_string(),
        nameservers: vec!["dns1.namecheap.com".to_string()],
        a_record: None,
        hosting_id: None,
        customer_id: "c1".to_string(),
        status: Status::Active,
        is_auto_renew: false,
    }
}

pub fn hosting(id: &str, name: &str, primary_domain: &str, vps_id: Option<&str>) -> HostingPackage {
    HostingPackage {
        id: id.to_string(),
        name: name.to_string(),
        kind: HostingType::Shared,
        vps_id: vps_id.map(str::to_string),
        control_panel: ControlPanel::CPanel,
        customer_id: Some("c1".to_string()),
        primary_domain: primary_domain.to_string(),
        ip_address: None,
        expiry_date: "2030-01-01".to_string(),
    }
}

pub fn vps(id: &str, name: &str, ip_address: &str) -> Vps {
    Vps {
        id: id.to_string(),
        name: name.to_string(),
        provider: "Vultr".to_string(),
        ip_address: ip_address.to_string(),
        os: "Ubuntu 22.04 LTS".to_string(),
        specs: VpsSpecs {
            cpu: "2 vCore".to_string(),
            ram: "4GB".to_string(),
            disk: "80GB NVMe".to_string(),
        },
        expiry_date: "2030-01-01".to_string(),
        status: ServerStatus::Online,
        customer_id: None,
    }
}

// ===== 工厂方法 =====

/// 测试用仓库集合
pub struct TestRepositories {
    pub customers: Arc<MockRepository<Customer>>,
    pub domains: Arc<MockRepository<Domain>>,
    pub hostings: Arc<MockRepository<HostingPackage>>,
    pub vps: Arc<MockRepository<Vps>>,
}

/// 创建测试用 `ServiceContext`
pub fn create_test_context(
    customers: &[Customer],
    domains: &[Domain],
    hostings: &[HostingPackage],
    servers: &[Vps],
    config: EngineConfig,
) -> (Arc<ServiceContext>, TestRepositories) {
    let repos = TestRepositories {
        customers: Arc::new(MockRepository::new(customers)),
        domains: Arc::new(MockRepository::new(domains)),
        hostings: Arc::new(MockRepository::new(hostings)),
        vps: Arc::new(MockRepository::new(servers)),
    };

    let ctx = Arc::new(ServiceContext::new(
        repos.customers.clone(),
        repos.domains.clone(),
        repos.hostings.clone(),
        repos.vps.clone(),
        config,
    ));

    (ctx, repos)
}

/// 创建并加载测试用 `EntityStore`
pub async fn create_loaded_store(
    customers: &[Customer],
    domains: &[Domain],
    hostings: &[HostingPackage],
    servers: &[Vps],
) -> (Arc<EntityStore>, TestRepositories) {
    let (ctx, repos) = create_test_context(
        customers,
        domains,
        hostings,
        servers,
        EngineConfig::default(),
    );
    let store = Arc::new(EntityStore::new(ctx));
    store.load_all().await.unwrap();
    (store, repos)
}
