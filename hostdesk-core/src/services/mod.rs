//! 业务逻辑服务层

mod dns_health_service;
mod entity_store;
mod expiry_service;
mod linkage_resolver;
mod overview_service;

pub use dns_health_service::DnsHealthService;
pub use entity_store::{Collections, EntityStore, Stored};
pub use expiry_service::ExpiryService;
pub use linkage_resolver::LinkageResolver;
pub use overview_service::OverviewService;

use std::sync::Arc;

use crate::traits::EntityRepository;
use crate::types::{Customer, Domain, EngineConfig, HostingPackage, Vps};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    customer_repository: Arc<dyn EntityRepository<Customer>>,
    domain_repository: Arc<dyn EntityRepository<Domain>>,
    hosting_repository: Arc<dyn EntityRepository<HostingPackage>>,
    vps_repository: Arc<dyn EntityRepository<Vps>>,
    config: EngineConfig,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        customer_repository: Arc<dyn EntityRepository<Customer>>,
        domain_repository: Arc<dyn EntityRepository<Domain>>,
        hosting_repository: Arc<dyn EntityRepository<HostingPackage>>,
        vps_repository: Arc<dyn EntityRepository<Vps>>,
        config: EngineConfig,
    ) -> Self {
        Self {
            customer_repository,
            domain_repository,
            hosting_repository,
            vps_repository,
            config,
        }
    }

    pub fn customer_repository(&self) -> &Arc<dyn EntityRepository<Customer>> {
        &self.customer_repository
    }

    pub fn domain_repository(&self) -> &Arc<dyn EntityRepository<Domain>> {
        &self.domain_repository
    }

    pub fn hosting_repository(&self) -> &Arc<dyn EntityRepository<HostingPackage>> {
        &self.hosting_repository
    }

    pub fn vps_repository(&self) -> &Arc<dyn EntityRepository<Vps>> {
        &self.vps_repository
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
