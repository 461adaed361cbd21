//! 类型定义模块

mod config;
mod customer;
mod domain;
mod expiry;
mod hosting;
mod kind;
mod linkage;
mod overview;
mod record;
mod response;
mod session;
mod vps;

pub use config::EngineConfig;
pub use customer::{CreateCustomerRequest, Customer, Status};
pub use domain::{CreateDomainRequest, Domain};
pub use expiry::{ExpiryDashboard, ExpiryFeed, ExpiryItem, ExpiryKind, OfflineAlert, Urgency};
pub use hosting::{ControlPanel, CreateHostingRequest, HostingPackage, HostingType};
pub use kind::EntityKind;
pub use linkage::{
    CheckState, DnsHealthRow, HostingNode, InfrastructureTopology, VerificationResult, VpsNode,
};
pub use overview::{CustomerPortfolio, OverviewStats};
pub use record::{CustomerRecord, DomainRecord, HostingRecord, VpsRecord};
pub use response::{PaginatedResponse, PaginationParams};
pub use session::Session;
pub use vps::{CreateVpsRequest, ServerStatus, Vps, VpsSpecs};
