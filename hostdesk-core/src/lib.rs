//! HostDesk Core Library
//!
//! Core business logic of the HostDesk CRM, including:
//! - Entity store for customers, domains, hosting packages and servers
//! - Linkage resolution between domains, hosting packages and servers
//! - Expiry feed and outage alerts (Expiry Service)
//! - Simulated DNS health checks (DNS Health Service)
//!
//! This library is platform-independent; storage and sessions are abstracted through traits.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{Entity, EntityRepository, InMemoryEntityRepository, SessionGate};
