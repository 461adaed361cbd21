//! Domain name related type definitions

use serde::{Deserialize, Serialize};

use super::customer::Status;
use crate::error::{CoreError, CoreResult};

/// A registered domain name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Domain ID (assigned by the persistence layer)
    pub id: String,
    /// Fully qualified domain name, e.g. `example.com`
    pub domain_name: String,
    /// Registrar (Namecheap, GoDaddy, ...)
    pub registrar: String,
    pub purchase_date: String,
    pub expiry_date: String,
    /// Nameservers, in the order configured at the registrar
    #[serde(default)]
    pub nameservers: Vec<String>,
    /// Legacy direct IP annotation. Deprecated, still consulted by
    /// the VPS linkage view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_record: Option<String>,
    /// Hosting package this domain is attached to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting_id: Option<String>,
    pub customer_id: String,
    pub status: Status,
    pub is_auto_renew: bool,
}

/// Create-domain request (no ID, the persistence layer assigns one)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainRequest {
    pub domain_name: String,
    pub registrar: String,
    pub purchase_date: String,
    pub expiry_date: String,
    #[serde(default)]
    pub nameservers: Vec<String>,
    #[serde(default)]
    pub a_record: Option<String>,
    #[serde(default)]
    pub hosting_id: Option<String>,
    pub customer_id: String,
    pub status: Status,
    pub is_auto_renew: bool,
}

impl CreateDomainRequest {
    /// Checks required fields.
    pub fn validate(&self) -> CoreResult<()> {
        if self.domain_name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Domain name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Domain {
    #[must_use]
    pub fn from_request(id: String, request: CreateDomainRequest) -> Self {
        Self {
            id,
            domain_name: request.domain_name,
            registrar: request.registrar,
            purchase_date: request.purchase_date,
            expiry_date: request.expiry_date,
            nameservers: request.nameservers,
            a_record: request.a_record,
            hosting_id: request.hosting_id,
            customer_id: request.customer_id,
            status: request.status,
            is_auto_renew: request.is_auto_renew,
        }
    }

    #[must_use]
    pub fn to_request(&self) -> CreateDomainRequest {
        CreateDomainRequest {
            domain_name: self.domain_name.clone(),
            registrar: self.registrar.clone(),
            purchase_date: self.purchase_date.clone(),
            expiry_date: self.expiry_date.clone(),
            nameservers: self.nameservers.clone(),
            a_record: self.a_record.clone(),
            hosting_id: self.hosting_id.clone(),
            customer_id: self.customer_id.clone(),
            status: self.status,
            is_auto_renew: self.is_auto_renew,
        }
    }
}
