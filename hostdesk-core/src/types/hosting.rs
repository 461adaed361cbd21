//! Hosting package type definitions

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Hosting plan category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostingType {
    #[default]
    Shared,
    Reseller,
    Dedicated,
}

impl HostingType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "Shared",
            Self::Reseller => "Reseller",
            Self::Dedicated => "Dedicated",
        }
    }
}

/// Control panel installed on the package
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlPanel {
    #[default]
    #[serde(rename = "cPanel")]
    CPanel,
    DirectAdmin,
    CyberPanel,
}

impl ControlPanel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CPanel => "cPanel",
            Self::DirectAdmin => "DirectAdmin",
            Self::CyberPanel => "CyberPanel",
        }
    }
}

/// A hosting package sold to a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingPackage {
    /// Hosting package ID
    pub id: String,
    /// Plan name, e.g. "Shared Starter"
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HostingType,
    /// VPS this package resides on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vps_id: Option<String>,
    pub control_panel: ControlPanel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Domain name used as a fallback join key. Not a foreign key.
    pub primary_domain: String,
    /// Explicit IP, takes precedence over the VPS address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    pub expiry_date: String,
}

/// Create-hosting request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostingRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HostingType,
    #[serde(default)]
    pub vps_id: Option<String>,
    pub control_panel: ControlPanel,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub primary_domain: String,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub expiry_date: String,
}

impl CreateHostingRequest {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Hosting package name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl HostingPackage {
    #[must_use]
    pub fn from_request(id: String, request: CreateHostingRequest) -> Self {
        Self {
            id,
            name: request.name,
            kind: request.kind,
            vps_id: request.vps_id,
            control_panel: request.control_panel,
            customer_id: request.customer_id,
            primary_domain: request.primary_domain,
            ip_address: request.ip_address,
            expiry_date: request.expiry_date,
        }
    }

    #[must_use]
    pub fn to_request(&self) -> CreateHostingRequest {
        CreateHostingRequest {
            name: self.name.clone(),
            kind: self.kind,
            vps_id: self.vps_id.clone(),
            control_panel: self.control_panel,
            customer_id: self.customer_id.clone(),
            primary_domain: self.primary_domain.clone(),
            ip_address: self.ip_address.clone(),
            expiry_date: self.expiry_date.clone(),
        }
    }
}
