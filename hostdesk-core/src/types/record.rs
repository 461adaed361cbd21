//! Storage-layer row representations.
//!
//! The persistence collaborator stores entities with snake_case keys and
//! plain-string enum columns (`ip_address`, `vps_id`, `"cPanel"`...). Every
//! adapter goes through the conversions below:
//! - model -> record: total
//! - record -> model: fails only on unknown enum strings

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::customer::{Customer, Status};
use super::domain::Domain;
use super::hosting::HostingPackage;
use super::vps::{Vps, VpsSpecs};
use crate::error::{CoreError, CoreResult};

/// `customers` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    pub status: String,
}

/// `domains` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub id: String,
    pub domain_name: String,
    pub registrar: String,
    pub purchase_date: String,
    pub expiry_date: String,
    #[serde(default)]
    pub nameservers: Vec<String>,
    pub a_record: Option<String>,
    pub hosting_id: Option<String>,
    pub customer_id: String,
    pub status: String,
    pub is_auto_renew: bool,
}

/// `hosting_packages` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub vps_id: Option<String>,
    pub control_panel: String,
    pub customer_id: Option<String>,
    pub primary_domain: String,
    pub ip_address: Option<String>,
    pub expiry_date: String,
}

/// `vps` row (specs flattened into three columns)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpsRecord {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub ip_address: String,
    pub os: String,
    pub cpu: String,
    pub ram: String,
    pub disk: String,
    pub expiry_date: String,
    pub status: String,
    pub customer_id: Option<String>,
}

/// Parses a plain-string enum column through its serde representation.
fn parse_enum<T: DeserializeOwned>(column: &str, value: String) -> CoreResult<T> {
    serde_json::from_value(serde_json::Value::String(value))
        .map_err(|e| CoreError::SerializationError(format!("Invalid {column}: {e}")))
}

/// Empty strings in nullable reference columns mean "unset".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<&Customer> for CustomerRecord {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            company: c.company.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            notes: c.notes.clone(),
            status: c.status.as_str().to_string(),
        }
    }
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = CoreError;

    fn try_from(r: CustomerRecord) -> CoreResult<Self> {
        Ok(Self {
            id: r.id,
            name: r.name,
            company: r.company,
            email: r.email,
            phone: r.phone,
            notes: r.notes,
            status: parse_enum::<Status>("status", r.status)?,
        })
    }
}

impl From<&Domain> for DomainRecord {
    fn from(d: &Domain) -> Self {
        Self {
            id: d.id.clone(),
            domain_name: d.domain_name.clone(),
            registrar: d.registrar.clone(),
            purchase_date: d.purchase_date.clone(),
            expiry_date: d.expiry_date.clone(),
            nameservers: d.nameservers.clone(),
            a_record: d.a_record.clone(),
            hosting_id: d.hosting_id.clone(),
            customer_id: d.customer_id.clone(),
            status: d.status.as_str().to_string(),
            is_auto_renew: d.is_auto_renew,
        }
    }
}

impl TryFrom<DomainRecord> for Domain {
    type Error = CoreError;

    fn try_from(r: DomainRecord) -> CoreResult<Self> {
        Ok(Self {
            id: r.id,
            domain_name: r.domain_name,
            registrar: r.registrar,
            purchase_date: r.purchase_date,
            expiry_date: r.expiry_date,
            nameservers: r.nameservers,
            a_record: non_empty(r.a_record),
            hosting_id: non_empty(r.hosting_id),
            customer_id: r.customer_id,
            status: parse_enum("status", r.status)?,
            is_auto_renew: r.is_auto_renew,
        })
    }
}

impl From<&HostingPackage> for HostingRecord {
    fn from(h: &HostingPackage) -> Self {
        Self {
            id: h.id.clone(),
            name: h.name.clone(),
            kind: h.kind.as_str().to_string(),
            vps_id: h.vps_id.clone(),
            control_panel: h.control_panel.as_str().to_string(),
            customer_id: h.customer_id.clone(),
            primary_domain: h.primary_domain.clone(),
            ip_address: h.ip_address.clone(),
            expiry_date: h.expiry_date.clone(),
        }
    }
}

impl TryFrom<HostingRecord> for HostingPackage {
    type Error = CoreError;

    fn try_from(r: HostingRecord) -> CoreResult<Self> {
        Ok(Self {
            id: r.id,
            name: r.name,
            kind: parse_enum("type", r.kind)?,
            vps_id: non_empty(r.vps_id),
            control_panel: parse_enum("control_panel", r.control_panel)?,
            customer_id: non_empty(r.customer_id),
            primary_domain: r.primary_domain,
            ip_address: non_empty(r.ip_address),
            expiry_date: r.expiry_date,
        })
    }
}

impl From<&Vps> for VpsRecord {
    fn from(v: &Vps) -> Self {
        Self {
            id: v.id.clone(),
            name: v.name.clone(),
            provider: v.provider.clone(),
            ip_address: v.ip_address.clone(),
            os: v.os.clone(),
            cpu: v.specs.cpu.clone(),
            ram: v.specs.ram.clone(),
            disk: v.specs.disk.clone(),
            expiry_date: v.expiry_date.clone(),
            status: v.status.as_str().to_string(),
            customer_id: v.customer_id.clone(),
        }
    }
}

impl TryFrom<VpsRecord> for Vps {
    type Error = CoreError;

    fn try_from(r: VpsRecord) -> CoreResult<Self> {
        Ok(Self {
            id: r.id,
            name: r.name,
            provider: r.provider,
            ip_address: r.ip_address,
            os: r.os,
            specs: VpsSpecs {
                cpu: r.cpu,
                ram: r.ram,
                disk: r.disk,
            },
            expiry_date: r.expiry_date,
            status: parse_enum("status", r.status)?,
            customer_id: non_empty(r.customer_id),
        })
    }
}
