//! VPS / 物理服务器类型定义

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// 服务器运行状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerStatus {
    #[default]
    Online,
    Offline,
    Maintenance,
}

impl ServerStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Maintenance => "Maintenance",
        }
    }
}

/// 硬件规格（自由文本）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpsSpecs {
    pub cpu: String,
    pub ram: String,
    pub disk: String,
}

/// 服务器
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vps {
    pub id: String,
    pub name: String,
    /// 服务商（Vultr、DigitalOcean 等）
    pub provider: String,
    pub ip_address: String,
    pub os: String,
    pub specs: VpsSpecs,
    pub expiry_date: String,
    pub status: ServerStatus,
    /// 独占该服务器的客户
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

/// 创建服务器请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVpsRequest {
    pub name: String,
    pub provider: String,
    pub ip_address: String,
    pub os: String,
    pub specs: VpsSpecs,
    pub expiry_date: String,
    pub status: ServerStatus,
    #[serde(default)]
    pub customer_id: Option<String>,
}

impl CreateVpsRequest {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "VPS name cannot be empty".to_string(),
            ));
        }
        if self.ip_address.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "VPS IP address cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Vps {
    #[must_use]
    pub fn from_request(id: String, request: CreateVpsRequest) -> Self {
        Self {
            id,
            name: request.name,
            provider: request.provider,
            ip_address: request.ip_address,
            os: request.os,
            specs: request.specs,
            expiry_date: request.expiry_date,
            status: request.status,
            customer_id: request.customer_id,
        }
    }

    #[must_use]
    pub fn to_request(&self) -> CreateVpsRequest {
        CreateVpsRequest {
            name: self.name.clone(),
            provider: self.provider.clone(),
            ip_address: self.ip_address.clone(),
            os: self.os.clone(),
            specs: self.specs.clone(),
            expiry_date: self.expiry_date.clone(),
            status: self.status,
            customer_id: self.customer_id.clone(),
        }
    }
}
