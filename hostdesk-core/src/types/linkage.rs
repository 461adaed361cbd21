//! 基础设施拓扑与 DNS 健康检查类型定义

use serde::{Deserialize, Serialize};

use super::domain::Domain;
use super::hosting::HostingPackage;
use super::vps::Vps;

/// 托管包及指向它的域名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingNode {
    pub hosting: HostingPackage,
    pub domains: Vec<Domain>,
}

/// 服务器、其上的托管包及关联域名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpsNode {
    pub vps: Vps,
    pub hostings: Vec<HostingPackage>,
    pub domains: Vec<Domain>,
}

/// 层级视图：托管包 -> 域名，服务器 -> 域名
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureTopology {
    pub hostings: Vec<HostingNode>,
    pub servers: Vec<VpsNode>,
}

/// 模拟 DNS 检查结果
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum VerificationResult {
    /// 已解析出期望 IP
    Verified { ip: String },
    /// 未关联任何托管包或服务器
    Unlinked,
}

impl VerificationResult {
    #[must_use]
    pub fn from_expected_ip(expected_ip: Option<&str>) -> Self {
        match expected_ip {
            Some(ip) => Self::Verified { ip: ip.to_string() },
            None => Self::Unlinked,
        }
    }

    #[must_use]
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified { .. })
    }

    /// 面向用户的提示文本
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Verified { ip } => format!("Verified: points to IP {ip}"),
            Self::Unlinked => "Not linked to any hosting.".to_string(),
        }
    }
}

/// 单个域名的检查状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CheckState {
    #[default]
    Idle,
    InFlight,
    Done { result: VerificationResult },
}

/// DNS 健康表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsHealthRow {
    pub domain: Domain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosting: Option<HostingPackage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vps: Option<Vps>,
    #[serde(rename = "expectedIP", skip_serializing_if = "Option::is_none")]
    pub expected_ip: Option<String>,
    /// 在 CRM 中视为已关联（不与 `a_record` 比较）
    pub is_match: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_messages() {
        let ok = VerificationResult::from_expected_ip(Some("103.100.200.50"));
        assert!(ok.is_verified());
        assert_eq!(ok.message(), "Verified: points to IP 103.100.200.50");

        let unlinked = VerificationResult::from_expected_ip(None);
        assert!(!unlinked.is_verified());
        assert_eq!(unlinked.message(), "Not linked to any hosting.");
    }

    #[test]
    fn check_state_defaults_to_idle() {
        assert_eq!(CheckState::default(), CheckState::Idle);
    }
}
