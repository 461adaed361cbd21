//! 客户相关类型定义

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// 客户 / 域名的业务状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Active,
    Suspended,
    Expired,
    Pending,
}

impl Status {
    /// 存储层使用的字符串表示
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::Expired => "Expired",
            Self::Pending => "Pending",
        }
    }
}

/// 客户信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// 客户 ID（由持久化层生成）
    pub id: String,
    /// 联系人姓名
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    pub status: Status,
}

/// 创建客户请求（不含 ID）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    pub status: Status,
}

impl CreateCustomerRequest {
    /// 校验必填字段
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Customer name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Customer {
    /// 由创建请求和持久化层分配的 ID 构造
    #[must_use]
    pub fn from_request(id: String, request: CreateCustomerRequest) -> Self {
        Self {
            id,
            name: request.name,
            company: request.company,
            email: request.email,
            phone: request.phone,
            notes: request.notes,
            status: request.status,
        }
    }

    /// 去掉 ID 后的请求形态（用于校验更新内容）
    #[must_use]
    pub fn to_request(&self) -> CreateCustomerRequest {
        CreateCustomerRequest {
            name: self.name.clone(),
            company: self.company.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            notes: self.notes.clone(),
            status: self.status,
        }
    }
}
