//! 解析渠道（服务商账户）相关类型定义

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 解析渠道：一组可用于某个服务商的凭证
///
/// 凭证以扁平键值对存储（`apiToken` / `secretId` 等，按服务商而定），
/// 构造适配器时再解析为结构化凭证。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// 渠道 ID (UUID)
    pub id: String,
    /// 渠道名称
    pub name: String,
    /// 服务商类型字符串（cloudflare / rainbow / dnspod / powerdns）
    #[serde(rename = "providerType")]
    pub provider_type: String,
    /// 凭证键值对
    pub credentials: HashMap<String, String>,
    /// 是否启用（停用的渠道不能发起导入）
    pub active: bool,
    /// 创建时间
    #[serde(rename = "createdAt")]
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
}

/// 创建渠道请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChannelRequest {
    /// 渠道名称
    pub name: String,
    /// 服务商类型字符串
    #[serde(rename = "providerType")]
    pub provider_type: String,
    /// 凭证键值对
    pub credentials: HashMap<String, String>,
}

/// 更新渠道请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChannelRequest {
    /// 渠道 ID
    pub id: String,
    /// 新的渠道名称（可选）
    pub name: Option<String>,
    /// 新的凭证（可选，提供时整体覆盖原有凭证）
    pub credentials: Option<HashMap<String, String>>,
    /// 启用/停用（可选）
    pub active: Option<bool>,
}
