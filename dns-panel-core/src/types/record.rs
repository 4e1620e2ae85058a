//! DNS 记录（本地镜像行）相关类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dns_panel_provider::RecordType;

use super::Actor;

/// 本地镜像中的一条 DNS 记录
///
/// `remote_id` 为空表示该行从未与服务商同步成功（或为手工导入的残留行）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecordEntry {
    /// 记录 ID (UUID)
    pub id: String,
    /// 所属域名 ID
    #[serde(rename = "domainId")]
    pub domain_id: String,
    /// 所属用户 ID（为空表示系统记录）
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// 子域标签（`@` 表示根域名）
    pub subdomain: String,
    /// 记录类型
    #[serde(rename = "recordType")]
    pub record_type: RecordType,
    /// 记录值
    pub content: String,
    /// 代理开关（仅对可代理类型有意义）
    pub proxied: bool,
    /// 服务商侧记录 ID
    #[serde(rename = "remoteId", skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    /// 备注
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// 创建时间
    #[serde(rename = "createdAt")]
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
}

/// 创建记录命令
#[derive(Debug, Clone)]
pub struct CreateRecordCommand {
    /// 目标域名 ID
    pub domain_id: String,
    /// 子域标签（`@` 表示根域名）
    pub subdomain: String,
    /// 记录类型
    pub record_type: RecordType,
    /// 记录值
    pub content: String,
    /// 请求的代理开关（缺省时取域名的 `proxied_default`，
    /// 非可代理类型会被强制关闭）
    pub proxied: Option<bool>,
    /// 备注
    pub remark: Option<String>,
    /// 归属用户（为空表示系统记录）
    pub user_id: Option<String>,
    /// 操作发起者
    pub actor: Actor,
}

/// 更新记录命令
#[derive(Debug, Clone)]
pub struct UpdateRecordCommand {
    /// 目标记录 ID
    pub record_id: String,
    /// 子域标签
    pub subdomain: String,
    /// 记录类型
    pub record_type: RecordType,
    /// 记录值
    pub content: String,
    /// 请求的代理开关
    pub proxied: bool,
    /// 备注
    pub remark: Option<String>,
    /// 操作发起者
    pub actor: Actor,
}

/// 更新结果
///
/// 命中服务商侧的回退源站钉选规则时，`warning` 携带提示信息而非报错。
#[derive(Debug, Clone, Serialize)]
pub struct UpdateOutcome {
    /// 更新后的镜像行
    pub record: DnsRecordEntry,
    /// 非致命提示
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
