//! 域名（区域）相关类型定义

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 本地镜像中的一个 DNS 区域
///
/// `credentials` 是导入时从所属渠道复制的快照，不是对渠道的外键引用。
/// 渠道后续改密不影响已导入的域名，这是刻意的反范式化设计。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    /// 域名 ID (UUID)
    pub id: String,
    /// 域名（镜像内唯一）
    #[serde(rename = "domainName")]
    pub domain_name: String,
    /// 服务商类型字符串
    #[serde(rename = "providerType")]
    pub provider_type: String,
    /// 服务商侧区域标识（Cloudflare zone id / Rainbow thirdid / DNSPod DomainId / PowerDNS zone id）
    #[serde(rename = "zoneRef")]
    pub zone_ref: String,
    /// 凭证快照
    pub credentials: HashMap<String, String>,
    /// 新记录的默认代理开关（仅 Cloudflare 有意义）
    #[serde(rename = "proxiedDefault")]
    pub proxied_default: bool,
    /// 到期时间（WHOIS 尽力查询，可为空）
    #[serde(rename = "expirationTime")]
    #[serde(with = "crate::utils::datetime::option")]
    #[serde(default)]
    pub expiration_time: Option<DateTime<Utc>>,
    /// 创建时间
    #[serde(rename = "createdAt")]
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
}

impl Domain {
    /// 由子域构造完整主机名（`@` 表示根域名）
    #[must_use]
    pub fn full_name(&self, subdomain: &str) -> String {
        if subdomain == "@" || subdomain.is_empty() {
            self.domain_name.clone()
        } else {
            format!("{subdomain}.{}", self.domain_name)
        }
    }
}
