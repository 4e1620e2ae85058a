//! 域名到期时间查询抽象 Trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::expiry;

/// 到期时间查询 Trait
///
/// 导入流程用它给域名行补充到期时间。任何失败都返回 `None`，
/// 查询永远不能让导入失败。
#[async_trait]
pub trait ExpirationLookup: Send + Sync {
    /// 查询域名的到期时间（best-effort）
    async fn lookup(&self, domain: &str) -> Option<DateTime<Utc>>;
}

/// 默认实现：WHOIS 查询
pub struct WhoisExpirationLookup;

#[async_trait]
impl ExpirationLookup for WhoisExpirationLookup {
    async fn lookup(&self, domain: &str) -> Option<DateTime<Utc>> {
        expiry::lookup_expiration(domain).await
    }
}
