//! DNS 记录持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::DnsRecordEntry;

/// 记录仓库 Trait
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// 获取某个域名下的全部记录
    async fn find_by_domain(&self, domain_id: &str) -> CoreResult<Vec<DnsRecordEntry>>;

    /// 根据 ID 获取记录
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<DnsRecordEntry>>;

    /// 保存记录（新建或更新）
    async fn save(&self, record: &DnsRecordEntry) -> CoreResult<()>;

    /// 删除记录
    async fn delete(&self, id: &str) -> CoreResult<()>;
}
