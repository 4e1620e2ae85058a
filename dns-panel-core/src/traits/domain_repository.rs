//! 域名持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Domain;

/// 域名仓库 Trait
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// 获取所有域名
    async fn find_all(&self) -> CoreResult<Vec<Domain>>;

    /// 根据 ID 获取域名
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Domain>>;

    /// 根据域名名称获取域名（镜像内名称唯一）
    async fn find_by_name(&self, domain_name: &str) -> CoreResult<Option<Domain>>;

    /// 保存域名（新建或更新）
    async fn save(&self, domain: &Domain) -> CoreResult<()>;

    /// 在一个事务内删除域名及其全部记录行
    ///
    /// 级联删除的本地清理步骤。事务中途失败必须保持两者都在或都不在，
    /// 不允许留下孤儿记录行。
    async fn delete_with_records(&self, id: &str) -> CoreResult<()>;
}
