//! 渠道持久化抽象 Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Channel;

/// 渠道仓库 Trait
///
/// 平台实现：
/// - SQLite: `SqliteStore` (`SeaORM`)
/// - 测试: `MockChannelRepository`
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// 获取所有渠道
    async fn find_all(&self) -> CoreResult<Vec<Channel>>;

    /// 根据 ID 获取渠道
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Channel>>;

    /// 保存渠道（新建或更新）
    async fn save(&self, channel: &Channel) -> CoreResult<()>;

    /// 删除渠道
    ///
    /// 不级联删除引用该渠道快照的域名，快照是复制而非引用。
    async fn delete(&self, id: &str) -> CoreResult<()>;
}
