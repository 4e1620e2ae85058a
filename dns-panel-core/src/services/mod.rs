//! 业务逻辑服务层

mod channel_service;
mod domain_service;
mod record_service;

pub use channel_service::ChannelService;
pub use domain_service::DomainService;
pub use record_service::RecordService;

use std::sync::Arc;

use dns_panel_provider::DnsProvider;

use crate::error::{CoreError, CoreResult};
use crate::traits::{
    AuditSink, ChannelRepository, DomainRepository, ExpirationLookup, ProviderRegistry,
    RecordRepository,
};
use crate::types::{Actor, Channel, Domain};

/// 单次操作内对同一服务商的最大并发出站调用数
pub(crate) const MAX_CONCURRENT_PROVIDER_CALLS: usize = 8;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    /// 渠道仓库
    pub channels: Arc<dyn ChannelRepository>,
    /// 域名仓库
    pub domains: Arc<dyn DomainRepository>,
    /// 记录仓库
    pub records: Arc<dyn RecordRepository>,
    /// Provider 注册表
    pub registry: Arc<dyn ProviderRegistry>,
    /// 审计落地
    pub audit: Arc<dyn AuditSink>,
    /// 到期时间查询
    pub expiration: Arc<dyn ExpirationLookup>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        channels: Arc<dyn ChannelRepository>,
        domains: Arc<dyn DomainRepository>,
        records: Arc<dyn RecordRepository>,
        registry: Arc<dyn ProviderRegistry>,
        audit: Arc<dyn AuditSink>,
        expiration: Arc<dyn ExpirationLookup>,
    ) -> Self {
        Self {
            channels,
            domains,
            records,
            registry,
            audit,
            expiration,
        }
    }

    /// 加载域名，不存在时返回 `DomainNotFound`
    pub async fn load_domain(&self, domain_id: &str) -> CoreResult<Domain> {
        self.domains
            .find_by_id(domain_id)
            .await?
            .ok_or_else(|| CoreError::DomainNotFound(domain_id.to_string()))
    }

    /// 加载渠道，不存在时返回 `ChannelNotFound`
    pub async fn load_channel(&self, channel_id: &str) -> CoreResult<Channel> {
        self.channels
            .find_by_id(channel_id)
            .await?
            .ok_or_else(|| CoreError::ChannelNotFound(channel_id.to_string()))
    }

    /// 按域名的凭证快照构造适配器
    pub fn adapter_for_domain(&self, domain: &Domain) -> CoreResult<Arc<dyn DnsProvider>> {
        self.registry
            .adapter_for(&domain.provider_type, &domain.credentials)
    }

    /// 按渠道的凭证构造适配器
    pub fn adapter_for_channel(&self, channel: &Channel) -> CoreResult<Arc<dyn DnsProvider>> {
        self.registry
            .adapter_for(&channel.provider_type, &channel.credentials)
    }

    /// 上报一条审计事件（fire-and-forget）
    pub async fn log_action(&self, actor: &Actor, action: &str, detail: &str) {
        self.audit.log_action(actor, action, detail).await;
    }
}
