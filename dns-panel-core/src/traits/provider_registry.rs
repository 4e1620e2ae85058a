//! Provider registry abstract Trait

use std::collections::HashMap;
use std::sync::Arc;

use dns_panel_provider::{create_provider, DnsProvider, ProviderCredentials, ProviderType};

use crate::error::{CoreError, CoreResult};

/// Provider Registry Trait
///
/// 给定域名（或渠道）存储的服务商类型字符串与凭证键值对，
/// 构造一个可直接使用的适配器实例。
/// 默认实现为 `CredentialProviderRegistry`，测试通过替换实现注入 mock。
pub trait ProviderRegistry: Send + Sync {
    /// 构造适配器
    ///
    /// # Errors
    /// - `UnknownProvider`：无法识别的服务商类型字符串
    /// - `CredentialError`：必填凭证字段缺失或为空
    fn adapter_for(
        &self,
        provider_type: &str,
        credentials: &HashMap<String, String>,
    ) -> CoreResult<Arc<dyn DnsProvider>>;
}

/// 基于凭证快照的默认注册表
///
/// 无状态，每次调用都按快照新建适配器。适配器内部的 HTTP client
/// 构造成本低，且快照随域名变化，不做跨域名缓存。
#[derive(Clone, Default)]
pub struct CredentialProviderRegistry;

impl CredentialProviderRegistry {
    /// 创建注册表
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProviderRegistry for CredentialProviderRegistry {
    fn adapter_for(
        &self,
        provider_type: &str,
        credentials: &HashMap<String, String>,
    ) -> CoreResult<Arc<dyn DnsProvider>> {
        let parsed = ProviderType::parse(provider_type)
            .ok_or_else(|| CoreError::UnknownProvider(provider_type.to_string()))?;
        let structured = ProviderCredentials::from_map(parsed, credentials)?;
        Ok(create_provider(structured)?)
    }
}
