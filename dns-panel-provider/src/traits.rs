use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    CreateRecordRequest, CredentialCheck, RemoteRecord, UpdateRecordRequest, ZoneSummary,
};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录名称（用于 `RecordExists` 等错误）
    pub record_name: Option<String>,
    /// 记录 ID（用于 `RecordNotFound` 等错误）
    pub record_id: Option<String>,
    /// 区域引用（用于 `ZoneNotFound` 等错误）
    pub zone: Option<String>,
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS 提供商能力契约
///
/// Adapters translate this contract into a specific vendor's HTTP API, auth
/// scheme and identifier scheme. All calls are outbound HTTPS; adapters never
/// touch local state, and they surface raw error classifications — treating a
/// "not found" delete as success is the reconciler's decision, not theirs.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 验证凭证是否有效（best-effort 探测）
    ///
    /// 同一 Provider 可能支持两种认证方式（如 Cloudflare 的 API Token 与
    /// Global Key），分别探测并在 [`CredentialCheck`] 中独立上报。
    async fn verify_credentials(&self) -> Result<CredentialCheck>;

    /// 列出该账号下的所有区域（用于导入流程）
    async fn list_zones(&self) -> Result<Vec<ZoneSummary>>;

    /// 列出指定区域的全部 DNS 记录
    async fn list_records(&self, zone_ref: &str) -> Result<Vec<RemoteRecord>>;

    /// 创建 DNS 记录
    async fn create_record(&self, req: &CreateRecordRequest) -> Result<RemoteRecord>;

    /// 更新 DNS 记录
    async fn update_record(
        &self,
        remote_id: &str,
        req: &UpdateRecordRequest,
    ) -> Result<RemoteRecord>;

    /// 删除 DNS 记录
    async fn delete_record(&self, zone_ref: &str, remote_id: &str) -> Result<()>;
}
