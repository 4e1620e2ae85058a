//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns_panel_provider::{CredentialValidationError, ProviderError};

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// 记录类型冲突（创建前置检查）
    #[error("Conflict at {full_name}: existing {existing_type} record with content \"{existing_content}\" excludes a new {desired_type} record; edit the existing record or use a different host")]
    Conflict {
        full_name: String,
        existing_type: String,
        existing_content: String,
        desired_type: String,
    },

    /// 完全相同的记录已存在
    #[error("Duplicate record at {full_name}: an identical {record_type} record with content \"{content}\" already exists")]
    Duplicate {
        full_name: String,
        record_type: String,
        content: String,
    },

    /// 未知的服务商类型
    #[error("Unknown provider type: {0}")]
    UnknownProvider(String),

    /// Channel not found
    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    /// Domain name not found
    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    /// Record not found
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Credential validation errors (structured, supports field level errors)
    #[error("{0}")]
    CredentialError(#[from] CredentialValidationError),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 远程调用成功后本地镜像写入失败，镜像与服务商之间产生漂移
    ///
    /// 这是唯一需要按接近致命处理的状态，必须高调上报并标记人工对账。
    #[error("Mirror drift: remote operation succeeded but the local mirror write failed: {detail}")]
    MirrorDrift { detail: String },

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Conflict { .. }
            | Self::Duplicate { .. }
            | Self::UnknownProvider(_)
            | Self::ChannelNotFound(_)
            | Self::DomainNotFound(_)
            | Self::RecordNotFound(_)
            | Self::CredentialError(_)
            | Self::ValidationError(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::MirrorDrift { .. } | Self::StorageError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
