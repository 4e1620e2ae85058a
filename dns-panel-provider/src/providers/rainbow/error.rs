//! RainbowDNS 错误映射
//!
//! 面板错误码不稳定，主要依赖 HTTP 风格的 code 加消息文本启发式。

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::RainbowProvider;

impl ProviderErrorMapper for RainbowProvider {
    fn provider_name(&self) -> &'static str {
        "rainbow"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some("401") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            Some("403") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },
            Some("404") => ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record_id: context.record_id.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },
            _ => {
                let lower = raw.message.to_lowercase();
                if lower.contains("sign") || raw.message.contains("签名") {
                    ProviderError::InvalidCredentials {
                        provider: self.provider_name().to_string(),
                        raw_message: Some(raw.message),
                    }
                } else if lower.contains("not found")
                    || lower.contains("not exist")
                    || raw.message.contains("不存在")
                {
                    ProviderError::RecordNotFound {
                        provider: self.provider_name().to_string(),
                        record_id: context.record_id.unwrap_or_else(|| "<unknown>".to_string()),
                        raw_message: Some(raw.message),
                    }
                } else if lower.contains("exist") || raw.message.contains("已存在") {
                    ProviderError::RecordExists {
                        provider: self.provider_name().to_string(),
                        record_name: context
                            .record_name
                            .unwrap_or_else(|| "<unknown>".to_string()),
                        raw_message: Some(raw.message),
                    }
                } else {
                    self.unknown_error(raw)
                }
            }
        }
    }
}
