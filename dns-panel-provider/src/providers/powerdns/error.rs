//! PowerDNS 错误映射
//!
//! PowerDNS 没有业务错误码，映射依据 HTTP 状态码（塞进 `RawApiError.code`）
//! 加 `{"error": ...}` 的消息文本。

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::PowerdnsProvider;

impl ProviderErrorMapper for PowerdnsProvider {
    fn provider_name(&self) -> &'static str {
        "powerdns"
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
            // 404 在 zone 路径上只可能是区域不存在
            Some("404") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },
            Some("422") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "general".to_string(),
                detail: raw.message,
            },
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> PowerdnsProvider {
        PowerdnsProvider::new(
            "http://ns1:8081".to_string(),
            "k".to_string(),
            "localhost".to_string(),
        )
    }

    #[test]
    fn status_401_invalid_credentials() {
        let err = provider().map_error(
            RawApiError::with_code("401", "Unauthorized"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn status_404_zone_not_found() {
        let err = provider().map_error(
            RawApiError::with_code("404", "Not Found"),
            ErrorContext {
                zone: Some("example.com.".to_string()),
                ..ErrorContext::default()
            },
        );
        assert!(matches!(
            err,
            ProviderError::ZoneNotFound { zone, .. } if zone == "example.com."
        ));
    }

    #[test]
    fn status_422_invalid_parameter() {
        let err = provider().map_error(
            RawApiError::with_code("422", "Conflicts with pre-existing RRset"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::InvalidParameter { .. }));
    }

    #[test]
    fn other_status_unknown() {
        let err = provider().map_error(
            RawApiError::with_code("500", "Internal Server Error"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::Unknown { .. }));
    }
}
