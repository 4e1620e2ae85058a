//! `DNSPod` 错误码映射
//!
//! 腾讯云错误码是 `Module.Detail` 形式的字符串，
//! 参考: <https://cloud.tencent.com/document/api/1427/56192>

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::DnspodProvider;

impl ProviderErrorMapper for DnspodProvider {
    fn provider_name(&self) -> &'static str {
        "dnspod"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let Some(code) = raw.code.as_deref() else {
            return self.unknown_error(raw);
        };

        match code {
            // 认证失败
            "AuthFailure.SignatureFailure"
            | "AuthFailure.SignatureExpire"
            | "AuthFailure.SecretIdNotFound"
            | "AuthFailure.TokenFailure"
            | "AuthFailure.InvalidSecretId" => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 无权限
            "AuthFailure.UnauthorizedOperation" | "UnauthorizedOperation" => {
                ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // 限频
            "RequestLimitExceeded" => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // 记录已存在
            "InvalidParameter.DomainRecordExist" => ProviderError::RecordExists {
                provider: self.provider_name().to_string(),
                record_name: context
                    .record_name
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // 记录不存在
            "ResourceNotFound.NoDataOfRecord" | "InvalidParameter.RecordIdInvalid" => {
                ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record_id: context.record_id.unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(raw.message),
                }
            }

            // 域名不存在
            "InvalidParameterValue.DomainNotExists" | "ResourceNotFound.NoDataOfDomain" => {
                ProviderError::ZoneNotFound {
                    provider: self.provider_name().to_string(),
                    zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(raw.message),
                }
            }

            // 配额
            "LimitExceeded" | "LimitExceeded.RecordLimit" | "LimitExceeded.DomainLimit" => {
                ProviderError::QuotaExceeded {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            _ if code.starts_with("InvalidParameterValue") || code.starts_with("InvalidParameter") =>
            {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "general".to_string(),
                    detail: raw.message,
                }
            }

            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DnspodProvider {
        DnspodProvider::new("id".to_string(), "key".to_string())
    }

    #[test]
    fn signature_failure_is_invalid_credentials() {
        let err = provider().map_error(
            RawApiError::with_code("AuthFailure.SignatureFailure", "sign err"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn request_limit_is_rate_limited() {
        let err = provider().map_error(
            RawApiError::with_code("RequestLimitExceeded", "too fast"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::RateLimited { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn record_exist_maps_with_name() {
        let err = provider().map_error(
            RawApiError::with_code("InvalidParameter.DomainRecordExist", "dup"),
            ErrorContext {
                record_name: Some("www.example.com".to_string()),
                ..ErrorContext::default()
            },
        );
        assert!(matches!(
            err,
            ProviderError::RecordExists { record_name, .. } if record_name == "www.example.com"
        ));
    }

    #[test]
    fn no_data_of_record_is_not_found() {
        let err = provider().map_error(
            RawApiError::with_code("ResourceNotFound.NoDataOfRecord", "none"),
            ErrorContext::default(),
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn domain_not_exists_is_zone_not_found() {
        let err = provider().map_error(
            RawApiError::with_code("InvalidParameterValue.DomainNotExists", "gone"),
            ErrorContext {
                zone: Some("123456".to_string()),
                ..ErrorContext::default()
            },
        );
        assert!(matches!(
            err,
            ProviderError::ZoneNotFound { zone, .. } if zone == "123456"
        ));
    }

    #[test]
    fn generic_invalid_parameter_prefix() {
        let err = provider().map_error(
            RawApiError::with_code("InvalidParameterValue.TTLInvalid", "bad ttl"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::InvalidParameter { .. }));
    }

    #[test]
    fn unknown_code_falls_back() {
        let err = provider().map_error(
            RawApiError::with_code("InternalError", "oops"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::Unknown { .. }));
    }
}
