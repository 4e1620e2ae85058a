use serde::{Deserialize, Serialize};

/// Unified error type for all DNS provider operations.
///
/// Each variant carries a `provider` field identifying which adapter produced
/// the error, plus variant-specific context. All variants serialize for
/// structured error reporting.
///
/// # Retryable Errors
///
/// [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout) and
/// [`RateLimited`](Self::RateLimited) are transient and eligible for the
/// bounded retry in the shared HTTP executor. Vendor-side rejections
/// (validation failures, missing records, bad credentials) are never retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, HTTP 502-504).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait in seconds before retrying, if the API provided one.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The provided credentials are invalid or expired.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A DNS record with the same name/type already exists upstream.
    RecordExists {
        /// Provider that produced the error.
        provider: String,
        /// Name of the conflicting record.
        record_name: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified DNS record was not found.
    ///
    /// The reconciler treats this as success for deletes (idempotent delete)
    /// and as a hard error for updates.
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// ID of the record that was not found.
        record_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected by the vendor (bad content, bad TTL,
    /// record type that cannot be proxied, ...). Surfaced verbatim, not retried.
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what is wrong.
        detail: String,
    },

    /// The requested DNS record type is not supported by this provider.
    UnsupportedRecordType {
        /// Provider that produced the error.
        provider: String,
        /// The unsupported record type string.
        record_type: String,
    },

    /// The account's resource quota has been exceeded. Not transient.
    QuotaExceeded {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified zone was not found at the provider.
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone reference that was not found.
        zone: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated account lacks permission for the operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::RecordExists { .. }
                | Self::RecordNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedRecordType { .. }
                | Self::QuotaExceeded { .. }
                | Self::ZoneNotFound { .. }
                | Self::PermissionDenied { .. }
        )
    }

    /// Whether the remote resource is already gone.
    ///
    /// Covers the structured [`RecordNotFound`](Self::RecordNotFound) variant
    /// as well as unmapped vendor errors whose text reads as a 404, so the
    /// reconciler can treat a second delete as success regardless of how well
    /// the adapter understood the vendor's error code.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::RecordNotFound { .. } => true,
            Self::Unknown {
                raw_code,
                raw_message,
                ..
            } => {
                raw_code.as_deref() == Some("404")
                    || raw_message.to_lowercase().contains("not found")
            }
            _ => false,
        }
    }

    /// Whether a retry may succeed (network/timeout/rate-limit only).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::RecordExists {
                provider,
                record_name,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_name}' already exists")
            }
            Self::RecordNotFound {
                provider,
                record_id,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_id}' not found")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::UnsupportedRecordType {
                provider,
                record_type,
            } => {
                write!(f, "[{provider}] Unsupported record type: {record_type}")
            }
            Self::QuotaExceeded { provider, .. } => {
                write!(f, "[{provider}] Quota exceeded")
            }
            Self::ZoneNotFound {
                provider,
                zone,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Zone '{zone}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Zone '{zone}' not found")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
