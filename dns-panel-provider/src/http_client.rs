//! Shared HTTP request machinery.
//!
//! Each provider keeps full control over how it builds and signs a request;
//! this module only unifies the send/log/classify/retry pipeline so adapters
//! do not repeat it.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set.
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return `(status_code, body_text)`.
    ///
    /// Classifies transport-level failures: reqwest timeout → [`ProviderError::Timeout`],
    /// other transport errors → [`ProviderError::NetworkError`], HTTP 429 →
    /// [`ProviderError::RateLimited`] (with `Retry-After` when present),
    /// HTTP 502-504 → retryable [`ProviderError::NetworkError`]. Everything
    /// else is handed back for the adapter's own envelope parsing.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Retry-After 要在消费 body 之前取出
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {body}"),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body into `T`.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Send a request with bounded retry on transient errors.
    ///
    /// Only network errors, timeouts and rate limits are retried; vendor
    /// rejections (auth failures, missing records, validation errors) are
    /// returned immediately so retry never changes classification semantics.
    /// Backoff is exponential (100ms doubling, capped at 10s), except that a
    /// `Retry-After` hint from a rate limit takes precedence (capped at 30s).
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ProviderError> {
        if max_retries == 0 {
            return Self::execute_request(
                request_builder,
                provider_name,
                method_name,
                url_or_action,
            )
            .await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder 只能消费一次，重试前必须 clone
            let Some(req) = request_builder.try_clone() else {
                // body 为流时无法 clone，退化为不重试
                log::warn!("[{provider_name}] Cannot clone request, disabling retry");
                return Self::execute_request(
                    request_builder,
                    provider_name,
                    method_name,
                    url_or_action,
                )
                .await;
            };

            match Self::execute_request(req, provider_name, method_name, url_or_action).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        provider_name,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Pick the delay before the next attempt.
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// Exponential backoff: 100ms, 200ms, 400ms, ... capped at 10 seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // 防止 2^attempt 溢出
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use std::time::Duration;

    #[test]
    fn backoff_progression() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(2), Duration::from_millis(400));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // attempt 7: 100 * 2^7 = 12800ms，封顶 10000ms
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(20), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_delay_honors_retry_after() {
        let e = ProviderError::RateLimited {
            provider: "t".into(),
            retry_after: Some(5),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(5));
    }

    #[test]
    fn retry_delay_caps_retry_after() {
        let e = ProviderError::RateLimited {
            provider: "t".into(),
            retry_after: Some(600),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(30));
    }

    #[test]
    fn retry_delay_falls_back_to_backoff() {
        let e = ProviderError::NetworkError {
            provider: "t".into(),
            detail: "x".into(),
        };
        assert_eq!(retry_delay(&e, 2), Duration::from_millis(400));
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
