//! `DNSPod` HTTP 请求方法

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{DNSPOD_API_HOST, DNSPOD_VERSION, DnspodProvider, TencentResponse};

impl DnspodProvider {
    /// 执行腾讯云 API 请求
    pub(crate) async fn request<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        action: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        let timestamp = Utc::now().timestamp();
        let authorization = self.sign(action, &payload, timestamp);

        let url = format!("https://{DNSPOD_API_HOST}");
        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("Host", DNSPOD_API_HOST)
            .header("X-TC-Action", action)
            .header("X-TC-Version", DNSPOD_VERSION)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("Authorization", authorization)
            .body(payload);

        let (_, response_text) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "POST",
            &format!("Action: {action}"),
            self.max_retries,
        )
        .await?;

        let tc_response: TencentResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        if let Some(error) = tc_response.response.error {
            let mapped =
                self.map_error(RawApiError::with_code(&error.code, &error.message), context);
            if mapped.is_expected() {
                log::warn!("[dnspod] API 错误: {mapped}");
            } else {
                log::error!("[dnspod] API 错误: {mapped}");
            }
            return Err(mapped);
        }

        tc_response
            .response
            .data
            .ok_or_else(|| self.parse_error("响应中缺少业务字段"))
    }
}
