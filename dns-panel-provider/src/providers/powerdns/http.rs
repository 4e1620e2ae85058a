//! PowerDNS HTTP 请求方法
//!
//! 认证是单个 `X-API-Key` 头；成功/失败由 HTTP 状态码决定，
//! 失败时响应体为 `{"error": "..."}`。

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::PowerdnsProvider;
use super::types::PowerdnsError;

impl PowerdnsProvider {
    /// 发送请求，按状态码判定成败，返回成功响应体
    async fn send(
        &self,
        builder: RequestBuilder,
        method_name: &str,
        url: &str,
        context: ErrorContext,
    ) -> Result<String> {
        let builder = builder.header("X-API-Key", &self.api_key);

        let (status, text) = HttpUtils::execute_request_with_retry(
            builder,
            self.provider_name(),
            method_name,
            url,
            self.max_retries,
        )
        .await?;

        if (200..300).contains(&status) {
            return Ok(text);
        }

        let message = serde_json::from_str::<PowerdnsError>(&text)
            .map_or(text, |e| e.error);
        let mapped = self.map_error(RawApiError::with_code(status.to_string(), message), context);
        if mapped.is_expected() {
            log::warn!("[powerdns] API 错误: {mapped}");
        } else {
            log::error!("[powerdns] API 错误: {mapped}");
        }
        Err(mapped)
    }

    /// 执行 GET 请求并解析响应体
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.server_base());
        let text = self
            .send(self.client.get(&url), "GET", &url, context)
            .await?;
        HttpUtils::parse_json(&text, self.provider_name())
    }

    /// 执行 PATCH 请求（RRset 变更，成功时响应体为空）
    pub(crate) async fn patch<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        let url = format!("{}{path}", self.server_base());
        self.send(self.client.patch(&url).json(body), "PATCH", &url, context)
            .await?;
        Ok(())
    }
}
