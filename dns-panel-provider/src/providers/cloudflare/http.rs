//! Cloudflare HTTP 请求方法

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{CF_API_BASE, CloudflareProvider, CloudflareResponse};

impl CloudflareProvider {
    /// 为请求附加认证头
    ///
    /// Token 与 Global Key 同时配置时优先使用 Token。
    pub(crate) fn apply_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.auth.api_token.as_deref().filter(|t| !t.is_empty()) {
            builder.header("Authorization", format!("Bearer {token}"))
        } else if let (Some(email), Some(key)) =
            (self.auth.email.as_deref(), self.auth.api_key.as_deref())
        {
            builder
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", key)
        } else {
            builder
        }
    }

    /// 发送请求并解析 Cloudflare 响应信封
    ///
    /// `success == false` 时取第一个错误映射为统一错误类型。
    pub(crate) async fn send<T: for<'de> Deserialize<'de>>(
        &self,
        builder: RequestBuilder,
        method_name: &str,
        url: &str,
        context: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let (_, response_text) = HttpUtils::execute_request_with_retry(
            self.apply_auth(builder),
            self.provider_name(),
            method_name,
            url,
            self.max_retries,
        )
        .await?;

        let cf_response: CloudflareResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        if !cf_response.success {
            let (code, message) = cf_response
                .errors
                .and_then(|errors| {
                    errors
                        .first()
                        .map(|e| (e.code.to_string(), e.message.clone()))
                })
                .unwrap_or_else(|| (String::new(), "Unknown error".to_string()));
            let raw = RawApiError::with_code(code, message);
            let mapped = self.map_error(raw, context);
            if mapped.is_expected() {
                log::warn!("[cloudflare] API 错误: {mapped}");
            } else {
                log::error!("[cloudflare] API 错误: {mapped}");
            }
            return Err(mapped);
        }

        Ok(cf_response)
    }

    /// 执行 GET 请求，返回 result
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{CF_API_BASE}{path}");
        let response: CloudflareResponse<T> = self
            .send(self.client.get(&url), "GET", &url, context)
            .await?;
        response
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))
    }

    /// 执行 GET 请求 (带分页)，返回 `(items, total_count)`
    pub(crate) async fn get_paginated<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<T>, u32)> {
        let url = format!("{CF_API_BASE}{path}?page={page}&per_page={per_page}");
        let response: CloudflareResponse<Vec<T>> = self
            .send(self.client.get(&url), "GET", &url, ErrorContext::default())
            .await?;

        let total_count = response.result_info.map_or(0, |i| i.total_count);
        let items = response.result.unwrap_or_default();
        Ok((items, total_count))
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{CF_API_BASE}{path}");
        let response: CloudflareResponse<T> = self
            .send(self.client.post(&url).json(body), "POST", &url, context)
            .await?;
        response
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))
    }

    /// 执行 PATCH 请求
    pub(crate) async fn patch<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{CF_API_BASE}{path}");
        let response: CloudflareResponse<T> = self
            .send(self.client.patch(&url).json(body), "PATCH", &url, context)
            .await?;
        response
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        let url = format!("{CF_API_BASE}{path}");
        let _: CloudflareResponse<serde_json::Value> = self
            .send(self.client.delete(&url), "DELETE", &url, context)
            .await?;
        Ok(())
    }
}
