//! RainbowDNS HTTP 请求方法
//!
//! 认证走查询参数: `uid` + `timestamp` + `sign`，
//! 其中 `sign = sha256(uid + timestamp + api_key)` 的十六进制。

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::sha256_hex;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{RainbowProvider, RainbowResponse};

impl RainbowProvider {
    /// 生成 `[(uid, ..), (timestamp, ..), (sign, ..)]` 认证参数
    fn auth_params(&self) -> [(&'static str, String); 3] {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let sign = sha256_hex(format!("{}{}{}", self.provider_uid, timestamp, self.api_key).as_bytes());
        [
            ("uid", self.provider_uid.to_string()),
            ("timestamp", timestamp),
            ("sign", sign),
        ]
    }

    /// 解包响应信封，`code != 0` 时映射为统一错误
    fn unwrap_envelope<T>(
        &self,
        response: RainbowResponse<T>,
        context: ErrorContext,
    ) -> Result<T> {
        if response.code != 0 {
            let raw = RawApiError::with_code(response.code.to_string(), response.msg);
            return Err(self.map_error(raw, context));
        }
        response
            .data
            .ok_or_else(|| self.parse_error("响应中缺少 data 字段"))
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let builder = self
            .client
            .get(&url)
            .query(&self.auth_params())
            .query(query);

        let (_, text) = HttpUtils::execute_request_with_retry(
            builder,
            self.provider_name(),
            "GET",
            &url,
            self.max_retries,
        )
        .await?;

        let response: RainbowResponse<T> = HttpUtils::parse_json(&text, self.provider_name())?;
        self.unwrap_envelope(response, context)
    }

    /// 执行 POST 请求（JSON body）
    pub(crate) async fn post<T: for<'de> Deserialize<'de>, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let builder = self
            .client
            .post(&url)
            .query(&self.auth_params())
            .json(body);

        let (_, text) = HttpUtils::execute_request_with_retry(
            builder,
            self.provider_name(),
            "POST",
            &url,
            self.max_retries,
        )
        .await?;

        let response: RainbowResponse<T> = HttpUtils::parse_json(&text, self.provider_name())?;
        self.unwrap_envelope(response, context)
    }

    /// 执行 POST 请求，只关心成功与否（删除接口的 data 为空）
    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        let url = format!("{}{path}", self.base_url);
        let builder = self
            .client
            .post(&url)
            .query(&self.auth_params())
            .json(body);

        let (_, text) = HttpUtils::execute_request_with_retry(
            builder,
            self.provider_name(),
            "POST",
            &url,
            self.max_retries,
        )
        .await?;

        let response: RainbowResponse<serde_json::Value> =
            HttpUtils::parse_json(&text, self.provider_name())?;
        if response.code != 0 {
            let raw = RawApiError::with_code(response.code.to_string(), response.msg);
            return Err(self.map_error(raw, context));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success() {
        let p = RainbowProvider::new(1, "k".into(), "https://x".into());
        let resp = RainbowResponse {
            code: 0,
            msg: String::new(),
            data: Some(7_i32),
        };
        assert_eq!(p.unwrap_envelope(resp, ErrorContext::default()).unwrap(), 7);
    }

    #[test]
    fn envelope_error_mapped() {
        let p = RainbowProvider::new(1, "k".into(), "https://x".into());
        let resp: RainbowResponse<i32> = RainbowResponse {
            code: 401,
            msg: "unauthorized".to_string(),
            data: None,
        };
        let err = p.unwrap_envelope(resp, ErrorContext::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ProviderError::InvalidCredentials { .. }
        ));
    }

    #[test]
    fn envelope_success_without_data_is_parse_error() {
        let p = RainbowProvider::new(1, "k".into(), "https://x".into());
        let resp: RainbowResponse<i32> = RainbowResponse {
            code: 0,
            msg: String::new(),
            data: None,
        };
        assert!(p.unwrap_envelope(resp, ErrorContext::default()).is_err());
    }
}
