//! Cloudflare DNS Provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) use types::{CloudflareDnsRecord, CloudflareResponse, CloudflareZone};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// DNS Records API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;
/// Zones API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;

/// Cloudflare 认证方式
///
/// API Token（推荐）与 email + Global API Key（历史遗留）都被接受；
/// 两者同时配置时优先使用 Token。
#[derive(Debug, Clone)]
pub struct CloudflareAuth {
    pub(crate) api_token: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) api_key: Option<String>,
}

impl CloudflareAuth {
    pub(crate) fn has_token(&self) -> bool {
        self.api_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub(crate) fn has_global_key(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
            && self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// Cloudflare DNS Provider
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) auth: CloudflareAuth,
    pub(crate) max_retries: u32,
}

impl CloudflareProvider {
    pub fn new(api_token: Option<String>, email: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: create_http_client(),
            auth: CloudflareAuth {
                api_token,
                email,
                api_key,
            },
            max_retries: 1,
        }
    }
}
