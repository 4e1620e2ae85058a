//! RainbowDNS (彩虹聚合 DNS) Provider
//!
//! 自建聚合面板，API 部署在用户配置的 base URL 下。区域引用是面板侧的
//! "thirdid"。没有 CDN 代理概念。

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) use types::{RainbowRecord, RainbowResponse, RainbowZone};

/// 列表接口单页最大条数
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

/// RainbowDNS Provider
pub struct RainbowProvider {
    pub(crate) client: Client,
    pub(crate) provider_uid: u64,
    pub(crate) api_key: String,
    /// 规范化后的面板地址（无尾部斜杠）
    pub(crate) base_url: String,
    pub(crate) max_retries: u32,
}

impl RainbowProvider {
    pub fn new(provider_uid: u64, api_key: String, base_url: String) -> Self {
        Self {
            client: create_http_client(),
            provider_uid,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries: 1,
        }
    }
}
