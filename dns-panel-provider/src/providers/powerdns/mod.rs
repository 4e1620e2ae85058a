//! 自建 PowerDNS Provider
//!
//! PowerDNS 的权威 API 是 RRset 模型：没有单条记录 id，同名同类型的
//! 记录共享一个 RRset。这里用 `name|type|content` 合成记录 id，
//! 改/删时重建整个 RRset。

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub(crate) use types::{PowerdnsRrset, PowerdnsZone, PowerdnsZoneDetail};

/// 合成记录 id 的字段分隔符
pub(crate) const RECORD_ID_SEPARATOR: char = '|';

/// 自建 PowerDNS Provider
pub struct PowerdnsProvider {
    pub(crate) client: Client,
    /// 规范化后的 API 地址（无尾部斜杠）
    pub(crate) api_url: String,
    pub(crate) api_key: String,
    pub(crate) server_id: String,
    pub(crate) max_retries: u32,
}

impl PowerdnsProvider {
    pub fn new(api_url: String, api_key: String, server_id: String) -> Self {
        Self {
            client: create_http_client(),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            server_id,
            max_retries: 1,
        }
    }

    /// `/api/v1/servers/{server_id}` 前缀
    pub(crate) fn server_base(&self) -> String {
        format!("{}/api/v1/servers/{}", self.api_url, self.server_id)
    }
}
