//! PowerDNS API 类型定义
//!
//! 参考: <https://doc.powerdns.com/authoritative/http-api/zone.html>

use serde::{Deserialize, Serialize};

/// `GET /zones` 的区域条目
#[derive(Debug, Deserialize)]
pub struct PowerdnsZone {
    /// 区域 id（通常是带尾点的区域名）
    pub id: String,
    pub name: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub kind: String,
}

/// `GET /zones/{id}` 的区域详情
#[derive(Debug, Deserialize)]
pub struct PowerdnsZoneDetail {
    #[allow(dead_code)]
    pub id: String,
    #[allow(dead_code)]
    pub name: String,
    #[serde(default)]
    pub rrsets: Vec<PowerdnsRrset>,
}

/// RRset：同名同类型记录的集合
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerdnsRrset {
    /// 带尾点的完整名称
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub records: Vec<PowerdnsRecord>,
}

/// RRset 内的单条内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerdnsRecord {
    pub content: String,
    #[serde(default)]
    pub disabled: bool,
}

/// `PATCH /zones/{id}` 的请求体
#[derive(Debug, Serialize)]
pub struct RrsetPatch {
    pub rrsets: Vec<RrsetChange>,
}

/// 单个 RRset 变更，`changetype` 为 REPLACE 或 DELETE
#[derive(Debug, Serialize)]
pub struct RrsetChange {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub changetype: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<PowerdnsRecord>,
}

impl RrsetChange {
    pub fn replace(name: String, record_type: String, ttl: u32, records: Vec<PowerdnsRecord>) -> Self {
        Self {
            name,
            record_type,
            changetype: "REPLACE",
            ttl: Some(ttl),
            records,
        }
    }

    pub fn delete(name: String, record_type: String) -> Self {
        Self {
            name,
            record_type,
            changetype: "DELETE",
            ttl: None,
            records: Vec::new(),
        }
    }
}

/// 错误响应体 `{"error": "..."}`
#[derive(Debug, Deserialize)]
pub struct PowerdnsError {
    pub error: String,
}
