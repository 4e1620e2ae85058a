//! Provider 公共工具函数

use std::time::Duration;

use hmac::{Hmac, Mac};
use reqwest::Client;
use sha2::{Digest, Sha256};

use crate::error::{ProviderError, Result};
use crate::types::RecordType;

type HmacSha256 = Hmac<Sha256>;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}

// ============ 记录类型转换 ============

/// 将字符串转换为 [`RecordType`]，不认识的类型归为 `UnsupportedRecordType`
pub fn parse_record_type(record_type: &str, provider: &str) -> Result<RecordType> {
    RecordType::parse(record_type).ok_or_else(|| ProviderError::UnsupportedRecordType {
        provider: provider.to_string(),
        record_type: record_type.to_string(),
    })
}

// ============ 签名原语 ============

/// HMAC-SHA256 计算（DNSPod TC3 签名使用）
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// SHA-256 十六进制摘要（Rainbow 请求签名、TC3 规范请求哈希）
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// 将相对名称转换为完整域名
/// 如: "www" + "example.com" -> "www.example.com"
/// 如: "@" + "example.com" -> "example.com"
pub fn relative_to_full_name(relative_name: &str, zone_name: &str) -> String {
    let zone = normalize_domain_name(zone_name);

    if relative_name == "@" || relative_name.is_empty() {
        zone
    } else {
        format!("{relative_name}.{zone}")
    }
}

/// 将完整域名转换为相对名称
/// 如: "www.example.com" + "example.com" -> "www"
/// 如: "example.com" + "example.com" -> "@"
pub fn full_name_to_relative(full_name: &str, zone_name: &str) -> String {
    let full = normalize_domain_name(full_name);
    let zone = normalize_domain_name(zone_name);

    if full.eq_ignore_ascii_case(&zone) {
        "@".to_string()
    } else if let Some(subdomain) = full
        .to_ascii_lowercase()
        .strip_suffix(&format!(".{}", zone.to_ascii_lowercase()))
    {
        full[..subdomain.len()].to_string()
    } else {
        full
    }
}
