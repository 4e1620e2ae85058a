//! 域名到期时间查询
//!
//! 导入域名时通过 WHOIS 尽力查询到期时间。查询不到、解析不了、
//! 网络失败都返回 `None`，绝不阻塞或失败导入流程。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use whois_rust::{WhoIs, WhoIsLookupOptions};

/// 内嵌 WHOIS 服务器配置
const WHOIS_SERVERS: &str = include_str!("whois_servers.json");

/// 不同注册局的到期时间字段写法
const EXPIRY_PATTERNS: [&str; 4] = [
    r"(?i)Expir(?:y|ation) Date:\s*(.+)",
    r"(?i)Registry Expiry Date:\s*(.+)",
    r"(?i)Expiration Time:\s*(.+)",
    r"(?i)paid-till:\s*(.+)",
];

/// 查询域名的到期时间（best-effort）
pub async fn lookup_expiration(domain: &str) -> Option<DateTime<Utc>> {
    let whois = match WhoIs::from_string(WHOIS_SERVERS) {
        Ok(w) => w,
        Err(e) => {
            log::debug!("WHOIS client init failed: {e}");
            return None;
        }
    };

    let options = match WhoIsLookupOptions::from_string(domain) {
        Ok(o) => o,
        Err(e) => {
            log::debug!("WHOIS lookup skipped for {domain}: {e}");
            return None;
        }
    };

    match whois.lookup_async(options).await {
        Ok(raw) => extract_expiration(&raw),
        Err(e) => {
            log::debug!("WHOIS query failed for {domain}: {e}");
            None
        }
    }
}

/// 从原始 WHOIS 响应中提取到期时间
fn extract_expiration(raw: &str) -> Option<DateTime<Utc>> {
    for pattern in EXPIRY_PATTERNS {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(raw) {
                if let Some(m) = caps.get(1) {
                    let value = m.as_str().trim();
                    if let Some(dt) = parse_whois_date(value) {
                        return Some(dt);
                    }
                }
            }
        }
    }
    None
}

/// 解析注册局常见的几种日期写法
fn parse_whois_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    // "2026-03-17 12:48:36"（CNNIC 等）
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    // 纯日期
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_icann_format() {
        let raw = "Domain Name: EXAMPLE.COM\nRegistry Expiry Date: 2026-08-13T04:00:00Z\n";
        let dt = extract_expiration(raw).unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-08-13T04:00:00+00:00");
    }

    #[test]
    fn test_extract_cn_format() {
        let raw = "Registration Time: 2003-03-17 12:20:05\nExpiration Time: 2026-03-17 12:48:36\n";
        let dt = extract_expiration(raw).unwrap();
        assert_eq!(
            dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2026-03-17 12:48:36"
        );
    }

    #[test]
    fn test_extract_ru_format() {
        let raw = "state: REGISTERED, DELEGATED\npaid-till: 2025-12-01T00:00:00Z\n";
        assert!(extract_expiration(raw).is_some());
    }

    #[test]
    fn test_extract_date_only() {
        let raw = "Expiry Date: 2027-01-31\n";
        let dt = extract_expiration(raw).unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2027-01-31");
    }

    #[test]
    fn test_unparseable_response_is_none() {
        assert!(extract_expiration("No match for domain").is_none());
    }

    #[test]
    fn test_embedded_server_list_is_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(WHOIS_SERVERS).unwrap();
        assert!(parsed.get("com").is_some());
    }
}
