//! `DNSPod` TC3-HMAC-SHA256 签名
//!
//! 参考: <https://cloud.tencent.com/document/api/1427/56189>

use chrono::{DateTime, Utc};

use crate::providers::common::{hmac_sha256, sha256_hex};

use super::{DNSPOD_API_HOST, DNSPOD_SERVICE, DnspodProvider};

const ALGORITHM: &str = "TC3-HMAC-SHA256";
const SIGNED_HEADERS: &str = "content-type;host;x-tc-action";

/// 规范请求串（步骤 1）
fn canonical_request(action: &str, payload: &str) -> String {
    let canonical_headers = format!(
        "content-type:application/json; charset=utf-8\nhost:{DNSPOD_API_HOST}\nx-tc-action:{}\n",
        action.to_lowercase()
    );
    format!(
        "POST\n/\n\n{canonical_headers}\n{SIGNED_HEADERS}\n{}",
        sha256_hex(payload.as_bytes())
    )
}

impl DnspodProvider {
    /// 生成请求的 `Authorization` 头
    pub(crate) fn sign(&self, action: &str, payload: &str, timestamp: i64) -> String {
        let date = DateTime::from_timestamp(timestamp, 0)
            .unwrap_or_else(Utc::now)
            .format("%Y-%m-%d")
            .to_string();
        let credential_scope = format!("{date}/{DNSPOD_SERVICE}/tc3_request");

        // 待签名字符串（步骤 2）
        let string_to_sign = format!(
            "{ALGORITHM}\n{timestamp}\n{credential_scope}\n{}",
            sha256_hex(canonical_request(action, payload).as_bytes())
        );

        // 派生签名密钥并计算签名（步骤 3）
        let secret_date = hmac_sha256(
            format!("TC3{}", self.secret_key).as_bytes(),
            date.as_bytes(),
        );
        let secret_service = hmac_sha256(&secret_date, DNSPOD_SERVICE.as_bytes());
        let secret_signing = hmac_sha256(&secret_service, b"tc3_request");
        let signature = hex::encode(hmac_sha256(&secret_signing, string_to_sign.as_bytes()));

        format!(
            "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            self.secret_id
        )
    }
}
