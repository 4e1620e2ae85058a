//! Cloudflare DnsProvider trait 实现

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::parse_record_type;
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    CreateRecordRequest, CredentialCheck, RecordType, RemoteRecord, UpdateRecordRequest,
    ZoneStatus, ZoneSummary,
};

use super::types::CloudflareFallbackOrigin;
use super::{
    CF_API_BASE, CloudflareDnsRecord, CloudflareProvider, CloudflareResponse, CloudflareZone,
    MAX_PAGE_SIZE_RECORDS, MAX_PAGE_SIZE_ZONES,
};

/// Token 验证接口的 result
#[derive(Debug, Deserialize)]
struct TokenVerifyResult {
    status: String,
}

/// DNS 记录写请求体
#[derive(Debug, Serialize)]
struct RecordPayload<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: &'a str,
    content: &'a str,
    /// Cloudflare 的 1 表示 "auto"
    ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    proxied: Option<bool>,
}

impl<'a> RecordPayload<'a> {
    fn new(
        record_type: RecordType,
        name: &'a str,
        content: &'a str,
        proxied: Option<bool>,
    ) -> Self {
        Self {
            record_type: record_type.as_str(),
            name,
            content,
            ttl: 1,
            // 不可代理的类型不发送 proxied 字段
            proxied: if record_type.is_proxiable() {
                proxied
            } else {
                None
            },
        }
    }
}

impl CloudflareProvider {
    /// 将 Cloudflare zone 转换为 [`ZoneSummary`]
    /// Cloudflare 状态：active, pending, initializing, moved
    fn zone_to_summary(zone: CloudflareZone) -> ZoneSummary {
        let status = match zone.status.as_str() {
            "active" => ZoneStatus::Active,
            "pending" | "initializing" => ZoneStatus::Pending,
            "moved" => ZoneStatus::Paused,
            _ => ZoneStatus::Unknown,
        };

        ZoneSummary {
            id: zone.id,
            name: zone.name,
            status,
        }
    }

    /// 将 Cloudflare 记录转换为统一的 [`RemoteRecord`]
    fn cf_record_to_remote(&self, cf_record: CloudflareDnsRecord) -> Result<RemoteRecord> {
        let record_type = parse_record_type(&cf_record.record_type, self.provider_name())?;

        Ok(RemoteRecord {
            id: cf_record.id,
            name: cf_record.name,
            record_type,
            content: cf_record.content,
            proxied: cf_record.proxied,
            fallback_origin: false,
        })
    }

    /// 探测 API Token 是否有效
    ///
    /// `GET /user/tokens/verify`，result.status 为 "active" 才算通过。
    async fn probe_token(&self, token: &str) -> Result<bool> {
        let url = format!("{CF_API_BASE}/user/tokens/verify");
        let builder = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"));

        let (_, text) =
            HttpUtils::execute_request(builder, self.provider_name(), "GET", &url).await?;
        let response: CloudflareResponse<TokenVerifyResult> =
            HttpUtils::parse_json(&text, self.provider_name())?;

        Ok(response.success
            && response
                .result
                .is_some_and(|r| r.status == "active"))
    }

    /// 探测 email + Global API Key 是否有效
    ///
    /// `GET /user`，success 即通过。
    async fn probe_global_key(&self, email: &str, api_key: &str) -> Result<bool> {
        let url = format!("{CF_API_BASE}/user");
        let builder = self
            .client
            .get(&url)
            .header("X-Auth-Email", email)
            .header("X-Auth-Key", api_key);

        let (_, text) =
            HttpUtils::execute_request(builder, self.provider_name(), "GET", &url).await?;
        let response: CloudflareResponse<serde_json::Value> =
            HttpUtils::parse_json(&text, self.provider_name())?;

        Ok(response.success)
    }

    /// 查询区域的 fallback origin（SaaS 回退源）
    ///
    /// 未配置该功能或 Token 无权限时接口会报错，此时按"无回退源"处理，
    /// 不影响记录列表本身。
    async fn fetch_fallback_origin(&self, zone_ref: &str) -> Option<String> {
        let path = format!("/zones/{zone_ref}/custom_hostnames/fallback_origin");
        match self
            .get::<CloudflareFallbackOrigin>(&path, ErrorContext::default())
            .await
        {
            Ok(result) => result.origin.filter(|o| !o.is_empty()),
            Err(e) => {
                log::debug!("[cloudflare] fallback origin unavailable for {zone_ref}: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn verify_credentials(&self) -> Result<CredentialCheck> {
        let mut check = CredentialCheck::default();
        let mut errors: Vec<String> = Vec::new();

        // 两种认证方式各自独立探测，互不影响结果
        if self.auth.has_token() {
            let token = self.auth.api_token.as_deref().unwrap_or_default();
            match self.probe_token(token).await {
                Ok(valid) => check.api_token_valid = valid,
                Err(e) => {
                    log::warn!("[cloudflare] Token probe failed: {e}");
                    errors.push(format!("token: {e}"));
                }
            }
        }

        if self.auth.has_global_key() {
            let (email, api_key) = (
                self.auth.email.as_deref().unwrap_or_default(),
                self.auth.api_key.as_deref().unwrap_or_default(),
            );
            match self.probe_global_key(email, api_key).await {
                Ok(valid) => check.global_key_valid = valid,
                Err(e) => {
                    log::warn!("[cloudflare] Global key probe failed: {e}");
                    errors.push(format!("global key: {e}"));
                }
            }
        }

        if !check.is_valid() && !errors.is_empty() {
            check.error_message = Some(errors.join("; "));
        }

        Ok(check)
    }

    async fn list_zones(&self) -> Result<Vec<ZoneSummary>> {
        let mut zones: Vec<ZoneSummary> = Vec::new();
        let mut page = 1_u32;

        loop {
            let (batch, total_count): (Vec<CloudflareZone>, u32) = self
                .get_paginated("/zones", page, MAX_PAGE_SIZE_ZONES)
                .await?;

            if batch.is_empty() {
                break;
            }
            zones.extend(batch.into_iter().map(Self::zone_to_summary));

            if zones.len() as u32 >= total_count {
                break;
            }
            page += 1;
        }

        log::info!("[cloudflare] Listed {} zones", zones.len());
        Ok(zones)
    }

    async fn list_records(&self, zone_ref: &str) -> Result<Vec<RemoteRecord>> {
        let mut records: Vec<RemoteRecord> = Vec::new();
        let mut page = 1_u32;

        loop {
            let path = format!("/zones/{zone_ref}/dns_records");
            let (batch, total_count): (Vec<CloudflareDnsRecord>, u32) = self
                .get_paginated(&path, page, MAX_PAGE_SIZE_RECORDS)
                .await?;

            if batch.is_empty() {
                break;
            }
            for cf_record in batch {
                // 面板未启用的记录类型（如 LOC）跳过而不是整体失败
                match self.cf_record_to_remote(cf_record) {
                    Ok(record) => records.push(record),
                    Err(e) => log::warn!("[cloudflare] Skipping record: {e}"),
                }
            }

            if records.len() as u32 >= total_count {
                break;
            }
            page += 1;
        }

        // 标记被 SaaS 回退源钉住的记录，下游更新时必须保持代理开启
        if let Some(origin) = self.fetch_fallback_origin(zone_ref).await {
            for record in &mut records {
                if record.name.eq_ignore_ascii_case(&origin) {
                    record.fallback_origin = true;
                }
            }
        }

        Ok(records)
    }

    async fn create_record(&self, req: &CreateRecordRequest) -> Result<RemoteRecord> {
        let payload = RecordPayload::new(req.record_type, &req.name, &req.content, req.proxied);
        let context = ErrorContext {
            record_name: Some(req.name.clone()),
            zone: Some(req.zone_ref.clone()),
            ..ErrorContext::default()
        };

        let path = format!("/zones/{}/dns_records", req.zone_ref);
        let created: CloudflareDnsRecord = self.post(&path, &payload, context).await?;
        self.cf_record_to_remote(created)
    }

    async fn update_record(
        &self,
        remote_id: &str,
        req: &UpdateRecordRequest,
    ) -> Result<RemoteRecord> {
        let payload = RecordPayload::new(req.record_type, &req.name, &req.content, req.proxied);
        let context = ErrorContext {
            record_name: Some(req.name.clone()),
            record_id: Some(remote_id.to_string()),
            zone: Some(req.zone_ref.clone()),
        };

        let path = format!("/zones/{}/dns_records/{remote_id}", req.zone_ref);
        let updated: CloudflareDnsRecord = self.patch(&path, &payload, context).await?;
        self.cf_record_to_remote(updated)
    }

    async fn delete_record(&self, zone_ref: &str, remote_id: &str) -> Result<()> {
        let context = ErrorContext {
            record_id: Some(remote_id.to_string()),
            zone: Some(zone_ref.to_string()),
            ..ErrorContext::default()
        };

        let path = format!("/zones/{zone_ref}/dns_records/{remote_id}");
        self.delete(&path, context).await
    }
}
